//! Countdown value and the one-second tick.

use core::fmt::{self, Write};

use heapless::String;

use crate::error::Error;

/// Countdown duration. Hours exist for the borrow chain but are never set
/// by the operator, so they stay 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeValue {
    /// Largest minute or second value.
    pub const FIELD_MAX: u8 = 59;
    pub const ZERO: TimeValue = TimeValue {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(minutes: u8, seconds: u8) -> Result<Self, Error> {
        for field in [minutes, seconds] {
            if field > Self::FIELD_MAX {
                return Err(Error::FieldOutOfRange(field));
            }
        }
        Ok(Self {
            hours: 0,
            minutes,
            seconds,
        })
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// Take one second off, borrowing from minutes (and hours).
    ///
    /// Returns `false` and leaves the value untouched at 00:00.
    pub fn decrement(&mut self) -> bool {
        if self.is_zero() {
            return false;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = Self::FIELD_MAX;
        } else {
            self.hours -= 1;
            self.minutes = Self::FIELD_MAX;
            self.seconds = Self::FIELD_MAX;
        }
        true
    }

    /// Zero-padded `MM:SS`.
    pub fn as_text(&self) -> String<5> {
        let mut text = String::new();
        // Both fields are at most 59, so five bytes always suffice.
        let _ = write!(text, "{}", self);
        text
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Free-running periodic tick.
///
/// `poll` reports at most one elapsed period per call. The reference moves
/// by exactly one period each time, so a stalled caller catches up one
/// period per poll instead of losing time.
#[derive(Clone, Copy, Debug)]
pub struct SecondTicker {
    period_ms: u64,
    last_ms: Option<u64>,
}

impl SecondTicker {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            last_ms: None,
        }
    }

    /// Restart the period at `now_ms`.
    pub fn rearm(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return false;
        };
        if now_ms.saturating_sub(last) < self.period_ms {
            return false;
        }
        self.last_ms = Some(last + self.period_ms);
        true
    }
}
