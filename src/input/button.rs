//! Push-button debouncing and short/long press classification.
//!
//! Unlike the interrupt-driven buttons of a multi-button UI, the encoder
//! button is sampled once per polling interval:
//!
//! 1. The raw level is debounced: a change is accepted once it has been
//!    stable for the debounce window.
//! 2. A debounced press starts the hold timer.
//! 3. Reaching the long-press threshold while held reports `Long` at once;
//!    releasing earlier reports `Short`.
//! 4. After `Long` the press stays latched until release and the release is
//!    swallowed, so one physical press is never reported twice.

/// Result of classifying one sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    /// Nothing to report this sample.
    #[default]
    None,
    /// Released before the long-press threshold.
    Short,
    /// Held for at least the long-press threshold.
    Long,
}

impl PressEvent {
    pub fn is_press(self) -> bool {
        self != PressEvent::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hold {
    Released,
    /// Pressed since the contained timestamp, not yet classified.
    Pressed(u64),
    /// Already reported as `Long`; waiting for release.
    Consumed,
}

/// Debounced button state with hold-time classification.
#[derive(Clone, Copy, Debug)]
pub struct PressClassifier {
    long_press_ms: u64,
    debounce_ms: u64,
    /// Last debounced level.
    stable: bool,
    /// Level seen on the previous sample.
    raw: bool,
    /// When `raw` last changed.
    raw_since: u64,
    hold: Hold,
}

impl PressClassifier {
    pub const fn new(long_press_ms: u64, debounce_ms: u64) -> Self {
        Self {
            long_press_ms,
            debounce_ms,
            stable: false,
            raw: false,
            raw_since: 0,
            hold: Hold::Released,
        }
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample taken at `now_ms`.
    pub fn sample(&mut self, pressed: bool, now_ms: u64) -> PressEvent {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since = now_ms;
        }

        if self.raw != self.stable && now_ms.saturating_sub(self.raw_since) >= self.debounce_ms {
            self.stable = self.raw;
            return self.on_edge(now_ms);
        }

        match self.hold {
            Hold::Pressed(since) if self.raw && now_ms.saturating_sub(since) >= self.long_press_ms => {
                self.hold = Hold::Consumed;
                PressEvent::Long
            }
            _ => PressEvent::None,
        }
    }

    fn on_edge(&mut self, now_ms: u64) -> PressEvent {
        if self.stable {
            self.hold = Hold::Pressed(now_ms);
            return PressEvent::None;
        }

        // The hold ended when the release was first seen, not when it
        // finished debouncing.
        let event = match self.hold {
            Hold::Pressed(since) if self.raw_since.saturating_sub(since) >= self.long_press_ms => {
                PressEvent::Long
            }
            Hold::Pressed(_) => PressEvent::Short,
            Hold::Released | Hold::Consumed => PressEvent::None,
        };
        self.hold = Hold::Released;
        event
    }
}
