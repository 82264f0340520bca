//! Single decimal digit entry.

use super::input_logic::apply_detent;
use super::{CharDisplay, Cursor, Step, Widget};
use crate::error::Error;
use crate::input::{Detent, Input};

/// A decimal digit, always in `0..=9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    pub const MAX: u8 = 9;
    pub const ZERO: Digit = Digit(0);

    pub fn new(value: u8) -> Result<Self, Error> {
        if value > Self::MAX {
            return Err(Error::FieldOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// 9 wraps to 0.
    pub fn increment(self) -> Self {
        self.step(Detent::Up)
    }

    /// 0 wraps to 9.
    pub fn decrement(self) -> Self {
        self.step(Detent::Down)
    }

    pub fn step(self, detent: Detent) -> Self {
        Self(apply_detent(self.0, Self::MAX, detent))
    }
}

impl From<Digit> for u32 {
    fn from(digit: Digit) -> Self {
        u32::from(digit.0)
    }
}

/// Lets the operator dial one digit; any press commits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitEntry {
    cursor: Cursor,
    value: Digit,
}

impl DigitEntry {
    pub const fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            value: Digit::ZERO,
        }
    }

    pub fn value(&self) -> Digit {
        self.value
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Widget for DigitEntry {
    type Output = Digit;

    fn begin<D: CharDisplay>(&mut self, display: &mut D) {
        display.set_cursor(self.cursor);
        display.print_digit(self.value);
        display.set_cursor(self.cursor);
        display.show_cursor();
    }

    fn handle<D: CharDisplay>(&mut self, input: Input, display: &mut D) -> Step<Digit> {
        match input {
            Input::Turn(detent) => {
                self.value = self.value.step(detent);
                debug!("digit: {}", self.value.value());
                display.print_digit(self.value);
                display.set_cursor(self.cursor);
                Step::Continue
            }
            Input::Press(event) if event.is_press() => {
                display.hide_cursor();
                Step::Done(self.value)
            }
            Input::Press(_) => Step::Continue,
        }
    }
}
