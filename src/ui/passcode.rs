//! Multi-digit passcode entry.
//!
//! Digits are entered most significant first, one column apart, and are
//! composed into a single integer:
//!
//! ```text
//!   digits 4, 5, 1  →  4·100 + 5·10 + 1·1  =  451
//! ```

use heapless::Vec;

use super::digit::{Digit, DigitEntry};
use super::{CharDisplay, Cursor, Step, Widget};
use crate::config::{PASSCODE, PASSCODE_LENGTH};
use crate::error::Error;
use crate::input::Input;

/// Longest passcode whose value still fits in a `u32`.
pub const MAX_PASSCODE_LENGTH: usize = 9;

/// Expected passcode: a value and the number of digits it is entered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Passcode {
    value: u32,
    length: u8,
}

impl Passcode {
    /// Compile-time code from `config`.
    pub const REFERENCE: Passcode = Passcode {
        value: PASSCODE,
        length: PASSCODE_LENGTH,
    };

    pub fn new(value: u32, length: u8) -> Result<Self, Error> {
        if length == 0 || usize::from(length) > MAX_PASSCODE_LENGTH {
            return Err(Error::InvalidPasscodeLength(length));
        }
        if value >= 10u32.pow(u32::from(length)) {
            return Err(Error::PasscodeOutOfRange(value));
        }
        Ok(Self { value, length })
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub const fn length(&self) -> u8 {
        self.length
    }

    pub fn matches(&self, entered: u32) -> bool {
        entered == self.value
    }
}

/// Positional weighting, most significant digit first.
pub fn compose(digits: &[Digit]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &d| acc.wrapping_mul(10).wrapping_add(u32::from(d)))
}

/// Split `value` into exactly `length` digits, most significant first.
///
/// Returns `None` if `length` exceeds [`MAX_PASSCODE_LENGTH`] or `value`
/// needs more digits than `length`.
pub fn decompose(value: u32, length: u8) -> Option<Vec<Digit, MAX_PASSCODE_LENGTH>> {
    let length = usize::from(length);
    if length > MAX_PASSCODE_LENGTH || value >= 10u32.pow(length as u32) {
        return None;
    }

    let mut digits: Vec<Digit, MAX_PASSCODE_LENGTH> = Vec::new();
    let mut rest = value;
    for _ in 0..length {
        let _ = digits.push(Digit::new((rest % 10) as u8).ok()?);
        rest /= 10;
    }
    digits.reverse();
    Some(digits)
}

/// Chains one [`DigitEntry`] per passcode digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasscodeEntry {
    origin: Cursor,
    length: u8,
    digits: Vec<Digit, MAX_PASSCODE_LENGTH>,
    current: DigitEntry,
}

impl PasscodeEntry {
    /// Entry of `length` digits starting at `origin`. `length` is clamped
    /// to [`MAX_PASSCODE_LENGTH`].
    pub fn new(origin: Cursor, length: u8) -> Self {
        Self {
            origin,
            length: length.clamp(1, MAX_PASSCODE_LENGTH as u8),
            digits: Vec::new(),
            current: DigitEntry::new(origin),
        }
    }

    /// Digits committed so far.
    pub fn entered(&self) -> &[Digit] {
        &self.digits
    }
}

impl Widget for PasscodeEntry {
    type Output = u32;

    fn begin<D: CharDisplay>(&mut self, display: &mut D) {
        self.digits.clear();
        self.current = DigitEntry::new(self.origin);
        self.current.begin(display);
    }

    fn handle<D: CharDisplay>(&mut self, input: Input, display: &mut D) -> Step<u32> {
        let Step::Done(digit) = self.current.handle(input, display) else {
            return Step::Continue;
        };

        let _ = self.digits.push(digit);
        if self.digits.len() >= usize::from(self.length) {
            return Step::Done(compose(&self.digits));
        }

        let next = self.origin.offset(self.digits.len() as i16);
        self.current = DigitEntry::new(next);
        self.current.begin(display);
        Step::Continue
    }
}
