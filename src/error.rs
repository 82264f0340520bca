//! Unified error type for uvbox.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! The control loop itself cannot fail: wrong passcodes are retried and
//! every numeric field wraps. Errors only arise when building values from
//! untrusted numbers and from the display adapter.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Configuration
    /// Passcode length outside `1..=MAX_PASSCODE_LENGTH`.
    InvalidPasscodeLength(u8),

    /// Passcode value does not fit in the configured number of digits.
    PasscodeOutOfRange(u32),

    // Values
    /// A digit, minute or second value outside its closed range.
    FieldOutOfRange(u8),

    /// Cursor position outside the character grid.
    CursorOutOfBounds {
        /// Requested line.
        line: u8,
        /// Requested column.
        column: u8,
    },

    // UI / Display
    /// I²C transaction to the display failed.
    Display,
}
