//! User interface subsystem - character display + encoder entry widgets.
//!
//! The widgets are resumable state machines: the device feeds them one
//! [`Input`] at a time and they report [`Step::Done`] once the operator
//! commits. All drawing goes through the [`CharDisplay`] capability.
//!
//! ## Components
//!
//! - **Grid**: in-memory 2×16 character display ([`grid::TextGrid`])
//! - **Digit**: single 0-9 entry ([`digit::DigitEntry`])
//! - **Passcode**: N chained digit entries ([`passcode::PasscodeEntry`])
//! - **Time**: two-field `MM:SS` entry ([`time_entry::TimeEntry`])

pub mod digit;
pub mod grid;
pub mod input_logic;
pub mod passcode;
pub mod time_entry;

#[cfg(test)]
mod tests;

use crate::config::{DISPLAY_COLUMNS, DISPLAY_LINES};
use crate::error::Error;
use crate::input::Input;

pub use digit::{Digit, DigitEntry};
pub use grid::TextGrid;
pub use passcode::{Passcode, PasscodeEntry};
pub use time_entry::{TimeEntry, TimeField};

/// Character cell address on the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    line: u8,
    column: u8,
}

impl Cursor {
    pub const ORIGIN: Cursor = Cursor { line: 0, column: 0 };

    pub fn new(line: u8, column: u8) -> Result<Self, Error> {
        if line >= DISPLAY_LINES || column >= DISPLAY_COLUMNS {
            return Err(Error::CursorOutOfBounds { line, column });
        }
        Ok(Self { line, column })
    }

    /// Start of `line`, clamped to the last line.
    pub const fn line_start(line: u8) -> Self {
        let line = if line < DISPLAY_LINES { line } else { DISPLAY_LINES - 1 };
        Self { line, column: 0 }
    }

    pub const fn line(&self) -> u8 {
        self.line
    }

    pub const fn column(&self) -> u8 {
        self.column
    }

    /// Move horizontally, clamped to the line.
    pub fn offset(self, columns: i16) -> Self {
        let column = (i16::from(self.column) + columns).clamp(0, i16::from(DISPLAY_COLUMNS) - 1);
        Self {
            line: self.line,
            column: column as u8,
        }
    }
}

/// Character display driver capability.
///
/// `print` writes at the cursor and advances it, like an HD44780; text
/// past the end of the line is dropped.
pub trait CharDisplay {
    fn set_cursor(&mut self, cursor: Cursor);
    fn print(&mut self, text: &str);
    fn show_cursor(&mut self);
    fn hide_cursor(&mut self);
    fn clear_line(&mut self, line: u8);

    fn print_digit(&mut self, digit: Digit) {
        let mut buf = [0u8; 4];
        self.print(char::from(b'0' + digit.value()).encode_utf8(&mut buf));
    }

    /// Replace a whole line with `text` and leave the cursor after it.
    fn show_line(&mut self, line: u8, text: &str) {
        self.clear_line(line);
        self.set_cursor(Cursor::line_start(line));
        self.print(text);
    }
}

/// Progress of a widget after one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step<T> {
    /// Still editing.
    Continue,
    /// Operator committed this value.
    Done(T),
}

/// A resumable entry widget.
pub trait Widget {
    type Output;

    /// Draw the initial state and place the cursor.
    fn begin<D: CharDisplay>(&mut self, display: &mut D);

    /// Apply one input.
    fn handle<D: CharDisplay>(&mut self, input: Input, display: &mut D) -> Step<Self::Output>;
}
