//! In-memory character grid.
//!
//! Holds what a 2×16 character LCD would show, plus the text cursor. The
//! OLED adapter renders this grid; host tests read it back directly.

use super::{CharDisplay, Cursor};
use crate::config::{DISPLAY_COLUMNS, DISPLAY_LINES};

const LINES: usize = DISPLAY_LINES as usize;
const COLUMNS: usize = DISPLAY_COLUMNS as usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGrid {
    cells: [[u8; COLUMNS]; LINES],
    cursor: Cursor,
    /// Column the next `print` writes to; may run past the last column.
    write_column: usize,
    cursor_visible: bool,
    dirty: bool,
}

impl TextGrid {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLUMNS]; LINES],
            cursor: Cursor::ORIGIN,
            write_column: 0,
            cursor_visible: false,
            dirty: true,
        }
    }

    /// Text of `line` (16 characters, space padded).
    pub fn line(&self, line: u8) -> &str {
        let row = &self.cells[usize::from(line).min(LINES - 1)];
        // Only ASCII is ever stored.
        core::str::from_utf8(row).unwrap_or("")
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// True if anything changed since the last `take_dirty`.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for TextGrid {
    fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.dirty |= self.cursor_visible;
        }
        self.cursor = cursor;
        self.write_column = usize::from(cursor.column());
    }

    fn print(&mut self, text: &str) {
        let row = &mut self.cells[usize::from(self.cursor.line())];
        for ch in text.chars() {
            if self.write_column >= COLUMNS {
                break;
            }
            let byte = if ch.is_ascii() && !ch.is_ascii_control() {
                ch as u8
            } else {
                b'?'
            };
            if row[self.write_column] != byte {
                row[self.write_column] = byte;
                self.dirty = true;
            }
            self.write_column += 1;
        }
        let column = self.write_column.min(COLUMNS - 1) as u8;
        self.cursor = Cursor::line_start(self.cursor.line()).offset(i16::from(column));
    }

    fn show_cursor(&mut self) {
        self.dirty |= !self.cursor_visible;
        self.cursor_visible = true;
    }

    fn hide_cursor(&mut self) {
        self.dirty |= self.cursor_visible;
        self.cursor_visible = false;
    }

    fn clear_line(&mut self, line: u8) {
        let row = &mut self.cells[usize::from(line).min(LINES - 1)];
        if row.iter().any(|&c| c != b' ') {
            *row = [b' '; COLUMNS];
            self.dirty = true;
        }
    }
}
