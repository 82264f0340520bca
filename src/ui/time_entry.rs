//! Two-field `MM:SS` entry.
//!
//! ```text
//!   col: 0 1 2 3 4
//!        M M : S S
//!        ^     ^
//!        |     └ seconds field (origin + offset)
//!        └ minutes field (origin)
//! ```
//!
//! - Turning edits the active field; both fields wrap 59 ↔ 0 on their own
//!   (seconds never carry into minutes).
//! - A short press switches field.
//! - A long press commits.

use super::input_logic::apply_detent;
use super::{CharDisplay, Cursor, Step, Widget};
use crate::input::{Input, PressEvent};
use crate::time::TimeValue;

/// Field currently under edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    #[default]
    Minutes,
    Seconds,
}

impl TimeField {
    pub fn toggled(self) -> Self {
        match self {
            TimeField::Minutes => TimeField::Seconds,
            TimeField::Seconds => TimeField::Minutes,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeEntry {
    origin: Cursor,
    field_offset: u8,
    minutes: u8,
    seconds: u8,
    active: TimeField,
}

impl TimeEntry {
    /// Entry drawn at `origin`, starting from `seed` with minutes active.
    pub fn new(origin: Cursor, field_offset: u8, seed: TimeValue) -> Self {
        Self {
            origin,
            field_offset,
            minutes: seed.minutes(),
            seconds: seed.seconds(),
            active: TimeField::Minutes,
        }
    }

    pub fn active_field(&self) -> TimeField {
        self.active
    }

    /// Where the cursor sits for the active field.
    pub fn field_cursor(&self) -> Cursor {
        match self.active {
            TimeField::Minutes => self.origin,
            TimeField::Seconds => self.origin.offset(i16::from(self.field_offset)),
        }
    }

    /// Value currently on screen.
    pub fn value(&self) -> TimeValue {
        // Both fields only ever come from a valid seed or a wrapping step.
        TimeValue::new(self.minutes, self.seconds).unwrap_or_default()
    }

    fn redraw<D: CharDisplay>(&self, display: &mut D) {
        display.hide_cursor();
        display.set_cursor(self.origin);
        display.print(&self.value().as_text());
        display.set_cursor(self.field_cursor());
        display.show_cursor();
    }
}

impl Widget for TimeEntry {
    type Output = TimeValue;

    fn begin<D: CharDisplay>(&mut self, display: &mut D) {
        self.active = TimeField::Minutes;
        display.set_cursor(self.origin);
        display.show_cursor();
    }

    fn handle<D: CharDisplay>(&mut self, input: Input, display: &mut D) -> Step<TimeValue> {
        match input {
            Input::Turn(detent) => {
                match self.active {
                    TimeField::Minutes => {
                        self.minutes = apply_detent(self.minutes, TimeValue::FIELD_MAX, detent);
                    }
                    TimeField::Seconds => {
                        self.seconds = apply_detent(self.seconds, TimeValue::FIELD_MAX, detent);
                    }
                }
                self.redraw(display);
                Step::Continue
            }
            Input::Press(PressEvent::Short) => {
                self.active = self.active.toggled();
                debug!("time entry: editing {}", self.active);
                display.set_cursor(self.field_cursor());
                Step::Continue
            }
            Input::Press(PressEvent::Long) => {
                display.hide_cursor();
                Step::Done(self.value())
            }
            Input::Press(PressEvent::None) => Step::Continue,
        }
    }
}
