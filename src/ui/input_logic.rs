//! Wrapping value steps shared by the entry widgets.
//!
//! Every edited field is closed under both directions: stepping past the
//! top wraps to 0 and stepping below 0 wraps to the top.

use crate::input::Detent;

/// Step `value` up, wrapping from `max` to 0.
pub fn wrap_next(value: u8, max: u8) -> u8 {
    if value < max {
        value + 1
    } else {
        0
    }
}

/// Step `value` down, wrapping from 0 to `max`.
pub fn wrap_prev(value: u8, max: u8) -> u8 {
    if value > 0 && value <= max {
        value - 1
    } else {
        max
    }
}

/// Apply one detent to a `0..=max` field.
pub fn apply_detent(value: u8, max: u8, detent: Detent) -> u8 {
    match detent {
        Detent::Up => wrap_next(value, max),
        Detent::Down => wrap_prev(value, max),
    }
}
