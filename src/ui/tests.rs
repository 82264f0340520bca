//! Unit tests for the character grid and entry widgets.
//!
//! Widgets draw into a [`TextGrid`] so assertions can read the screen back.

use super::input_logic::{apply_detent, wrap_next, wrap_prev};
use super::passcode::{compose, decompose, Passcode, PasscodeEntry, MAX_PASSCODE_LENGTH};
use super::{CharDisplay, Cursor, Digit, DigitEntry, Step, TextGrid, TimeEntry, TimeField, Widget};
use crate::error::Error;
use crate::input::{Detent, Input, PressEvent};
use crate::time::TimeValue;

const UP: Input = Input::Turn(Detent::Up);
const DOWN: Input = Input::Turn(Detent::Down);
const SHORT: Input = Input::Press(PressEvent::Short);
const LONG: Input = Input::Press(PressEvent::Long);

fn cursor(line: u8, column: u8) -> Cursor {
    Cursor::new(line, column).unwrap()
}

/// Feed inputs until the widget finishes; panics if it never does.
fn run<W: Widget>(widget: &mut W, grid: &mut TextGrid, inputs: &[Input]) -> W::Output {
    for &input in inputs {
        if let Step::Done(out) = widget.handle(input, grid) {
            return out;
        }
    }
    panic!("widget did not finish");
}

// ═══════════════════════════════════════════════════════════════════════════
// Wrapping Step Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn wrap_steps_at_boundaries() {
    assert_eq!(wrap_next(0, 9), 1);
    assert_eq!(wrap_next(9, 9), 0);
    assert_eq!(wrap_prev(1, 9), 0);
    assert_eq!(wrap_prev(0, 9), 9);
    assert_eq!(wrap_next(59, 59), 0);
    assert_eq!(wrap_prev(0, 59), 59);
}

#[test]
fn apply_detent_direction() {
    assert_eq!(apply_detent(5, 9, Detent::Up), 6);
    assert_eq!(apply_detent(5, 9, Detent::Down), 4);
}

// ═══════════════════════════════════════════════════════════════════════════
// Cursor Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn cursor_bounds() {
    assert!(Cursor::new(1, 15).is_ok());
    assert_eq!(
        Cursor::new(2, 0),
        Err(Error::CursorOutOfBounds { line: 2, column: 0 })
    );
    assert_eq!(
        Cursor::new(0, 16),
        Err(Error::CursorOutOfBounds { line: 0, column: 16 })
    );
}

#[test]
fn cursor_offset_clamps_to_line() {
    assert_eq!(cursor(1, 0).offset(3), cursor(1, 3));
    assert_eq!(cursor(1, 3).offset(-3), cursor(1, 0));
    assert_eq!(cursor(1, 2).offset(-5), cursor(1, 0));
    assert_eq!(cursor(0, 14).offset(5), cursor(0, 15));
    assert_eq!(Cursor::line_start(7), cursor(1, 0));
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Grid Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn grid_starts_blank_and_dirty() {
    let mut grid = TextGrid::new();
    assert_eq!(grid.line(0), "                ");
    assert!(grid.take_dirty());
    assert!(!grid.take_dirty());
}

#[test]
fn grid_print_advances_and_clips() {
    let mut grid = TextGrid::new();
    grid.set_cursor(cursor(0, 12));
    grid.print("abcdefgh");
    assert_eq!(grid.line(0), "            abcd");
    assert_eq!(grid.cursor(), cursor(0, 15));

    grid.set_cursor(cursor(1, 0));
    grid.print("12");
    grid.print("34");
    assert_eq!(grid.line(1), "1234            ");
    assert_eq!(grid.cursor(), cursor(1, 4));
}

#[test]
fn grid_replaces_non_ascii() {
    let mut grid = TextGrid::new();
    grid.print("é\n");
    assert_eq!(&grid.line(0)[..2], "??");
}

#[test]
fn grid_show_line_replaces_previous_text() {
    let mut grid = TextGrid::new();
    grid.show_line(0, "Set time        x");
    grid.show_line(0, "Done!");
    assert_eq!(grid.line(0), "Done!           ");
}

#[test]
fn grid_dirty_tracks_changes_only() {
    let mut grid = TextGrid::new();
    grid.take_dirty();
    grid.print("   ");
    assert!(!grid.is_dirty());
    grid.set_cursor(Cursor::ORIGIN);
    grid.print("a");
    assert!(grid.take_dirty());
    grid.show_cursor();
    assert!(grid.take_dirty());
    grid.show_cursor();
    assert!(!grid.is_dirty());
    grid.set_cursor(cursor(1, 1));
    assert!(grid.take_dirty());
    grid.hide_cursor();
    assert!(grid.take_dirty());
    assert!(!grid.cursor_visible());
}

#[test]
fn grid_print_digit() {
    let mut grid = TextGrid::new();
    grid.print_digit(Digit::new(7).unwrap());
    assert_eq!(&grid.line(0)[..1], "7");
}

// ═══════════════════════════════════════════════════════════════════════════
// Digit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn digit_range_is_validated() {
    assert!(Digit::new(9).is_ok());
    assert_eq!(Digit::new(10), Err(Error::FieldOutOfRange(10)));
}

#[test]
fn digit_wraps_both_ways() {
    assert_eq!(Digit::new(9).unwrap().increment(), Digit::ZERO);
    assert_eq!(Digit::ZERO.decrement(), Digit::new(9).unwrap());
}

#[test]
fn digit_up_then_down_round_trips() {
    for d in 0..=9 {
        let digit = Digit::new(d).unwrap();
        assert_eq!(digit.increment().decrement(), digit);
        assert_eq!(digit.decrement().increment(), digit);
        assert_eq!(u32::from(digit.increment()), (u32::from(d) + 1) % 10);
    }
}

#[test]
fn digit_entry_draws_and_commits_on_any_press() {
    for press in [SHORT, LONG] {
        let mut grid = TextGrid::new();
        let mut entry = DigitEntry::new(cursor(1, 2));
        entry.begin(&mut grid);
        assert!(grid.cursor_visible());
        assert_eq!(&grid.line(1)[2..3], "0");

        assert_eq!(entry.handle(UP, &mut grid), Step::Continue);
        assert_eq!(entry.handle(UP, &mut grid), Step::Continue);
        assert_eq!(&grid.line(1)[2..3], "2");
        // Cursor stays anchored on the digit.
        assert_eq!(grid.cursor(), cursor(1, 2));

        assert_eq!(entry.handle(press, &mut grid), Step::Done(Digit::new(2).unwrap()));
        assert!(!grid.cursor_visible());
    }
}

#[test]
fn digit_entry_wraps_below_zero() {
    let mut grid = TextGrid::new();
    let mut entry = DigitEntry::new(Cursor::ORIGIN);
    entry.begin(&mut grid);
    let digit = run(&mut entry, &mut grid, &[DOWN, DOWN, SHORT]);
    assert_eq!(digit.value(), 8);
    assert_eq!(&grid.line(0)[..1], "8");
}

#[test]
fn digit_entry_ignores_empty_press() {
    let mut grid = TextGrid::new();
    let mut entry = DigitEntry::new(Cursor::ORIGIN);
    entry.begin(&mut grid);
    assert_eq!(
        entry.handle(Input::Press(PressEvent::None), &mut grid),
        Step::Continue
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Passcode Tests
// ═══════════════════════════════════════════════════════════════════════════

fn digits(values: &[u8]) -> Vec<Digit> {
    values.iter().map(|&v| Digit::new(v).unwrap()).collect()
}

#[test]
fn passcode_validation() {
    assert!(Passcode::new(451, 3).is_ok());
    assert!(Passcode::new(999, 3).is_ok());
    assert!(Passcode::new(7, 3).is_ok());
    assert_eq!(Passcode::new(1000, 3), Err(Error::PasscodeOutOfRange(1000)));
    assert_eq!(Passcode::new(0, 0), Err(Error::InvalidPasscodeLength(0)));
    assert_eq!(Passcode::new(0, 10), Err(Error::InvalidPasscodeLength(10)));
    assert!(Passcode::new(999_999_999, 9).is_ok());
}

#[test]
fn passcode_reference_is_451() {
    assert_eq!(Passcode::REFERENCE.value(), 451);
    assert_eq!(Passcode::REFERENCE.length(), 3);
    assert!(Passcode::REFERENCE.matches(451));
    assert!(!Passcode::REFERENCE.matches(452));
}

#[test]
fn compose_is_positional() {
    assert_eq!(compose(&digits(&[4, 5, 1])), 451);
    assert_eq!(compose(&digits(&[0, 0, 7])), 7);
    assert_eq!(compose(&[]), 0);
}

#[test]
fn decompose_matches_entry_order() {
    assert_eq!(decompose(451, 3).unwrap().as_slice(), digits(&[4, 5, 1]).as_slice());
    assert_eq!(decompose(7, 3).unwrap().as_slice(), digits(&[0, 0, 7]).as_slice());
    assert!(decompose(1000, 3).is_none());
    assert!(decompose(0, (MAX_PASSCODE_LENGTH + 1) as u8).is_none());
}

#[test]
fn compose_is_injective_over_three_digits() {
    let mut seen = vec![false; 1000];
    for a in 0..=9 {
        for b in 0..=9 {
            for c in 0..=9 {
                let ds = digits(&[a, b, c]);
                let value = compose(&ds);
                assert!(!seen[value as usize], "duplicate {value}");
                seen[value as usize] = true;
                assert_eq!(decompose(value, 3).unwrap().as_slice(), ds.as_slice());
            }
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn passcode_entry_advances_one_column_per_digit() {
    let mut grid = TextGrid::new();
    let mut entry = PasscodeEntry::new(cursor(1, 0), 3);
    entry.begin(&mut grid);

    let mut inputs = Vec::new();
    inputs.extend([UP; 4]);
    inputs.push(SHORT);
    assert_eq!(run_partial(&mut entry, &mut grid, &inputs), None);
    assert_eq!(entry.entered(), digits(&[4]).as_slice());
    assert_eq!(grid.cursor(), cursor(1, 1));

    let mut inputs = Vec::new();
    inputs.extend([UP; 5]);
    inputs.push(SHORT);
    inputs.push(UP);
    inputs.push(LONG);
    assert_eq!(run_partial(&mut entry, &mut grid, &inputs), Some(451));
    assert_eq!(&grid.line(1)[..3], "451");
}

fn run_partial(entry: &mut PasscodeEntry, grid: &mut TextGrid, inputs: &[Input]) -> Option<u32> {
    for &input in inputs {
        if let Step::Done(code) = entry.handle(input, grid) {
            return Some(code);
        }
    }
    None
}

#[test]
fn passcode_entry_restarts_on_begin() {
    let mut grid = TextGrid::new();
    let mut entry = PasscodeEntry::new(cursor(1, 0), 2);
    entry.begin(&mut grid);
    run_partial(&mut entry, &mut grid, &[UP, SHORT]);
    assert_eq!(entry.entered().len(), 1);

    entry.begin(&mut grid);
    assert!(entry.entered().is_empty());
    assert_eq!(run(&mut entry, &mut grid, &[DOWN, SHORT, SHORT]), 90);
}

// ═══════════════════════════════════════════════════════════════════════════
// Time Entry Tests
// ═══════════════════════════════════════════════════════════════════════════

fn time(minutes: u8, seconds: u8) -> TimeValue {
    TimeValue::new(minutes, seconds).unwrap()
}

fn time_entry(grid: &mut TextGrid, seed: TimeValue) -> TimeEntry {
    let mut entry = TimeEntry::new(cursor(1, 0), 3, seed);
    entry.begin(grid);
    entry
}

#[test]
fn time_entry_starts_on_minutes() {
    let mut grid = TextGrid::new();
    let entry = time_entry(&mut grid, TimeValue::ZERO);
    assert_eq!(entry.active_field(), TimeField::Minutes);
    assert_eq!(grid.cursor(), cursor(1, 0));
    assert!(grid.cursor_visible());
}

#[test]
fn time_entry_edits_minutes_and_redraws() {
    let mut grid = TextGrid::new();
    let mut entry = time_entry(&mut grid, time(5, 30));
    entry.handle(UP, &mut grid);
    assert_eq!(&grid.line(1)[..5], "06:30");
    assert_eq!(grid.cursor(), cursor(1, 0));
    assert!(grid.cursor_visible());
    entry.handle(DOWN, &mut grid);
    entry.handle(DOWN, &mut grid);
    assert_eq!(&grid.line(1)[..5], "04:30");
}

#[test]
fn time_entry_fields_wrap_without_carry() {
    let mut grid = TextGrid::new();
    let mut entry = time_entry(&mut grid, time(0, 59));
    entry.handle(DOWN, &mut grid);
    assert_eq!(entry.value(), time(59, 59));

    entry.handle(SHORT, &mut grid);
    entry.handle(UP, &mut grid);
    // Seconds wrap to 0 and minutes stay put.
    assert_eq!(entry.value(), time(59, 0));
    assert_eq!(&grid.line(1)[..5], "59:00");
}

#[test]
fn time_entry_short_press_toggles_field_and_cursor() {
    let mut grid = TextGrid::new();
    let mut entry = time_entry(&mut grid, TimeValue::ZERO);
    for presses in 1..=6 {
        assert_eq!(entry.handle(SHORT, &mut grid), Step::Continue);
        if presses % 2 == 1 {
            assert_eq!(entry.active_field(), TimeField::Seconds);
            assert_eq!(grid.cursor(), cursor(1, 3));
        } else {
            assert_eq!(entry.active_field(), TimeField::Minutes);
            assert_eq!(grid.cursor(), cursor(1, 0));
        }
    }
}

#[test]
fn time_entry_ninety_detents_on_seconds() {
    let mut grid = TextGrid::new();
    let mut entry = time_entry(&mut grid, TimeValue::ZERO);
    entry.handle(SHORT, &mut grid);
    for _ in 0..90 {
        entry.handle(UP, &mut grid);
    }
    assert_eq!(entry.value(), time(0, 30));
    assert_eq!(&grid.line(1)[..5], "00:30");
    assert_eq!(grid.cursor(), cursor(1, 3));
}

#[test]
fn time_entry_long_press_commits() {
    let mut grid = TextGrid::new();
    let mut entry = time_entry(&mut grid, time(1, 0));
    let value = run(&mut entry, &mut grid, &[SHORT, UP, UP, SHORT, DOWN, LONG]);
    assert_eq!(value, time(0, 2));
    assert_eq!(value.hours(), 0);
    assert!(!grid.cursor_visible());
}
