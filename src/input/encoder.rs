//! Rotary quadrature encoder decoding.
//!
//! The encoder produces 4 raw transitions per mechanical click:
//!
//! ```text
//!   (A,B): 00 → 01 → 11 → 10 → 00   = +4
//!   (A,B): 00 → 10 → 11 → 01 → 00   = -4
//! ```

use crate::config::TRANSITIONS_PER_DETENT;

/// One mechanical click of the knob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Detent {
    /// Raw position grew by one detent ("negative" turn on the panel).
    /// Increments the value under edit.
    Up,
    /// Raw position shrank by one detent ("positive" turn on the panel).
    /// Decrements the value under edit.
    Down,
}

impl Detent {
    /// Signed step: +1 for `Up`, -1 for `Down`.
    pub const fn delta(self) -> i32 {
        match self {
            Detent::Up => 1,
            Detent::Down => -1,
        }
    }
}

/// Turns raw position samples into detents.
///
/// Only deltas that are an exact multiple of a detent produce an event,
/// and at most one event is produced per sample. The reference moves by
/// exactly one detent per event, so a sample that skipped ahead by two
/// detents drains over the next two samples and a half-turned click that
/// springs back never registers.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadratureDecoder {
    reference: Option<i32>,
}

impl QuadratureDecoder {
    pub const fn new() -> Self {
        Self { reference: None }
    }

    /// Forget the reference; the next sample re-bases without an event.
    pub fn resync(&mut self) {
        self.reference = None;
    }

    /// Feed the current raw position.
    pub fn sample(&mut self, position: i32) -> Option<Detent> {
        let Some(reference) = self.reference else {
            self.reference = Some(position);
            return None;
        };

        let delta = position.wrapping_sub(reference);
        if delta == 0 || delta % TRANSITIONS_PER_DETENT != 0 {
            return None;
        }

        let detent = if delta > 0 { Detent::Up } else { Detent::Down };
        self.reference = Some(reference.wrapping_add(detent.delta() * TRANSITIONS_PER_DETENT));
        Some(detent)
    }
}

/// Gray-code transition table indexed by `(previous << 2) | current`,
/// where each state is `(A << 1) | B`.
const TRANSITIONS: [i8; 16] = [
    0, 1, -1, 0, //
    -1, 0, 0, 1, //
    1, 0, 0, -1, //
    0, -1, 1, 0, //
];

/// Software quadrature counter fed with the two channel levels.
///
/// Adjacent Gray-code transitions count ±1; a jump across two states
/// (a missed edge) is ambiguous and counts 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionCounter {
    state: u8,
    position: i32,
}

impl PositionCounter {
    /// Start from the channel levels currently on the pins.
    pub const fn new(a: bool, b: bool) -> Self {
        Self {
            state: Self::encode(a, b),
            position: 0,
        }
    }

    const fn encode(a: bool, b: bool) -> u8 {
        ((a as u8) << 1) | (b as u8)
    }

    /// Apply new channel levels. Returns the step taken (-1, 0 or 1).
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        let next = Self::encode(a, b);
        let step = TRANSITIONS[usize::from((self.state << 2) | next)];
        self.state = next;
        self.position = self.position.wrapping_add(i32::from(step));
        step
    }

    pub fn position(&self) -> i32 {
        self.position
    }
}
