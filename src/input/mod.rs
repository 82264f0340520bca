//! Input subsystem - rotary encoder + push-button.
//!
//! Raw hardware levels are turned into operator intent in two stages:
//!
//! - **Encoder**: pin levels → raw position ([`encoder::PositionCounter`]),
//!   raw position → detents ([`encoder::QuadratureDecoder`]).
//! - **Button**: raw level → debounced short/long presses
//!   ([`button::PressClassifier`]).
//!
//! The hardware sources are capability traits so the same core runs on the
//! nRF52840 and in host tests.

pub mod button;
pub mod encoder;


pub use button::{PressClassifier, PressEvent};
pub use encoder::{Detent, PositionCounter, QuadratureDecoder};

/// Raw encoder position source (one count per quadrature transition).
pub trait PositionSource {
    fn read_position(&mut self) -> i32;
}

/// Raw button source. Implementations hide the active level of the line.
pub trait ButtonSource {
    fn is_pressed(&mut self) -> bool;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// One polling-interval snapshot of every raw input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Monotonic time of the sample (ms).
    pub now_ms: u64,
    /// Raw encoder position.
    pub position: i32,
    /// Button level (true = pressed).
    pub pressed: bool,
}

impl Sample {
    /// Read all sources once.
    pub fn read(
        clock: &impl Clock,
        encoder: &mut impl PositionSource,
        button: &mut impl ButtonSource,
    ) -> Self {
        Self {
            now_ms: clock.now_ms(),
            position: encoder.read_position(),
            pressed: button.is_pressed(),
        }
    }
}

/// Operator intent delivered to the entry widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// The knob moved one click.
    Turn(Detent),
    /// A classified button press (never `PressEvent::None`).
    Press(PressEvent),
}
