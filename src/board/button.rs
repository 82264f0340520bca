//! Encoder push-button line.
//!
//! The button is active-low with the internal pull-up enabled. It is
//! sampled from the control loop; debouncing and short/long
//! classification happen in [`crate::input::PressClassifier`].

use embassy_nrf::gpio::Input;

use crate::input::ButtonSource;

pub struct ButtonPin<'d> {
    pin: Input<'d>,
}

impl<'d> ButtonPin<'d> {
    /// `pin` must be configured with `Pull::Up`.
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl ButtonSource for ButtonPin<'_> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}
