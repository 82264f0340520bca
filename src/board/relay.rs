//! Relay driver line (active-high).

use embassy_nrf::gpio::{Level, Output};

use crate::relay::RelayOutput;

pub struct RelayPin<'d> {
    pin: Output<'d>,
}

impl<'d> RelayPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl RelayOutput for RelayPin<'_> {
    fn set_output(&mut self, on: bool) {
        self.pin.set_level(if on { Level::High } else { Level::Low });
    }
}
