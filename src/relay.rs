//! Relay output control.

/// A single latching output line.
pub trait RelayOutput {
    fn set_output(&mut self, on: bool);
}

/// Idempotent relay switch - the line is only written on a change.
#[derive(Debug)]
pub struct Relay<O> {
    output: O,
    active: bool,
}

impl<O: RelayOutput> Relay<O> {
    /// Take ownership of the line and drive it off.
    pub fn new(mut output: O) -> Self {
        output.set_output(false);
        Self {
            output,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn turn_on(&mut self) {
        if !self.active {
            self.active = true;
            self.output.set_output(true);
            info!("Relay: on");
        }
    }

    pub fn turn_off(&mut self) {
        if self.active {
            self.active = false;
            self.output.set_output(false);
            info!("Relay: off");
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
