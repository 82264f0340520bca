//! nRF52840 board support - binds the hardware-independent core to GPIO,
//! the I²C OLED and the Embassy clock.
//!
//! Only built with the `embedded` feature.

pub mod button;
pub mod clock;
pub mod display;
pub mod encoder;
pub mod relay;

pub use button::ButtonPin;
pub use clock::SystemClock;
pub use display::Oled;
pub use encoder::{encoder_task, SharedEncoder};
pub use relay::RelayPin;
