//! uvbox - passcode-gated countdown relay controller.
//!
//! The operator unlocks the device with a passcode dialled on a rotary
//! encoder, sets an `MM:SS` duration, and the device drives a relay while
//! it counts down to zero, then returns to time entry.
//!
//! Everything except [`board`] is hardware independent and runs on the
//! host: `cargo test`.
//!
//! Note: The embedded binary lives in main.rs with #![no_std] and
//! #![no_main] and is only built with the `embedded` feature.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
mod fmt;

pub mod config;
pub mod device;
pub mod error;
pub mod input;
pub mod relay;
pub mod time;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod board;

pub use config::DeviceConfig;
pub use device::{Device, DeviceState, Gate};
pub use error::Error;
pub use input::{Detent, Input, PressEvent, Sample};
pub use time::TimeValue;
