//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and operator-facing
//! constants live here so they can be tuned in one place. The subset the
//! state machine consumes at runtime is gathered in [`DeviceConfig`] so
//! tests can inject alternate codes and timings.

use crate::error::Error;
use crate::ui::passcode::Passcode;

// Passcode

/// Expected passcode value.
pub const PASSCODE: u32 = 451;

/// Number of digits the operator enters for the passcode.
pub const PASSCODE_LENGTH: u8 = 3;

// Input timing

/// Held duration (ms) at which a press is classified as long.
pub const LONG_PRESS_MS: u64 = 2000;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Raw quadrature transitions per mechanical detent.
pub const TRANSITIONS_PER_DETENT: i32 = 4;

/// Controller polling interval (ms). Encoder and button are sampled at
/// this rate and one `Device::poll` runs per interval.
pub const POLL_INTERVAL_MS: u64 = 1;

// Device timing

/// Countdown tick period (ms).
pub const TICK_MS: u64 = 1000;

/// How long a transient message ("Time set!", "Done!") stays on screen (ms).
pub const NOTICE_MS: u64 = 1000;

/// Delay spent in `Warming` before the relay is energised (ms).
/// 0 makes Warming a pass-through.
pub const WARMUP_MS: u64 = 0;

// Display

/// Character lines on the display.
pub const DISPLAY_LINES: u8 = 2;

/// Character columns on the display.
pub const DISPLAY_COLUMNS: u8 = 16;

/// Column distance between the minutes and seconds sub-fields of `MM:SS`.
pub const TIME_FIELD_OFFSET: u8 = 3;

/// Minimum interval between OLED flushes (ms).
pub const DISPLAY_REFRESH_MS: u64 = 50;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`. Adjust for your custom PCB.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Encoder button → P0.28 (active-low, internal pull-up)
//   Relay          → P0.13
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Runtime configuration injected into [`crate::device::Device`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Code that unlocks the device.
    pub passcode: Passcode,
    /// Long-press threshold (ms).
    pub long_press_ms: u64,
    /// Button debounce window (ms).
    pub debounce_ms: u64,
    /// Countdown tick period (ms).
    pub tick_ms: u64,
    /// Transient message duration (ms).
    pub notice_ms: u64,
    /// Warm-up delay before radiating (ms).
    pub warmup_ms: u64,
    /// Cursor offset between the minutes and seconds fields.
    pub field_offset: u8,
}

impl DeviceConfig {
    /// Default timings with a caller-supplied passcode.
    pub fn with_passcode(value: u32, length: u8) -> Result<Self, Error> {
        Ok(Self {
            passcode: Passcode::new(value, length)?,
            ..Self::default()
        })
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            passcode: Passcode::REFERENCE,
            long_press_ms: LONG_PRESS_MS,
            debounce_ms: BUTTON_DEBOUNCE_MS,
            tick_ms: TICK_MS,
            notice_ms: NOTICE_MS,
            warmup_ms: WARMUP_MS,
            field_offset: TIME_FIELD_OFFSET,
        }
    }
}
