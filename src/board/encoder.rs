//! Rotary encoder channels.
//!
//! A dedicated task wakes on every edge of either channel and feeds the
//! new levels to a shared [`PositionCounter`]. The control loop only reads
//! the accumulated position, so no transition is lost while the loop is
//! busy flushing the display.

use core::cell::RefCell;

use embassy_futures::select::select;
use embassy_nrf::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::input::{PositionCounter, PositionSource};

static ENCODER: Mutex<CriticalSectionRawMutex, RefCell<PositionCounter>> =
    Mutex::new(RefCell::new(PositionCounter::new(false, false)));

/// Track both channels forever.
#[embassy_executor::task]
pub async fn encoder_task(mut a: Input<'static>, mut b: Input<'static>) -> ! {
    let (level_a, level_b) = (a.is_high(), b.is_high());
    ENCODER.lock(|counter| *counter.borrow_mut() = PositionCounter::new(level_a, level_b));
    debug!("Encoder: start a={} b={}", level_a, level_b);

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;
        let (level_a, level_b) = (a.is_high(), b.is_high());
        ENCODER.lock(|counter| {
            counter.borrow_mut().update(level_a, level_b);
        });
    }
}

/// Read side of the shared counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SharedEncoder;

impl PositionSource for SharedEncoder {
    fn read_position(&mut self) -> i32 {
        ENCODER.lock(|counter| counter.borrow().position())
    }
}
