//! Monotonic time from the Embassy time driver (RTC1).

use embassy_time::Instant;

use crate::input::Clock;

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
