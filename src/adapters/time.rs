//! Host clock adapter.
//!
//! Wall-clock timestamps from `chrono::Utc::now()` and blocking sleeps
//! from `std::thread`. Tests substitute a fixed or stepping clock.

use core::time::Duration;

use chrono::Utc;

use crate::app::ports::ClockPort;
use crate::sensors::Timestamp;

/// Real-time clock for the control loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
