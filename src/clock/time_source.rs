//! Where the clock reads "now" from. It is read exactly once, at construction.

use crate::types::WallTime;
use chrono::Timelike;

pub trait TimeSource {
    fn now(&self) -> WallTime;
}

/// Local system time via chrono
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> WallTime {
        let now = chrono::Local::now();
        WallTime::new(now.hour(), now.minute(), now.second())
    }
}

/// A fixed reading acts as its own source
impl TimeSource for WallTime {
    fn now(&self) -> WallTime {
        *self
    }
}
