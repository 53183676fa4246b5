//! Initial hand angles from a wall-clock reading

use crate::constants::*;
use crate::types::{HandAngles, WallTime};

pub fn second_angle(second: u32) -> f32 {
    (second % 60) as f32 * DEGREES_PER_TICK
}

pub fn minute_angle(minute: u32) -> f32 {
    (minute % 60) as f32 * DEGREES_PER_TICK
}

/// Hour hand creeps between hour marks as the minutes pass.
/// Hours 0 and 12 both land on 12 o'clock.
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    let hour12 = (hour % 12) as f32;
    let fraction = (minute % 60) as f32 / 60.0;
    (hour12 + fraction) * DEGREES_PER_HOUR
}

pub fn initial_angles(time: WallTime) -> HandAngles {
    HandAngles {
        second: second_angle(time.second),
        minute: minute_angle(time.minute),
        hour: hour_angle(time.hour, time.minute),
    }
}
