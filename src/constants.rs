//! Application constants and clock geometry

use std::time::Duration;

pub const APP_NAME: &str = "Analog Clock";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// One full revolution per hand
pub const SECOND_PERIOD: Duration = Duration::from_millis(60_000);
pub const MINUTE_PERIOD: Duration = Duration::from_millis(3_600_000);
pub const HOUR_PERIOD_DAY: Duration = Duration::from_millis(86_400_000);
pub const HOUR_PERIOD_HALF_DAY: Duration = Duration::from_millis(43_200_000);

pub const FULL_TURN: f32 = 360.0;
/// 360° / 60 ticks
pub const DEGREES_PER_TICK: f32 = 6.0;
/// 360° / 12 hours
pub const DEGREES_PER_HOUR: f32 = 30.0;

/// Hand tip sits this fraction of the face height below the top edge
pub const SECOND_TIP_DIVISOR: f32 = 5.5;
pub const MINUTE_TIP_DIVISOR: f32 = 6.0;
pub const HOUR_TIP_DIVISOR: f32 = 4.0;

pub const SECOND_HAND_WIDTH: f32 = 7.0;
pub const MINUTE_HAND_WIDTH: f32 = 8.0;
pub const HOUR_HAND_WIDTH: f32 = 9.0;
