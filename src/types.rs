//! Common types and data structures

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One of the three rotating indicators on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Second,
    Minute,
    Hour,
}

impl Hand {
    /// Paint order: second first, hour on top
    pub const ALL: [Hand; 3] = [Hand::Second, Hand::Minute, Hand::Hour];

    pub fn index(self) -> usize {
        match self {
            Hand::Second => 0,
            Hand::Minute => 1,
            Hand::Hour => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Hand::Second => "Second",
            Hand::Minute => "Minute",
            Hand::Hour => "Hour",
        }
    }

    /// Time for one full sweep of this hand
    pub fn period(self, hour_cycle: HourCycle) -> Duration {
        match self {
            Hand::Second => SECOND_PERIOD,
            Hand::Minute => MINUTE_PERIOD,
            Hand::Hour => match hour_cycle {
                HourCycle::Day => HOUR_PERIOD_DAY,
                HourCycle::HalfDay => HOUR_PERIOD_HALF_DAY,
            },
        }
    }

    pub fn tip_divisor(self) -> f32 {
        match self {
            Hand::Second => SECOND_TIP_DIVISOR,
            Hand::Minute => MINUTE_TIP_DIVISOR,
            Hand::Hour => HOUR_TIP_DIVISOR,
        }
    }
}

/// Angles of all three hands at one instant, degrees clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub second: f32,
    pub minute: f32,
    pub hour: f32,
}

impl HandAngles {
    pub fn get(&self, hand: Hand) -> f32 {
        match hand {
            Hand::Second => self.second,
            Hand::Minute => self.minute,
            Hand::Hour => self.hour,
        }
    }

    pub fn set(&mut self, hand: Hand, angle: f32) {
        match hand {
            Hand::Second => self.second = angle,
            Hand::Minute => self.minute = angle,
            Hand::Hour => self.hour = angle,
        }
    }
}

/// Wall-clock reading taken when a clock is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u32,   // 0-23
    pub minute: u32, // 0-59
    pub second: u32, // 0-59
}

impl WallTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }
}

/// How long the hour hand takes to go around the face once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourCycle {
    /// 24 hours per revolution
    #[default]
    Day,
    /// 12 hours per revolution, matching the dial markings
    HalfDay,
}
