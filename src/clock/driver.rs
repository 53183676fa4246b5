//! Per-hand animation driver
//!
//! A hand first sweeps from its time-derived start angle up to 360° over one
//! full period (warmup), then loops 0° -> 360° every period (steady) until the
//! driver's cancellation token fires.

use crate::constants::FULL_TURN;
use crate::types::Hand;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Warmup,
    Steady,
    Cancelled,
}

/// Linear interpolation between `from` and `to`. `t` is not clamped.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Phase and angle of a hand `elapsed` after its warmup began.
pub fn sample(start_angle: f32, period: Duration, elapsed: Duration) -> (AnimationPhase, f32) {
    if period.is_zero() {
        return (AnimationPhase::Steady, 0.0);
    }

    if elapsed < period {
        let t = (elapsed.as_secs_f64() / period.as_secs_f64()) as f32;
        // f32 rounding just before the end can produce exactly 360
        let angle = lerp(start_angle, FULL_TURN, t).rem_euclid(FULL_TURN);
        return (AnimationPhase::Warmup, angle);
    }

    let period_ns = period.as_nanos();
    let into_cycle = (elapsed - period).as_nanos() % period_ns;
    let t = into_cycle as f64 / period_ns as f64;
    let angle = ((FULL_TURN as f64 * t) as f32).rem_euclid(FULL_TURN);
    (AnimationPhase::Steady, angle)
}

pub struct HandDriver {
    hand: Hand,
    start_angle: f32,
    period: Duration,
    started_at: Instant,
    phase: AnimationPhase,
    angle: f32,
    cancel: CancellationToken,
}

impl HandDriver {
    pub fn start(
        hand: Hand,
        start_angle: f32,
        period: Duration,
        started_at: Instant,
        cancel: CancellationToken,
    ) -> Self {
        debug!(
            hand = hand.label(),
            start_angle,
            period_ms = period.as_millis() as u64,
            "Hand warmup started"
        );
        Self {
            hand,
            start_angle,
            period,
            started_at,
            phase: AnimationPhase::Warmup,
            angle: start_angle,
            cancel,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Move the hand to where it should be at `now`.
    /// Returns `None` once the driver has been cancelled; the angle then stays frozen.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if self.cancel.is_cancelled() {
            if self.phase != AnimationPhase::Cancelled {
                debug!(hand = self.hand.label(), angle = self.angle, "Hand animation cancelled");
                self.phase = AnimationPhase::Cancelled;
            }
            return None;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let (phase, angle) = sample(self.start_angle, self.period, elapsed);
        if phase != self.phase {
            debug!(hand = self.hand.label(), ?phase, "Hand changed phase");
        }
        self.phase = phase;
        self.angle = angle;
        Some(angle)
    }
}
