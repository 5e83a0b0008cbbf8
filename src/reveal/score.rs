//! Score ring animation.

use std::time::{Duration, Instant};

/// Scores run from 0 to this value.
pub const SCORE_SCALE: f64 = 10.0;

/// Length of the full ring in fill units.
pub const RING_CIRCUMFERENCE: f64 = 100.0;

/// Animates the displayed score from 0 to `target` on the monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAnimation {
    target: f64,
    start: Instant,
    duration: Duration,
}

/// What one animation frame shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFrame {
    /// Elapsed share of the animation, in `[0, 1]`.
    pub ratio: f64,
    /// Score text value, one-decimal granularity.
    pub display: f64,
    /// Filled part of the ring, in `[0, RING_CIRCUMFERENCE]`.
    pub ring: f64,
}

impl ScoreAnimation {
    pub fn new(target: f64, start: Instant, duration: Duration) -> Self {
        Self {
            target,
            start,
            duration,
        }
    }

    pub fn ratio_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn frame_at(&self, now: Instant) -> ScoreFrame {
        ScoreFrame::for_ratio(self.target, self.ratio_at(now))
    }
}

impl ScoreFrame {
    pub fn for_ratio(target: f64, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let display = if ratio >= 1.0 {
            target
        } else {
            (ratio * target * 10.0).floor() / 10.0
        };
        Self {
            ratio,
            display,
            ring: ratio * (target / SCORE_SCALE) * RING_CIRCUMFERENCE,
        }
    }

    pub fn is_final(&self) -> bool {
        self.ratio >= 1.0
    }

    /// Whole numbers print without a decimal point ("7"), others with one ("6.3").
    pub fn label(&self) -> String {
        if self.display.fract() == 0.0 {
            format!("{:.0}", self.display)
        } else {
            format!("{:.1}", self.display)
        }
    }
}
