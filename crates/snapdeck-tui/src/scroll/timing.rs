//! Progress and interpolation helpers for the snap animation.

use std::time::{Duration, Instant};

/// Animation progress in `[0, 1]` at `now`, given start time and duration.
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether the animation has run its full duration at `now`.
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values, `t` in `[0, 1]`.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation between two row offsets.
#[inline]
pub fn lerp_rows(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}
