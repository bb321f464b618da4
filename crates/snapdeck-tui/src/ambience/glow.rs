//! Wandering ambient glow.
//!
//! A soft radial glow fades in at a random viewport position, fades back
//! out, then reappears somewhere else, forever. Runs purely on its own
//! timer; a resize restarts the cycle at a fresh position.

use std::time::{Duration, Instant};

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlowPhase {
    FadeIn,
    FadeOut,
}

/// Glow position/opacity animator.
#[derive(Debug)]
pub struct GlowAnimator {
    half_period: Duration,
    phase: GlowPhase,
    phase_start: Instant,
    /// Center as a fraction of the viewport, both axes in `[0, 1]`.
    center: (f32, f32),
}

impl GlowAnimator {
    pub fn new(half_period_ms: u64, now: Instant) -> Self {
        Self {
            half_period: Duration::from_millis(half_period_ms.max(1)),
            phase: GlowPhase::FadeIn,
            phase_start: now,
            center: random_center(),
        }
    }

    /// Advance the phase machine. Safe to call with any cadence; long gaps
    /// between ticks just skip whole phases.
    pub fn update(&mut self, now: Instant) {
        while now.saturating_duration_since(self.phase_start) >= self.half_period {
            self.phase_start += self.half_period;
            self.phase = match self.phase {
                GlowPhase::FadeIn => GlowPhase::FadeOut,
                GlowPhase::FadeOut => {
                    // Cycle finished: reappear somewhere else.
                    self.center = random_center();
                    GlowPhase::FadeIn
                }
            };
        }
    }

    /// Current opacity in `[0, 1]`.
    pub fn opacity(&self, now: Instant) -> f32 {
        let t = (now.saturating_duration_since(self.phase_start).as_secs_f32()
            / self.half_period.as_secs_f32())
        .clamp(0.0, 1.0);
        match self.phase {
            GlowPhase::FadeIn => t,
            GlowPhase::FadeOut => 1.0 - t,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// Restart the cycle after a resize: new position, fade in from zero.
    pub fn restart(&mut self, now: Instant) {
        self.center = random_center();
        self.phase = GlowPhase::FadeIn;
        self.phase_start = now;
    }
}

fn random_center() -> (f32, f32) {
    let mut rng = rand::thread_rng();
    (rng.gen::<f32>(), rng.gen::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_ramps_in_then_out() {
        let t0 = Instant::now();
        let mut glow = GlowAnimator::new(1000, t0);

        assert_eq!(glow.opacity(t0), 0.0);
        let half_in = glow.opacity(t0 + Duration::from_millis(500));
        assert!((half_in - 0.5).abs() < 0.01);

        glow.update(t0 + Duration::from_millis(1000));
        // Now fading out from full.
        assert!((glow.opacity(t0 + Duration::from_millis(1000)) - 1.0).abs() < 0.01);
        let half_out = glow.opacity(t0 + Duration::from_millis(1500));
        assert!((half_out - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_cycle_repositions() {
        let t0 = Instant::now();
        let mut glow = GlowAnimator::new(100, t0);
        for i in 1..=50 {
            glow.update(t0 + Duration::from_millis(i * 100));
            let (x, y) = glow.center();
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
            let op = glow.opacity(t0 + Duration::from_millis(i * 100));
            assert!((0.0..=1.0).contains(&op));
        }
    }

    #[test]
    fn test_restart_fades_in_from_zero() {
        let t0 = Instant::now();
        let mut glow = GlowAnimator::new(1000, t0);
        glow.update(t0 + Duration::from_millis(1200));
        let t1 = t0 + Duration::from_millis(1300);
        glow.restart(t1);
        assert_eq!(glow.opacity(t1), 0.0);
    }
}
