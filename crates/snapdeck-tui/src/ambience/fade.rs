//! Entrance fades.
//!
//! Each section carries an opacity that ramps toward its current visibility
//! target: in view plays the fade forward, out of view reverses it. Targets
//! come from geometry each frame; this type only integrates the ramp.

use std::time::{Duration, Instant};

/// Per-section entrance opacity.
#[derive(Debug)]
pub struct SectionFade {
    alpha: Vec<f32>,
    duration: Duration,
    last_tick: Instant,
}

impl SectionFade {
    pub fn new(count: usize, duration_ms: u64, now: Instant) -> Self {
        Self {
            alpha: vec![0.0; count],
            duration: Duration::from_millis(duration_ms.max(1)),
            last_tick: now,
        }
    }

    /// Ramp every section's opacity toward its target. `targets` holds one
    /// value in `[0, 1]` per section; extra entries are ignored.
    pub fn update(&mut self, targets: &[f32], now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        let step = (dt.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        for (alpha, target) in self.alpha.iter_mut().zip(targets) {
            let target = target.clamp(0.0, 1.0);
            if *alpha < target {
                *alpha = (*alpha + step).min(target);
            } else {
                *alpha = (*alpha - step).max(target);
            }
        }
    }

    /// Opacity of section `index`, 0 for unknown indices.
    pub fn alpha(&self, index: usize) -> f32 {
        self.alpha.get(index).copied().unwrap_or(0.0)
    }
}
