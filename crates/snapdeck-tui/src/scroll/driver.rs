//! The snap animation itself.

use std::time::{Duration, Instant};

use snapdeck_core::{EasingType, SnapConfig};

use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp_rows, progress};

/// One in-flight interpolation.
#[derive(Debug, Clone)]
struct ActiveSnap {
    start: Instant,
    from: u16,
    to: u16,
}

/// Owns the presented scroll offset and animates it toward snap targets.
///
/// At most one interpolation runs at a time; the navigation controller
/// guarantees a new target can only arrive after the previous snap settled,
/// so `snap_to` never has to merge motions. Completion is *not* reported
/// here; see the module docs.
#[derive(Debug)]
pub struct SnapDriver {
    animation: Option<ActiveSnap>,
    /// Presented offset in rows, always up to date after `update`.
    offset: u16,
    duration: Duration,
    easing: EasingType,
    smooth: bool,
}

impl SnapDriver {
    pub fn new(config: &SnapConfig) -> Self {
        Self {
            animation: None,
            offset: 0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
            smooth: config.smooth_enabled && config.animation_duration_ms > 0,
        }
    }

    /// Presented offset as of the last `update`.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final offset once the current interpolation lands.
    pub fn target_offset(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.offset)
    }

    /// Place the offset immediately, cancelling any interpolation.
    pub fn set_offset(&mut self, offset: u16) {
        self.animation = None;
        self.offset = offset;
    }

    /// Begin animating toward `target` rows. Instant when smoothing is
    /// disabled or the offset is already there.
    pub fn snap_to(&mut self, target: u16, now: Instant) {
        if !self.smooth || self.offset == target {
            self.set_offset(target);
            return;
        }
        self.animation = Some(ActiveSnap {
            start: now,
            from: self.offset,
            to: target,
        });
    }

    /// Advance the interpolation and return the presented offset.
    /// Call every frame while animating.
    pub fn update(&mut self, now: Instant) -> u16 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, self.duration, now) {
                self.offset = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, self.duration, now);
                self.offset = lerp_rows(anim.from, anim.to, self.easing.apply(t));
            }
        }
        self.offset
    }
}
