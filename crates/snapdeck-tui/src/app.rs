//! Application state.
//!
//! `App` owns the deck, the navigation controller, the snap driver, and the
//! decorative subsystems. Every time-dependent step takes an explicit `now`
//! so state transitions stay deterministic under test.

use std::time::Instant;

use tracing::debug;

use snapdeck_core::{
    AppConfig, Deck, NavController, SectionRegistry, UniformLayout,
};

use crate::ambience::{DotGrid, GlowAnimator, HoverHighlight, SectionFade};
use crate::input::{Action, HitMap};
use crate::scroll::SnapDriver;
use crate::theme::Theme;

/// The running application.
pub struct App {
    pub deck: Deck,
    pub registry: SectionRegistry,
    pub config: AppConfig,
    pub theme: Theme,

    nav: NavController,
    driver: SnapDriver,

    pub dots: DotGrid,
    pub glow: GlowAnimator,
    pub fade: SectionFade,
    pub hover: HoverHighlight,
    pub hits: HitMap,

    /// Section viewport (terminal minus the nav-bar row), in cells.
    section_size: (u16, u16),
    pub should_quit: bool,
}

impl App {
    /// `size` is the full terminal size; one row is reserved for the nav bar.
    pub fn new(deck: Deck, config: AppConfig, size: (u16, u16), now: Instant) -> Self {
        let registry = SectionRegistry::from_deck(&deck);
        let section_size = (size.0, size.1.saturating_sub(1));
        Self {
            nav: NavController::new(&config.snap),
            driver: SnapDriver::new(&config.snap),
            dots: DotGrid::new(config.ambience.dot_spacing, section_size.0, section_size.1),
            glow: GlowAnimator::new(config.ambience.glow_half_period_ms, now),
            fade: SectionFade::new(registry.len(), config.ambience.fade_duration_ms, now),
            hover: HoverHighlight::new(),
            hits: HitMap::new(),
            theme: Theme::default(),
            deck,
            registry,
            config,
            section_size,
            should_quit: false,
        }
    }

    /// Presented scroll offset in rows.
    pub fn offset(&self) -> u16 {
        self.driver.offset()
    }

    pub fn viewport_height(&self) -> u16 {
        self.section_size.1
    }

    /// True while the snap interpolation is mid-flight and the loop should
    /// poll at the animation frame rate instead of the tick rate.
    pub fn needs_fast_update(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn is_moving(&self) -> bool {
        self.nav.is_moving()
    }

    fn layout(&self) -> UniformLayout {
        UniformLayout {
            offset: self.driver.offset(),
            viewport_height: self.section_size.1,
            count: self.registry.len(),
        }
    }

    /// Apply one input action.
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Move(intent, source) => {
                let layout = self.layout();
                if let Some(target) =
                    self.nav.submit(&self.registry, &layout, intent, source, now)
                {
                    let rows = target as u16 * self.section_size.1;
                    self.driver.snap_to(rows, now);
                }
            }
            Action::Hover(column, row) => self.hover.set(column, row),
            Action::None => {}
        }
    }

    /// Advance every timer: settle, interpolation, glow, fades.
    pub fn on_tick(&mut self, now: Instant) {
        self.nav.on_tick(now);
        self.driver.update(now);
        self.glow.update(now);
        let targets = self.fade_targets();
        self.fade.update(&targets, now);
    }

    /// Terminal resized. Layout-dependent state is rebuilt; the navigation
    /// state machine is deliberately untouched, so a snap in flight keeps
    /// its settle deadline.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        let old_vh = self.section_size.1.max(1);
        // Ordinal the view is at (or heading to), re-pinned in the new rows.
        let ordinal = self.driver.target_offset() / old_vh;

        self.section_size = (width, height.saturating_sub(1));
        self.driver.set_offset(ordinal * self.section_size.1);
        self.dots.rebuild(self.section_size.0, self.section_size.1);
        self.glow.restart(now);
        debug!(width, height, "viewport resized");
    }

    /// Per-section fade targets: a section counts as in view once it covers
    /// the middle 60% band of the viewport.
    fn fade_targets(&self) -> Vec<f32> {
        let vh = self.section_size.1 as i32;
        let offset = self.driver.offset() as i32;
        (0..self.registry.len())
            .map(|i| {
                let top = i as i32 * vh - offset;
                let bottom = top + vh;
                let in_view = top < vh * 4 / 5 && bottom > vh / 5;
                if in_view {
                    1.0
                } else {
                    0.0
                }
            })
            .collect()
    }
}
