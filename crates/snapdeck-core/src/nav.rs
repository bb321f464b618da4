//! Scroll-snap navigation controller.
//!
//! One controller instance owns the busy state for the whole application.
//! Wheel, keyboard, and link adapters all feed it normalized [`MoveIntent`]s;
//! it resolves them against the registry, and while a snap is presumed in
//! flight it drops every further intent: no queue, no coalescing. The UI
//! prefers one predictable motion over responsiveness to rapid input.
//!
//! Completion is a manufactured signal: the terminal gives no animation-end
//! event, so the controller unlocks on a fixed settle timer. The timer is
//! both the liveness guarantee (no permanent lock-up) and an accepted
//! approximation (an unusually slow frame can unlock early; worst case one
//! intent lands oddly and is dropped downstream).

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::SnapConfig;
use crate::intent::{Direction, InputSource, MoveIntent};
use crate::section::{locate_current, SectionLayout, SectionRegistry};

/// Controller state. There are exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    /// A snap toward `target` is presumed in flight.
    Moving { target: usize },
}

/// The navigation state machine.
///
/// All mutable state is private; callers interact through [`submit`],
/// [`on_tick`], and the read-only queries.
///
/// [`submit`]: NavController::submit
/// [`on_tick`]: NavController::on_tick
#[derive(Debug)]
pub struct NavController {
    state: NavState,
    /// When the current snap is considered settled. Set iff `Moving`.
    settle_deadline: Option<Instant>,
    /// Last wheel intent that passed the throttle gate.
    last_wheel: Option<Instant>,
    wheel_throttle: Duration,
    settle_timeout: Duration,
}

impl NavController {
    pub fn new(config: &SnapConfig) -> Self {
        Self {
            state: NavState::Idle,
            settle_deadline: None,
            last_wheel: None,
            wheel_throttle: Duration::from_millis(config.wheel_throttle_ms),
            settle_timeout: Duration::from_millis(config.settle_ms),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, NavState::Moving { .. })
    }

    /// Target of the snap in flight, if any.
    pub fn target(&self) -> Option<usize> {
        match self.state {
            NavState::Moving { target } => Some(target),
            NavState::Idle => None,
        }
    }

    /// Submit one intent. Returns the resolved target ordinal when the
    /// intent is accepted and a snap should be dispatched; `None` for every
    /// flavor of silent no-op (throttled, busy, unresolvable, nothing to do).
    pub fn submit<L: SectionLayout>(
        &mut self,
        registry: &SectionRegistry,
        layout: &L,
        intent: MoveIntent,
        source: InputSource,
        now: Instant,
    ) -> Option<usize> {
        // Wheel bursts are rate-limited before the state machine sees them,
        // independently of the busy flag.
        if source == InputSource::Wheel {
            if let Some(last) = self.last_wheel {
                if now.duration_since(last) < self.wheel_throttle {
                    trace!("wheel intent throttled");
                    return None;
                }
            }
            self.last_wheel = Some(now);
        }

        if self.is_moving() {
            trace!(?intent, "intent dropped: snap in flight");
            return None;
        }

        let target = self.resolve(registry, layout, &intent)?;

        self.state = NavState::Moving { target };
        self.settle_deadline = Some(now + self.settle_timeout);
        debug!(target, ?source, "snap dispatched");
        Some(target)
    }

    /// Advance the settle timer. Returns true when the in-flight snap just
    /// completed and the controller went back to `Idle`.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        match (self.state, self.settle_deadline) {
            (NavState::Moving { target }, Some(deadline)) if now >= deadline => {
                debug!(target, "snap settled");
                self.state = NavState::Idle;
                self.settle_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Resolve an intent to a target ordinal, or `None` when there is
    /// nothing to do. Never fails: unknown ids, an unlocatable current
    /// section, and boundary clamps that go nowhere all degrade to `None`.
    fn resolve<L: SectionLayout>(
        &self,
        registry: &SectionRegistry,
        layout: &L,
        intent: &MoveIntent,
    ) -> Option<usize> {
        let last = registry.last_index()?;
        let current = locate_current(registry, layout)?;

        let target = match intent {
            MoveIntent::Relative(Direction::Forward) => (current + 1).min(last),
            MoveIntent::Relative(Direction::Backward) => current.saturating_sub(1),
            MoveIntent::Absolute(id) => registry.index_of(id)?,
        };

        if target == current {
            trace!(current, "intent resolves to current section, no-op");
            return None;
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::section::{SectionRegistry, UniformLayout};

    const VH: u16 = 40;

    fn setup() -> (NavController, SectionRegistry) {
        let controller = NavController::new(&SnapConfig::default());
        let registry = SectionRegistry::from_deck(&Deck::sample());
        (controller, registry)
    }

    fn at(registry: &SectionRegistry, ordinal: usize) -> UniformLayout {
        UniformLayout {
            offset: ordinal as u16 * VH,
            viewport_height: VH,
            count: registry.len(),
        }
    }

    fn forward() -> MoveIntent {
        MoveIntent::Relative(Direction::Forward)
    }

    fn backward() -> MoveIntent {
        MoveIntent::Relative(Direction::Backward)
    }

    #[test]
    fn test_forward_from_hero() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        let target = nav.submit(&reg, &at(&reg, 0), forward(), InputSource::Key, t0);
        assert_eq!(target, Some(1));
        assert!(nav.is_moving());
        assert_eq!(nav.target(), Some(1));
    }

    #[test]
    fn test_backward_from_about_targets_hero() {
        // Registry = [Hero, About, Projects, Contact]; current = About.
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        let target = nav.submit(&reg, &at(&reg, 1), backward(), InputSource::Key, t0);
        assert_eq!(target, Some(0));
    }

    #[test]
    fn test_forward_clamps_at_last_section() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        // Contact is ordinal 3; forward clamps to 3 == current, so no-op.
        let target = nav.submit(&reg, &at(&reg, 3), forward(), InputSource::Key, t0);
        assert_eq!(target, None);
        assert!(!nav.is_moving());
    }

    #[test]
    fn test_backward_clamps_at_hero() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        let target = nav.submit(&reg, &at(&reg, 0), backward(), InputSource::Key, t0);
        assert_eq!(target, None);
        assert!(!nav.is_moving());
    }

    #[test]
    fn test_only_first_intent_accepted_while_moving() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        assert_eq!(
            nav.submit(&reg, &at(&reg, 0), forward(), InputSource::Key, t0),
            Some(1)
        );
        // A storm of intents from every source while moving: all dropped,
        // target never drifts.
        for ms in [10u64, 50, 300, 600, 900] {
            let now = t0 + Duration::from_millis(ms);
            assert_eq!(nav.submit(&reg, &at(&reg, 0), forward(), InputSource::Key, now), None);
            assert_eq!(
                nav.submit(
                    &reg,
                    &at(&reg, 0),
                    MoveIntent::Absolute("contact".to_string()),
                    InputSource::Link,
                    now
                ),
                None
            );
        }
        assert_eq!(nav.target(), Some(1));
    }

    #[test]
    fn test_completion_returns_to_idle_and_accepts_next() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        nav.submit(&reg, &at(&reg, 0), forward(), InputSource::Key, t0);

        // Not settled yet.
        assert!(!nav.on_tick(t0 + Duration::from_millis(999)));
        assert!(nav.is_moving());

        // Settle timer fires.
        assert!(nav.on_tick(t0 + Duration::from_millis(1000)));
        assert!(!nav.is_moving());

        // Next valid intent accepted regardless of direction.
        let t1 = t0 + Duration::from_millis(1100);
        let target = nav.submit(&reg, &at(&reg, 1), backward(), InputSource::Key, t1);
        assert_eq!(target, Some(0));
    }

    #[test]
    fn test_wheel_throttle_one_accept_per_window() {
        let mut config = SnapConfig::default();
        config.settle_ms = 0; // isolate the throttle from the busy flag
        let mut nav = NavController::new(&config);
        let reg = SectionRegistry::from_deck(&Deck::sample());
        let t0 = Instant::now();

        // Synthetic trackpad burst: one event every 40 ms for a second.
        let mut accepted = Vec::new();
        for i in 0..25u64 {
            let now = t0 + Duration::from_millis(i * 40);
            nav.on_tick(now);
            let layout = at(&reg, accepted.len().min(reg.len() - 1));
            if nav
                .submit(&reg, &layout, forward(), InputSource::Wheel, now)
                .is_some()
            {
                accepted.push(now);
            }
        }

        // Exactly one accepted intent per 200 ms window.
        for pair in accepted.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(200));
        }
        assert_eq!(accepted.len(), 3); // ordinals 1, 2, 3 then clamped no-ops
    }

    #[test]
    fn test_wheel_throttle_applies_even_when_idle() {
        let mut config = SnapConfig::default();
        config.settle_ms = 50; // settle well inside the throttle window
        let mut nav = NavController::new(&config);
        let reg = SectionRegistry::from_deck(&Deck::sample());
        let t0 = Instant::now();

        assert_eq!(
            nav.submit(&reg, &at(&reg, 0), forward(), InputSource::Wheel, t0),
            Some(1)
        );
        assert!(nav.on_tick(t0 + Duration::from_millis(60)));
        assert!(!nav.is_moving());

        // Idle, but still inside the wheel throttle window: dropped.
        let t1 = t0 + Duration::from_millis(100);
        assert_eq!(
            nav.submit(&reg, &at(&reg, 1), forward(), InputSource::Wheel, t1),
            None
        );
        // Key intents are not wheel-throttled.
        assert_eq!(
            nav.submit(&reg, &at(&reg, 1), forward(), InputSource::Key, t1),
            Some(2)
        );
    }

    #[test]
    fn test_unknown_id_is_silent_noop() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        let target = nav.submit(
            &reg,
            &at(&reg, 0),
            MoveIntent::Absolute("nope".to_string()),
            InputSource::Link,
            t0,
        );
        assert_eq!(target, None);
        assert!(!nav.is_moving());
    }

    #[test]
    fn test_absolute_intent_by_id() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        let target = nav.submit(
            &reg,
            &at(&reg, 0),
            MoveIntent::Absolute("contact".to_string()),
            InputSource::Link,
            t0,
        );
        assert_eq!(target, Some(3));
    }

    #[test]
    fn test_no_current_section_is_silent_noop() {
        let (mut nav, reg) = setup();
        let t0 = Instant::now();
        // Offset past the end of the deck: midpoint lands in no section.
        let layout = UniformLayout {
            offset: reg.len() as u16 * VH + VH,
            viewport_height: VH,
            count: reg.len(),
        };
        assert_eq!(nav.submit(&reg, &layout, forward(), InputSource::Key, t0), None);
        assert!(!nav.is_moving());
    }

    #[test]
    fn test_empty_registry_is_inert() {
        let mut nav = NavController::new(&SnapConfig::default());
        let reg = SectionRegistry::default();
        let layout = UniformLayout {
            offset: 0,
            viewport_height: VH,
            count: 0,
        };
        let t0 = Instant::now();
        assert_eq!(nav.submit(&reg, &layout, forward(), InputSource::Key, t0), None);
        assert_eq!(
            nav.submit(
                &reg,
                &layout,
                MoveIntent::Absolute("about".to_string()),
                InputSource::Link,
                t0
            ),
            None
        );
        assert!(!nav.is_moving());
    }

    #[test]
    fn test_boundary_targets_per_ordinal() {
        // For all starting ordinals, forward -> min(i+1, n-1), backward -> max(i-1, 0).
        let reg = SectionRegistry::from_deck(&Deck::sample());
        let n = reg.len();
        for i in 0..n {
            for (intent, expected) in [
                (forward(), (i + 1).min(n - 1)),
                (backward(), i.saturating_sub(1)),
            ] {
                let mut nav = NavController::new(&SnapConfig::default());
                let got = nav.submit(&reg, &at(&reg, i), intent, InputSource::Key, Instant::now());
                if expected == i {
                    assert_eq!(got, None, "ordinal {} should clamp to itself", i);
                } else {
                    assert_eq!(got, Some(expected), "from ordinal {}", i);
                }
            }
        }
    }
}
