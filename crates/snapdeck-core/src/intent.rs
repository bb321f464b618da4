//! Normalized navigation requests.
//!
//! Input adapters translate raw terminal events into `MoveIntent` values and
//! hand them to the [`NavController`](crate::nav::NavController). Intents are
//! transient: consumed immediately, never queued or retained.

/// Relative navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the next section (down the deck).
    Forward,
    /// Toward the previous section (up the deck).
    Backward,
}

/// A single navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveIntent {
    /// Move one section forward or backward from the current one.
    Relative(Direction),
    /// Jump to the section with the given identifier.
    Absolute(String),
}

/// Which adapter produced an intent.
///
/// The controller rate-limits wheel-sourced intents independently of its
/// busy flag, so the source travels with the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Wheel,
    Key,
    Link,
}
