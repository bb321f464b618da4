//! Animated scroll driver for section snaps.
//!
//! The driver owns the *presented* scroll offset: when the navigation
//! controller dispatches a snap, [`SnapDriver::snap_to`] starts one
//! interpolation toward the target row and `update()` advances it each
//! frame. The driver is purely cosmetic; it never signals completion.
//! The controller's settle timer is the only "animation done" authority,
//! because the terminal offers no real animation-end event.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `driver` - the animation state itself

pub mod driver;
pub mod easing;
pub mod timing;

pub use driver::SnapDriver;
pub use easing::EasingTypeExt;
