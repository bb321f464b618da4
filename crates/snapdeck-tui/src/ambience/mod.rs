//! Decorative subsystems.
//!
//! Each of these runs on its own trigger (a timer, a resize, mouse motion,
//! section visibility) and none of them share state with the navigation
//! controller. They can be disabled or restarted freely without affecting
//! snapping.

pub mod dots;
pub mod fade;
pub mod glow;
pub mod highlight;

pub use dots::DotGrid;
pub use fade::SectionFade;
pub use glow::GlowAnimator;
pub use highlight::HoverHighlight;
