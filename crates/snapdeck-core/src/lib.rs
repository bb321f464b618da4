pub mod config;
pub mod deck;
pub mod error;
pub mod intent;
pub mod nav;
pub mod section;

pub use config::{AmbienceConfig, AppConfig, EasingType, SnapConfig, UiConfig};
pub use deck::{Card, Deck, Hero, SectionDef, SectionKind};
pub use error::{Error, Result};
pub use intent::{Direction, InputSource, MoveIntent};
pub use nav::{NavController, NavState};
pub use section::{
    locate_current, Section, SectionGeometry, SectionLayout, SectionRegistry, UniformLayout,
};
