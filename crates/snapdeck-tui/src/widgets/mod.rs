pub mod nav_bar;
pub mod sections;

pub use nav_bar::NavBarWidget;
pub use sections::SectionsWidget;
