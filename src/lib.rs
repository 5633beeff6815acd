pub mod builder;
pub mod config;
pub mod menu;

pub use builder::{Builder, ProductionBuilder};
pub use menu::{Menu, Orientation, ProductionMenu};

/// The menu `menubuilder demo` assembles.
pub fn demo_menu() -> ProductionMenu {
    ProductionBuilder::new("main")
        .with_title("Main Menu")
        .with_border(1)
        .add_option("Option 1")
        .add_option("Option 2")
        .horizontal()
        .build()
}
