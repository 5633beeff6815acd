use crate::menu::{Menu, Orientation, ProductionMenu};

/// Fluent assembly of a [`Menu`].
///
/// Every step takes the builder by value and hands the same builder back, so a
/// chain ends in exactly one `build`. Once built, the builder is gone.
pub trait Builder: Sized {
    type Output: Menu;

    fn with_title(self, title: impl Into<String>) -> Self;
    fn with_border(self, pixels: i32) -> Self;
    fn add_option(self, option: impl Into<String>) -> Self;
    fn horizontal(self) -> Self;
    fn vertical(self) -> Self;
    fn build(self) -> Self::Output;
}

#[derive(Debug)]
pub struct ProductionBuilder {
    menu: ProductionMenu,
}

impl ProductionBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            menu: ProductionMenu::new(id.into()),
        }
    }
}

impl Builder for ProductionBuilder {
    type Output = ProductionMenu;

    fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        tracing::trace!(id = %self.menu.id(), %title, "with_title");
        self.menu.set_title(title);
        self
    }

    fn with_border(mut self, pixels: i32) -> Self {
        tracing::trace!(id = %self.menu.id(), pixels, "with_border");
        self.menu.set_border(pixels);
        self
    }

    fn add_option(mut self, option: impl Into<String>) -> Self {
        let option = option.into();
        tracing::trace!(id = %self.menu.id(), %option, "add_option");
        self.menu.push_option(option);
        self
    }

    fn horizontal(mut self) -> Self {
        tracing::trace!(id = %self.menu.id(), "horizontal");
        self.menu.set_orientation(Orientation::Horizontal);
        self
    }

    fn vertical(mut self) -> Self {
        tracing::trace!(id = %self.menu.id(), "vertical");
        self.menu.set_orientation(Orientation::Vertical);
        self
    }

    fn build(self) -> ProductionMenu {
        tracing::debug!(
            id = %self.menu.id(),
            options = self.menu.options().len(),
            "menu built"
        );
        self.menu
    }
}
