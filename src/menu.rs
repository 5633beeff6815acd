use serde::{Deserialize, Serialize};

/// Something that can be displayed and have one of its options picked.
pub trait Menu {
    /// Renders the menu. Currently inert.
    fn show(&self);
    /// Selects the option at `index`. No bounds are enforced; currently inert.
    fn select(&self, index: i32);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// A finished menu. Only [`crate::ProductionBuilder`] can create or change one.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ProductionMenu {
    id: String,
    title: String,
    options: Vec<String>,
    orientation: Orientation,
    border: i32,
}

impl ProductionMenu {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            title: String::new(),
            options: Vec::new(),
            orientation: Orientation::default(),
            border: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// Border thickness in pixels.
    pub fn border(&self) -> i32 {
        self.border
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_border(&mut self, pixels: i32) {
        self.border = pixels;
    }

    pub(crate) fn push_option(&mut self, label: String) {
        self.options.push(label);
    }

    pub(crate) fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

impl Menu for ProductionMenu {
    fn show(&self) {
        tracing::debug!(id = %self.id, "show");
    }

    fn select(&self, index: i32) {
        tracing::debug!(id = %self.id, index, "select");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_menu_starts_in_default_state() {
        let menu = ProductionMenu::new("side".to_string());
        assert_eq!(menu.id(), "side");
        assert_eq!(menu.title(), "");
        assert!(menu.options().is_empty());
        assert_eq!(menu.orientation(), Orientation::Vertical);
        assert!(!menu.is_horizontal());
        assert_eq!(menu.border(), 0);
    }

    #[test]
    fn show_and_select_leave_menu_untouched() {
        let mut menu = ProductionMenu::new("main".to_string());
        menu.push_option("Only".to_string());
        let before = format!("{menu:?}");

        menu.show();
        for index in [i32::MIN, -1, 0, 1, 7, i32::MAX] {
            menu.select(index);
        }

        assert_eq!(format!("{menu:?}"), before);
    }

    #[test]
    fn menu_is_usable_as_trait_object() {
        let menu: Box<dyn Menu> = Box::new(ProductionMenu::new("boxed".to_string()));
        menu.show();
        menu.select(3);
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
        let parsed: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, Orientation::Vertical);
    }
}
