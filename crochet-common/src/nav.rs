//! Navigation menu state and same-page anchor scrolling

/// Open/closed state of the collapsible navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Element id targeted by a same-page link, e.g. `#produtos` -> `produtos`.
///
/// Returns `None` for bare `#` links and hrefs that are not fragments.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts an element `offset` pixels below the
/// top of the viewport, given its viewport-relative top and the current
/// scroll position.
pub fn scroll_destination(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    element_top + scroll_y - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn close_reports_change() {
        let mut menu = NavMenu::default();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn starts_from_markup_state() {
        let mut menu = NavMenu::new(true);
        assert_eq!(menu.aria_expanded(), "true");
        assert!(!menu.toggle());
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#contato"), Some("contato"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn scroll_destination_applies_header_offset() {
        assert_eq!(scroll_destination(400.0, 1200.0, 70.0), 1530.0);
        assert_eq!(scroll_destination(-300.0, 300.0, 70.0), -70.0);
    }
}
