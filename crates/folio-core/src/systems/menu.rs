/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

/// Visual state to apply after a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Value for `body.style.overflow`: page scrolling is locked while open.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) -> MenuState {
        self.open = !self.open;
        self.state()
    }

    pub fn close(&mut self) -> MenuState {
        self.open = false;
        self.state()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> MenuState {
        MenuState { open: self.open }
    }
}

/// What a click on an in-page anchor should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Leave the click alone.
    Ignore,
    /// Prevent navigation, close the menu and smooth-scroll to the element
    /// matched by `selector` (if any).
    ScrollTo { selector: &'a str },
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    match href {
        "#" => AnchorAction::Ignore,
        h if h.starts_with('#') => AnchorAction::ScrollTo { selector: h },
        _ => AnchorAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_locks_scrolling() {
        let mut menu = MobileMenu::new();
        let state = menu.toggle();
        assert!(state.open);
        assert_eq!(state.body_overflow(), "hidden");

        let state = menu.toggle();
        assert!(!state.open);
        assert_eq!(state.body_overflow(), "");
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(!menu.close().open);
        assert!(!menu.close().open);
        assert!(!menu.is_open());
    }

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_action("#"), AnchorAction::Ignore);
        assert_eq!(anchor_action("https://example.com"), AnchorAction::Ignore);
        assert_eq!(
            anchor_action("#contact"),
            AnchorAction::ScrollTo { selector: "#contact" }
        );
    }
}
