/// Open/closed state of the collapsed navigation shown on small screens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// State after a navigation click. The menu only closes when the target
    /// section was actually found and scrolled to.
    pub fn after_navigation(self, scrolled: bool) -> Self {
        if scrolled {
            self.closed()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MobileMenu::default().is_open());
    }

    #[test]
    fn test_toggle() {
        let menu = MobileMenu::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn test_navigation_closes_only_when_scrolled() {
        let open = MobileMenu::default().toggled();
        assert!(open.after_navigation(false).is_open());
        assert!(!open.after_navigation(true).is_open());
    }
}
