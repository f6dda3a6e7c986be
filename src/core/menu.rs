// PagePulse - core/menu.rs
//
// Slide-in menu state: open/close, escape handling, and the scroll lock
// that accompanies an open panel. Presentation (slide animation, scrim)
// lives in the UI layer; this controller only owns the boolean truth.

/// State machine for the collapsible menu panel.
///
/// A controller is "wired" when the page declares a `[menu]` block.
/// Unwired controllers ignore every request and report closed, so pages
/// without a menu need no special-casing at the call sites.
#[derive(Debug)]
pub struct MenuController {
    wired: bool,
    open: bool,
}

impl MenuController {
    pub fn new(wired: bool) -> Self {
        if !wired {
            tracing::debug!("Page declares no menu; menu controller is inert");
        }
        Self { wired, open: false }
    }

    pub fn is_wired(&self) -> bool {
        self.wired
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is suppressed while the panel is open so the page
    /// cannot move underneath it.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        if self.wired {
            self.open = !self.open;
            tracing::debug!(open = self.open, "Menu toggled");
        }
    }

    pub fn open(&mut self) {
        if self.wired {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle an Escape press. Returns true when the press was consumed
    /// (the menu was open and is now closed), so the caller can stop the
    /// key from reaching anything else.
    pub fn handle_escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// A nav link inside the panel was activated: the panel closes so
    /// the scroll it triggers is visible.
    pub fn link_selected(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuController::new(true);
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut menu = MenuController::new(true);
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_open_locks_scrolling() {
        let mut menu = MenuController::new(true);
        menu.open();
        assert!(menu.scroll_locked());
        menu.close();
        assert!(!menu.scroll_locked());
    }

    #[test]
    fn test_escape_consumed_only_while_open() {
        let mut menu = MenuController::new(true);
        assert!(!menu.handle_escape()); // closed: not consumed
        menu.open();
        assert!(menu.handle_escape()); // open: consumed and closed
        assert!(!menu.is_open());
        assert!(!menu.handle_escape()); // already closed again
    }

    #[test]
    fn test_link_selection_closes() {
        let mut menu = MenuController::new(true);
        menu.open();
        menu.link_selected();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_unwired_controller_is_inert() {
        let mut menu = MenuController::new(false);
        menu.toggle();
        menu.open();
        assert!(!menu.is_open());
        assert!(!menu.scroll_locked());
        assert!(!menu.handle_escape());
    }
}
