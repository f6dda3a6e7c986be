// PagePulse - core/navbar.rs
//
// Scroll-direction navbar visibility.
// The navbar hides while the user scrolls down past a threshold and
// returns the moment they scroll up, keeping reading space clear without
// stranding them far from the nav.

use crate::util::constants;

/// Decides navbar visibility from successive scroll offsets.
///
/// One offset observation per frame. The comparison baseline is always
/// the previous frame's offset, never the offset at which the navbar
/// last changed state, so alternating small scrolls flip visibility
/// exactly as the user's direction flips.
#[derive(Debug)]
pub struct NavbarController {
    last_offset: f32,
    visible: bool,
}

impl NavbarController {
    pub fn new() -> Self {
        Self {
            last_offset: 0.0,
            visible: true,
        }
    }

    /// Observe the current scroll offset and return the resulting
    /// visibility. Hidden iff the page moved down this frame AND the
    /// offset is beyond the threshold; shown otherwise.
    pub fn observe(&mut self, offset: f32) -> bool {
        let scrolled_down = offset > self.last_offset;
        self.visible = !(scrolled_down && offset > constants::NAVBAR_HIDE_THRESHOLD_PX);
        self.last_offset = offset;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for NavbarController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        let nav = NavbarController::new();
        assert!(nav.is_visible());
    }

    #[test]
    fn test_direction_sequence() {
        // Offsets 0, 50, 150, 120 -> shown, shown, hidden, shown.
        let mut nav = NavbarController::new();
        assert!(nav.observe(0.0));
        assert!(nav.observe(50.0)); // below threshold, stays shown
        assert!(!nav.observe(150.0)); // down past threshold, hides
        assert!(nav.observe(120.0)); // any upward motion shows
    }

    #[test]
    fn test_shown_at_exact_threshold() {
        let mut nav = NavbarController::new();
        nav.observe(0.0);
        // offset == threshold is not "past" it.
        assert!(nav.observe(constants::NAVBAR_HIDE_THRESHOLD_PX));
    }

    #[test]
    fn test_baseline_updates_even_while_shown() {
        let mut nav = NavbarController::new();
        nav.observe(300.0); // big jump down from 0: hidden
        assert!(!nav.is_visible());
        assert!(nav.observe(200.0)); // up: shown
        // Baseline is now 200, so 250 is downward motion again.
        assert!(!nav.observe(250.0));
    }

    #[test]
    fn test_repeated_offset_is_not_downward() {
        let mut nav = NavbarController::new();
        nav.observe(500.0);
        assert!(!nav.is_visible());
        // Same offset twice: no movement, navbar returns.
        assert!(nav.observe(500.0));
    }
}
