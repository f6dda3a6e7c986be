// PagePulse - core/reveal.rs
//
// One-shot scroll reveal: elements start transparent and slightly sunk,
// then fade in and rise the first time enough of them enters the viewport.
// Visibility geometry comes in from the UI layer each frame; this module
// owns the per-element state and the animation clock.

use crate::core::ease;
use crate::util::constants;
use std::collections::HashMap;
use std::time::Instant;

/// How a revealable element should be drawn right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPresentation {
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Extra downward offset in logical pixels; reaches 0 as the
    /// element settles into place.
    pub rise: f32,
}

impl RevealPresentation {
    fn hidden() -> Self {
        Self {
            alpha: 0.0,
            rise: constants::REVEAL_SLIDE_PX,
        }
    }

    fn shown() -> Self {
        Self {
            alpha: 1.0,
            rise: 0.0,
        }
    }
}

/// Tracks reveal state for every revealable element on the page.
///
/// Reveals are one-shot: once an element has been revealed it is never
/// observed again, so scrolling it out of view and back does not replay
/// the animation.
#[derive(Debug)]
pub struct RevealController {
    /// `None` = still hidden, `Some` = instant the reveal started.
    states: HashMap<String, Option<Instant>>,
    /// When false (reduced-motion config), everything renders fully
    /// visible and observations are ignored.
    enabled: bool,
}

impl RevealController {
    pub fn new(enabled: bool) -> Self {
        Self {
            states: HashMap::new(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register an element as revealable. Idempotent; re-registering
    /// never resets an already-revealed element.
    pub fn register(&mut self, id: &str) {
        self.states.entry(id.to_string()).or_insert(None);
    }

    pub fn registered_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        matches!(self.states.get(id), Some(Some(_)))
    }

    /// Feed one frame's geometry for an element. Coordinates are in any
    /// shared space; only the vertical overlap matters. The viewport's
    /// bottom edge is biased upward by `REVEAL_BOTTOM_MARGIN_PX` before
    /// the overlap test, and the reveal fires once at least
    /// `REVEAL_VISIBLE_FRACTION` of the element's height is inside.
    pub fn observe(
        &mut self,
        id: &str,
        elem_top: f32,
        elem_bottom: f32,
        view_top: f32,
        view_bottom: f32,
        now: Instant,
    ) {
        if !self.enabled {
            return;
        }

        let state = self.states.entry(id.to_string()).or_insert(None);
        if state.is_some() {
            // One-shot: already revealed, nothing left to watch.
            return;
        }

        let fraction = visible_fraction(elem_top, elem_bottom, view_top, view_bottom);
        if fraction >= constants::REVEAL_VISIBLE_FRACTION {
            *state = Some(now);
            tracing::trace!(id, fraction, "Element revealed");
        }
    }

    /// Current alpha and rise for an element. Unknown or unrevealed
    /// elements render hidden; with reveals disabled everything renders
    /// fully shown.
    pub fn presentation(&self, id: &str, now: Instant) -> RevealPresentation {
        if !self.enabled {
            return RevealPresentation::shown();
        }
        match self.states.get(id) {
            Some(Some(since)) => {
                let elapsed = now.saturating_duration_since(*since).as_secs_f32();
                let t = (elapsed / constants::REVEAL_ANIM_SECS).clamp(0.0, 1.0);
                let eased = ease::ease_out_cubic(t);
                RevealPresentation {
                    alpha: eased,
                    rise: (1.0 - eased) * constants::REVEAL_SLIDE_PX,
                }
            }
            _ => RevealPresentation::hidden(),
        }
    }

    /// True while any reveal animation is still in flight. Drives the
    /// repaint schedule; idle pages stop repainting.
    pub fn animating(&self, now: Instant) -> bool {
        self.states.values().any(|state| match state {
            Some(since) => {
                now.saturating_duration_since(*since).as_secs_f32()
                    < constants::REVEAL_ANIM_SECS
            }
            None => false,
        })
    }
}

/// Fraction of the element's height inside the biased viewport, in [0, 1].
/// Zero-height elements never count as visible.
fn visible_fraction(elem_top: f32, elem_bottom: f32, view_top: f32, view_bottom: f32) -> f32 {
    let height = elem_bottom - elem_top;
    if height <= 0.0 {
        return 0.0;
    }
    let biased_bottom = view_bottom - constants::REVEAL_BOTTOM_MARGIN_PX;
    let overlap = elem_bottom.min(biased_bottom) - elem_top.max(view_top);
    (overlap.max(0.0) / height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unobserved_elements_stay_hidden() {
        let mut reveal = RevealController::new(true);
        reveal.register("hero");
        let now = Instant::now();
        let p = reveal.presentation("hero", now);
        assert_eq!(p.alpha, 0.0);
        assert_eq!(p.rise, constants::REVEAL_SLIDE_PX);
        assert!(!reveal.is_revealed("hero"));
    }

    #[test]
    fn test_reveal_fires_at_threshold() {
        let mut reveal = RevealController::new(true);
        let now = Instant::now();
        // Viewport 0..800, biased bottom 750. Element 700..900 has 50 of
        // its 200 px inside: exactly 25%, past the 10% threshold.
        reveal.observe("a", 700.0, 900.0, 0.0, 800.0, now);
        assert!(reveal.is_revealed("a"));
    }

    #[test]
    fn test_reveal_respects_bottom_margin() {
        let mut reveal = RevealController::new(true);
        let now = Instant::now();
        // Element 760..960 sits entirely below the biased bottom (750):
        // visually on screen, but not yet revealed.
        reveal.observe("a", 760.0, 960.0, 0.0, 800.0, now);
        assert!(!reveal.is_revealed("a"));
    }

    #[test]
    fn test_below_fraction_threshold_does_not_fire() {
        let mut reveal = RevealController::new(true);
        let now = Instant::now();
        // 10 of 200 px inside the biased viewport: 5% < 10%.
        reveal.observe("a", 740.0, 940.0, 0.0, 800.0, now);
        assert!(!reveal.is_revealed("a"));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = RevealController::new(true);
        let t0 = Instant::now();
        reveal.observe("a", 0.0, 100.0, 0.0, 800.0, t0);
        assert!(reveal.is_revealed("a"));

        // Scrolled far out of view much later: stays revealed, and the
        // animation clock still dates from the original reveal.
        let t1 = t0 + Duration::from_secs(10);
        reveal.observe("a", 5000.0, 5100.0, 0.0, 800.0, t1);
        assert!(reveal.is_revealed("a"));
        let p = reveal.presentation("a", t1);
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.rise, 0.0);
    }

    #[test]
    fn test_animation_progresses_and_settles() {
        let mut reveal = RevealController::new(true);
        let t0 = Instant::now();
        reveal.observe("a", 0.0, 100.0, 0.0, 800.0, t0);

        let p_start = reveal.presentation("a", t0);
        assert_eq!(p_start.alpha, 0.0);

        let mid = t0 + Duration::from_secs_f32(constants::REVEAL_ANIM_SECS / 2.0);
        let p_mid = reveal.presentation("a", mid);
        assert!(p_mid.alpha > 0.0 && p_mid.alpha < 1.0);
        assert!(p_mid.rise > 0.0 && p_mid.rise < constants::REVEAL_SLIDE_PX);

        let end = t0 + Duration::from_secs_f32(constants::REVEAL_ANIM_SECS + 0.1);
        let p_end = reveal.presentation("a", end);
        assert_eq!(p_end.alpha, 1.0);
        assert_eq!(p_end.rise, 0.0);
        assert!(!reveal.animating(end));
    }

    #[test]
    fn test_animating_while_in_flight() {
        let mut reveal = RevealController::new(true);
        let t0 = Instant::now();
        assert!(!reveal.animating(t0));
        reveal.observe("a", 0.0, 100.0, 0.0, 800.0, t0);
        assert!(reveal.animating(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_disabled_renders_everything_shown() {
        let mut reveal = RevealController::new(false);
        reveal.register("a");
        let now = Instant::now();
        let p = reveal.presentation("a", now);
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.rise, 0.0);
        // Observations are ignored entirely.
        reveal.observe("a", 0.0, 100.0, 0.0, 800.0, now);
        assert!(!reveal.is_revealed("a"));
    }

    #[test]
    fn test_zero_height_element_never_reveals() {
        let mut reveal = RevealController::new(true);
        let now = Instant::now();
        reveal.observe("a", 400.0, 400.0, 0.0, 800.0, now);
        assert!(!reveal.is_revealed("a"));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut reveal = RevealController::new(true);
        let now = Instant::now();
        reveal.observe("a", 0.0, 100.0, 0.0, 800.0, now);
        reveal.register("a");
        assert!(reveal.is_revealed("a"), "register must not reset a reveal");
        assert_eq!(reveal.registered_count(), 1);
    }
}
