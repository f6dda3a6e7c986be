// PagePulse - core/scrollto.rs
//
// Animated anchor scrolling. A nav link activation starts an eased glide
// from the current scroll offset to the target section's offset; any
// manual scroll input cancels the glide so the animation never fights
// the user for the scrollbar.

use crate::core::ease;
use crate::util::constants;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started: Instant,
}

/// Drives at most one scroll animation at a time. Starting a new glide
/// replaces any glide in flight.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    active: Option<Glide>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a glide from `from` to `to`. The target is stored verbatim;
    /// clamping to the scrollable range is the caller's concern since
    /// only the render side knows the content height.
    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        tracing::debug!(from, to, "Anchor scroll started");
        self.active = Some(Glide {
            from,
            to,
            started: now,
        });
    }

    /// Abort the glide, leaving the scroll offset wherever it is.
    /// Called when the user scrolls manually mid-animation.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("Anchor scroll cancelled by user input");
        }
    }

    /// The offset to apply this frame, or `None` when idle. On the final
    /// frame this returns exactly the target offset and the animator goes
    /// idle, so the landing position never carries easing error.
    pub fn offset_at(&mut self, now: Instant) -> Option<f32> {
        let glide = self.active?;
        let elapsed = now.saturating_duration_since(glide.started).as_secs_f32();
        let t = elapsed / constants::SCROLL_ANIM_SECS;
        if t >= 1.0 {
            self.active = None;
            return Some(glide.to);
        }
        let eased = ease::ease_in_out_cubic(t);
        Some(glide.from + (glide.to - glide.from) * eased)
    }
}
