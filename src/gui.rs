// PagePulse - gui.rs
//
// Top-level eframe::App implementation.
// Wires input, controller clocks, and the UI panels together. All
// interaction rules live in the core controllers; this file only feeds
// them the frame clock and applies what they decide.

use std::time::{Duration, Instant};

use crate::app::state::AppState;
use crate::core::notice::{NoticeKind, NoticePhase};
use crate::ui::panels;
use crate::util::constants;

/// The PagePulse application.
pub struct PagePulseApp {
    pub state: AppState,
}

impl PagePulseApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PagePulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let state = &mut self.state;

        // ---- Input ----
        // Esc closes an open menu; a closed or unwired menu ignores it.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            state.menu.handle_escape();
        }

        // Ctrl+O (Cmd+O on macOS) swaps in a different page definition.
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::O)) {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Page definitions", &["toml"])
                .pick_file()
            {
                match crate::app::page_loader::load_user_page(&path) {
                    Ok(page) => state.load_new_page(page, now),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Page failed to load");
                        state.notices.push(e.to_string(), NoticeKind::Warning, now);
                    }
                }
            }
        }

        // Any wheel movement during a glide hands scrolling back to the
        // user instead of fighting the animation.
        if state.scroller.is_active() && ctx.input(|i| i.raw_scroll_delta.y != 0.0) {
            state.scroller.cancel();
        }

        // ---- Controller clocks ----
        state.notices.tick(now);

        if state.signup_form.poll_settled(now) {
            let kind = state.signup_form.kind();
            state
                .notices
                .push(kind.success_message(), NoticeKind::Success, now);
            state.signup_fields.clear();
        }
        if state.contact_form.poll_settled(now) {
            let kind = state.contact_form.kind();
            state
                .notices
                .push(kind.success_message(), NoticeKind::Success, now);
            state.contact_fields.clear();
        }

        // ---- Panels ----
        panels::navbar::render(ctx, state, now);
        panels::page::render(ctx, state, now);
        panels::menu::render(ctx, state, now);
        panels::notices::render(ctx, &mut state.notices, now);

        // The page panel recorded this frame's offset above; the navbar
        // compares it against the previous frame to pick a direction.
        state.navbar.observe(state.scroll_offset);

        // ---- Repaint scheduling ----
        // show_animated and animate_bool schedule their own repaints, so
        // only the clock-driven controllers are covered here. A fading
        // notice needs per-frame redraws; idle notices just need a wake-up
        // at the next deadline.
        let animating = state.scroller.is_active()
            || state.reveal.animating(now)
            || state.signup_form.is_submitting()
            || state.contact_form.is_submitting()
            || state
                .notices
                .notices()
                .iter()
                .any(|n| n.phase(now) == NoticePhase::FadingOut);

        if animating {
            ctx.request_repaint_after(Duration::from_millis(constants::ANIM_REPAINT_MS));
        } else if let Some(deadline) = state.notices.next_deadline(now) {
            ctx.request_repaint_after(deadline);
        }
    }
}
