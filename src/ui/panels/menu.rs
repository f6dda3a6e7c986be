// PagePulse - ui/panels/menu.rs
//
// Slide-in navigation menu with a dimming scrim.
// Only rendered when the page defines a menu; narrow windows reach it via
// the navbar hamburger. The open fraction drives both the panel position
// and the scrim opacity, so opening and closing read as one motion.

use std::time::Instant;

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the scrim and the sliding panel. Returns without painting when
/// the menu is unwired or fully closed.
pub fn render(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    if !state.menu.is_wired() {
        return;
    }

    let openness = ctx.animate_bool_with_time(
        egui::Id::new("menu-slide"),
        state.menu.is_open(),
        constants::MENU_SLIDE_SECS,
    );
    if openness <= 0.0 {
        return;
    }

    let screen = ctx.screen_rect();

    // Deferred effects: the area closures hold shared borrows of the page
    // content, so menu mutations happen after both closures return.
    let mut scrim_clicked = false;
    let mut clicked_target: Option<String> = None;

    // Scrim sits above the page panels but below the sliding sheet. A
    // click anywhere on it closes the menu.
    egui::Area::new(egui::Id::new("menu-scrim"))
        .fixed_pos(screen.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 0.0, theme::MENU_SCRIM.gamma_multiply(openness));
            if response.clicked() {
                scrim_clicked = true;
            }
        });

    let panel_x = screen.max.x - openness * constants::MENU_PANEL_WIDTH_PX;

    // The sheet slides in from the right edge. Constraining is disabled so
    // the partially-open panel may hang past the window edge mid-animation.
    egui::Area::new(egui::Id::new("menu-panel"))
        .fixed_pos(egui::pos2(panel_x, screen.min.y))
        .order(egui::Order::Foreground)
        .constrain(false)
        .show(ctx, |ui| {
            let frame = egui::Frame::new()
                .fill(ui.visuals().panel_fill)
                .inner_margin(egui::Margin::same(20));
            frame.show(ui, |ui| {
                ui.set_width(constants::MENU_PANEL_WIDTH_PX - 40.0);
                ui.set_min_height(screen.height() - 40.0);

                if let Some(menu) = &state.page.menu {
                    ui.heading(&menu.title);
                }
                ui.separator();
                ui.add_space(8.0);

                for link in &state.page.nav_links {
                    let enabled = link.target.is_some();
                    let button = egui::Button::new(egui::RichText::new(&link.label).size(15.0))
                        .frame(false);
                    if ui.add_enabled(enabled, button).clicked() {
                        clicked_target.clone_from(&link.target);
                    }
                    ui.add_space(4.0);
                }
            });
        });

    if scrim_clicked {
        state.menu.close();
    }
    if let Some(target) = clicked_target {
        state.menu.link_selected();
        state.start_anchor_scroll(&target, now);
    }
}
