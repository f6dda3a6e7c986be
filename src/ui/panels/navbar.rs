// PagePulse - ui/panels/navbar.rs
//
// Top navigation bar with scroll-aware visibility.
// Wide windows show the nav links inline; narrow windows collapse them
// behind a hamburger button that opens the slide-in menu. The bar itself
// animates away when `NavbarController` decides it should hide.

use std::time::Instant;

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the top bar. Hidden bars animate out through `show_animated`
/// rather than disappearing abruptly.
pub fn render(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let visible = state.navbar.is_visible();
    let wide = ctx.screen_rect().width() >= constants::MENU_BREAKPOINT_PX;

    // Clicks are collected here and applied after the panel closure so the
    // closure only needs a shared borrow of the page content.
    let mut clicked_target: Option<String> = None;
    let mut hamburger_clicked = false;

    let frame = egui::Frame::new()
        .fill(theme::NAVBAR_BG)
        .inner_margin(egui::Margin::symmetric(16, 0));

    egui::TopBottomPanel::top("navbar")
        .exact_height(theme::NAVBAR_HEIGHT)
        .frame(frame)
        .show_animated(ctx, visible, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    egui::RichText::new(&state.page.title)
                        .size(17.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if wide {
                        // Right-to-left layout: iterate reversed so the links
                        // read left-to-right on screen.
                        for link in state.page.nav_links.iter().rev() {
                            let enabled = link.target.is_some();
                            let button = egui::Button::new(
                                egui::RichText::new(&link.label).color(theme::NAVBAR_TEXT),
                            )
                            .frame(false);
                            if ui.add_enabled(enabled, button).clicked() {
                                clicked_target.clone_from(&link.target);
                            }
                        }
                    } else if state.menu.is_wired() {
                        let button = egui::Button::new(
                            egui::RichText::new("\u{2630}")
                                .size(18.0)
                                .color(egui::Color32::WHITE),
                        )
                        .frame(false);
                        if ui.add(button).clicked() {
                            hamburger_clicked = true;
                        }
                    }
                });
            });
        });

    if let Some(target) = clicked_target {
        state.start_anchor_scroll(&target, now);
    }
    if hamburger_clicked {
        state.menu.toggle();
    }
}
