// PagePulse - ui/panels/page.rs
//
// Scrollable page body: hero, then one block per section.
// This panel owns the frame's scroll geometry. It feeds the glide
// animator's offset into the scroll area, reads the settled offset back
// out, and records section rectangles for the reveal controller and the
// anchor table. Sections and cards render through an opacity/rise pair
// so reveals slide up and fade in without shifting later layout.

use std::time::Instant;

use crate::app::state::AppState;
use crate::core::content::{AchievementCard, Section, SectionRole, StatItem};
use crate::core::reveal::RevealController;
use crate::ui::panels::forms;
use crate::ui::theme;
use crate::util::constants;

/// Render the page body and update scroll, reveal, and anchor state.
pub fn render(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    // Advancing the glide before the scroll area is built means the area
    // is told the new offset on the same frame it is computed.
    let glide_offset = state.scroller.offset_at(now);
    let scroll_enabled = !state.menu.scroll_locked();

    // Geometry observed this frame. The scroll area closure only fills
    // these; the controllers are updated once it has returned.
    let mut observations: Vec<(String, f32, f32)> = Vec::new();
    let mut anchors: Vec<(String, f32)> = Vec::new();
    let mut view_rect = egui::Rect::NOTHING;

    egui::CentralPanel::default().show(ctx, |ui| {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("page-scroll")
            .auto_shrink([false, false])
            .enable_scrolling(scroll_enabled);
        if let Some(offset) = glide_offset {
            area = area.vertical_scroll_offset(offset);
        }

        let output = area.show(ui, |ui| {
            view_rect = ui.clip_rect();
            let content_top = ui.cursor().top();

            hero(ui, &state.page.title, &state.page.tagline);

            for section in &state.page.sections {
                let section_top = ui.cursor().top();
                anchors.push((section.id.clone(), section_top - content_top));

                let pres = state.reveal.presentation(&section.id, now);
                ui.add_space(pres.rise);
                ui.scope(|ui| {
                    ui.multiply_opacity(pres.alpha);

                    ui.label(egui::RichText::new(&section.heading).size(22.0).strong());
                    ui.add_space(10.0);
                    if !section.body.is_empty() {
                        ui.label(&section.body);
                        ui.add_space(10.0);
                    }

                    match section.role {
                        SectionRole::Stats => stat_tiles(ui, &section.stats),
                        SectionRole::Cards => achievement_cards(
                            ui,
                            section,
                            &state.reveal,
                            &mut observations,
                            now,
                        ),
                        SectionRole::FormSignup => forms::render_signup(
                            ui,
                            &mut state.signup_fields,
                            &mut state.signup_form,
                            &mut state.notices,
                            now,
                        ),
                        SectionRole::FormContact => forms::render_contact(
                            ui,
                            &mut state.contact_fields,
                            &mut state.contact_form,
                            &mut state.notices,
                            now,
                        ),
                        SectionRole::Prose => {}
                    }
                });
                // The rise was paint-only; pull the cursor back so the next
                // section lays out as if nothing moved.
                ui.add_space(-pres.rise);

                let section_bottom = ui.cursor().top();
                observations.push((section.id.clone(), section_top, section_bottom));

                ui.add_space(theme::SECTION_SPACING);
            }
        });

        state.scroll_offset = output.state.offset.y;
    });

    for (id, top, bottom) in &observations {
        state
            .reveal
            .observe(id, *top, *bottom, view_rect.top(), view_rect.bottom(), now);
    }

    state.anchor_positions.clear();
    state.anchor_positions.extend(anchors);
}

/// Page title and tagline, centred with generous padding.
fn hero(ui: &mut egui::Ui, title: &str, tagline: &str) {
    ui.add_space(theme::HERO_PADDING);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(32.0).strong());
        if !tagline.is_empty() {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(tagline).size(16.0).weak());
        }
    });
    ui.add_space(theme::HERO_PADDING);
}

/// Row of stat tiles: big value over a small label.
fn stat_tiles(ui: &mut egui::Ui, stats: &[StatItem]) {
    ui.horizontal_wrapped(|ui| {
        for stat in stats {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(theme::STAT_TILE_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&stat.value).size(28.0).strong());
                        ui.label(egui::RichText::new(&stat.label).small().weak());
                    });
                });
        }
    });
}

/// Wrapped grid of achievement cards. Each card reveals independently and
/// lifts a few pixels while hovered. Lift headroom is reserved in the
/// allocation so a lifted card never paints over the row above.
fn achievement_cards(
    ui: &mut egui::Ui,
    section: &Section,
    reveal: &RevealController,
    observations: &mut Vec<(String, f32, f32)>,
    now: Instant,
) {
    ui.horizontal_wrapped(|ui| {
        for (index, card) in section.cards.iter().enumerate() {
            let reveal_id = AppState::card_reveal_id(&section.id, index);
            let pres = reveal.presentation(&reveal_id, now);

            let outer = egui::vec2(
                theme::CARD_WIDTH,
                theme::CARD_HEIGHT + constants::CARD_HOVER_LIFT_PX,
            );
            let (outer_rect, _) = ui.allocate_exact_size(outer, egui::Sense::hover());
            observations.push((reveal_id, outer_rect.top(), outer_rect.bottom()));

            if !ui.is_rect_visible(outer_rect) {
                continue;
            }

            // Hover is read from the previous frame: the lift moves the
            // card, and reacting to this frame's pointer position would
            // feed back into its own hit test.
            let hover_id = egui::Id::new(("card-hover", &section.id, index));
            let hovered = ui
                .ctx()
                .data(|d| d.get_temp::<bool>(hover_id))
                .unwrap_or(false);
            let lift = ui.ctx().animate_bool_with_time(
                hover_id.with("anim"),
                hovered,
                constants::CARD_HOVER_SECS,
            ) * constants::CARD_HOVER_LIFT_PX;

            let card_rect = egui::Rect::from_min_size(
                egui::pos2(
                    outer_rect.left(),
                    outer_rect.top() + constants::CARD_HOVER_LIFT_PX - lift + pres.rise,
                ),
                egui::vec2(theme::CARD_WIDTH, theme::CARD_HEIGHT),
            );

            let mut card_ui = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(card_rect)
                    .layout(egui::Layout::top_down(egui::Align::Min)),
            );
            card_ui.multiply_opacity(pres.alpha);
            card_body(&mut card_ui, card, hovered);

            let over = ui.rect_contains_pointer(card_rect);
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, over));
        }
    });
}

fn card_body(ui: &mut egui::Ui, card: &AchievementCard, hovered: bool) {
    let stroke = if hovered {
        egui::Stroke::new(1.5, ui.visuals().widgets.hovered.fg_stroke.color)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .stroke(stroke)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(
                theme::CARD_WIDTH - 24.0,
                theme::CARD_HEIGHT - 24.0,
            ));
            ui.set_max_width(theme::CARD_WIDTH - 24.0);

            if let Some(level) = card.level {
                ui.label(
                    egui::RichText::new(level.label())
                        .small()
                        .strong()
                        .color(theme::level_colour(level)),
                );
            }
            ui.label(egui::RichText::new(&card.title).strong());
            if !card.event.is_empty() {
                ui.label(egui::RichText::new(&card.event).small());
            }
            if !card.prize.is_empty() {
                ui.label(
                    egui::RichText::new(&card.prize)
                        .small()
                        .color(egui::Color32::GOLD),
                );
            }
            if !card.blurb.is_empty() {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(&card.blurb).small().weak());
            }
        });
}
