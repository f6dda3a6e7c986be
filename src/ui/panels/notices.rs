// PagePulse - ui/panels/notices.rs
//
// Transient notice stack, anchored to the top-right corner.
// Each notice fades and drifts upward once its visible window ends; the
// dismiss button rewrites the deadline so the same fade path runs early.

use std::time::Instant;

use crate::core::notice::NoticeCenter;
use crate::ui::theme;
use crate::util::constants;

/// Render every live notice. Dismiss clicks are applied after the area
/// closure returns since the closure reads the notice list.
pub fn render(ctx: &egui::Context, notices: &mut NoticeCenter, now: Instant) {
    if notices.is_empty() {
        return;
    }

    let mut dismissed: Vec<u64> = Vec::new();

    egui::Area::new(egui::Id::new("notice-stack"))
        .anchor(
            egui::Align2::RIGHT_TOP,
            egui::vec2(-constants::NOTICE_MARGIN_PX, constants::NOTICE_MARGIN_PX),
        )
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notice in notices.notices() {
                let alpha = notice.alpha(now);
                let colour = theme::notice_colour(notice.kind);

                ui.add_space(-notice.slide(now));
                ui.scope(|ui| {
                    ui.multiply_opacity(alpha);
                    let frame = egui::Frame::new()
                        .fill(theme::notice_bg_colour(notice.kind))
                        .stroke(egui::Stroke::new(1.0, colour))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(10, 8));
                    frame.show(ui, |ui| {
                        ui.set_width(constants::NOTICE_MAX_WIDTH_PX);
                        ui.horizontal_top(|ui| {
                            ui.vertical(|ui| {
                                ui.set_width(constants::NOTICE_MAX_WIDTH_PX - 24.0);
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(&notice.message).color(colour),
                                    )
                                    .wrap(),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::TOP),
                                |ui| {
                                    let close = egui::Button::new(
                                        egui::RichText::new("\u{2715}").small().color(colour),
                                    )
                                    .frame(false);
                                    if ui.add(close).clicked() {
                                        dismissed.push(notice.id);
                                    }
                                },
                            );
                        });
                    });
                });
                ui.add_space(8.0);
            }
        });

    for id in dismissed {
        notices.dismiss(id, now);
    }
}
