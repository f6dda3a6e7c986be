// PagePulse - ui/theme.rs
//
// Colour scheme, notice/badge colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::content::CompetitionLevel;
use crate::core::notice::NoticeKind;
use crate::core::strength::StrengthBand;
use egui::Color32;

/// Accent colour for a notice kind (border and heading text).
pub fn notice_colour(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Success => Color32::from_rgb(22, 163, 74),  // Green 600
        NoticeKind::Info => Color32::from_rgb(37, 99, 235),     // Blue 600
        NoticeKind::Warning => Color32::from_rgb(217, 119, 6),  // Amber 600
        NoticeKind::Error => Color32::from_rgb(220, 38, 38),    // Red 600
    }
}

/// Background fill for a notice banner (subtle tint of the accent).
pub fn notice_bg_colour(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Success => Color32::from_rgba_premultiplied(22, 163, 74, 30),
        NoticeKind::Info => Color32::from_rgba_premultiplied(37, 99, 235, 30),
        NoticeKind::Warning => Color32::from_rgba_premultiplied(217, 119, 6, 30),
        NoticeKind::Error => Color32::from_rgba_premultiplied(220, 38, 38, 30),
    }
}

/// Fill colour for the password strength meter.
pub fn strength_colour(band: StrengthBand) -> Color32 {
    match band {
        StrengthBand::Empty => Color32::TRANSPARENT,
        StrengthBand::Weak => Color32::from_rgb(220, 38, 38),   // Red 600
        StrengthBand::Medium => Color32::from_rgb(217, 119, 6), // Amber 600
        StrengthBand::Strong => Color32::from_rgb(22, 163, 74), // Green 600
    }
}

/// Badge colour for an achievement's competition level.
pub fn level_colour(level: CompetitionLevel) -> Color32 {
    match level {
        CompetitionLevel::College => Color32::from_rgb(107, 114, 128), // Gray 500
        CompetitionLevel::University => Color32::from_rgb(8, 145, 178), // Cyan 600
        CompetitionLevel::State => Color32::from_rgb(37, 99, 235),     // Blue 600
        CompetitionLevel::National => Color32::from_rgb(234, 88, 12),  // Orange 600
        CompetitionLevel::International => Color32::from_rgb(147, 51, 234), // Purple 600
    }
}

/// Navbar colours.
pub const NAVBAR_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const NAVBAR_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Scrim drawn over the page while the slide-in menu is open.
pub const MENU_SCRIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 100);

/// Layout constants.
pub const NAVBAR_HEIGHT: f32 = 44.0;
pub const HERO_PADDING: f32 = 48.0;
pub const SECTION_SPACING: f32 = 40.0;
pub const CARD_WIDTH: f32 = 220.0;
pub const CARD_HEIGHT: f32 = 150.0;
pub const STAT_TILE_WIDTH: f32 = 150.0;
pub const STRENGTH_METER_HEIGHT: f32 = 6.0;
pub const FORM_FIELD_WIDTH: f32 = 280.0;
