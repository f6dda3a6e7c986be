// PagePulse - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Every behavioural threshold in the interaction layer lives here; nothing
// is hard-coded at the point of use.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PagePulse";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PagePulse";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Navbar visibility
// =============================================================================

/// Scroll offset in logical pixels below which the navbar is always shown.
/// Above the threshold, scroll direction decides: down hides, up shows.
pub const NAVBAR_HIDE_THRESHOLD_PX: f32 = 100.0;

// =============================================================================
// Scroll reveal
// =============================================================================

/// Fraction of a revealable element's height that must be inside the biased
/// viewport before the reveal animation fires.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

/// Upward bias applied to the viewport's bottom edge when testing reveal
/// visibility. An element must rise this far past the physical bottom of the
/// viewport before it counts as visible, so reveals start slightly after the
/// element enters the window rather than at the very first pixel.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Duration of the reveal fade/slide-up animation in seconds.
pub const REVEAL_ANIM_SECS: f32 = 0.6;

/// Distance in logical pixels a revealing element rises from.
pub const REVEAL_SLIDE_PX: f32 = 30.0;

// =============================================================================
// Menu
// =============================================================================

/// Window width in logical pixels below which the inline nav collapses into
/// the hamburger trigger + slide-in panel.
pub const MENU_BREAKPOINT_PX: f32 = 768.0;

/// Width of the slide-in menu panel in logical pixels.
pub const MENU_PANEL_WIDTH_PX: f32 = 280.0;

/// Duration of the panel slide-in/out animation in seconds.
pub const MENU_SLIDE_SECS: f32 = 0.25;

// =============================================================================
// Smooth anchor scrolling
// =============================================================================

/// Duration of an animated scroll to an anchor target in seconds.
pub const SCROLL_ANIM_SECS: f32 = 0.4;

// =============================================================================
// Transient notices
// =============================================================================

/// How long a notice stays fully visible before it starts fading out (ms).
pub const NOTICE_VISIBLE_MS: u64 = 5_000;

/// Duration of the notice fade/slide-out transition (ms). After this the
/// notice is removed from the stack entirely.
pub const NOTICE_FADE_MS: u64 = 300;

/// Minimum user-configurable visible duration (ms).
pub const MIN_NOTICE_VISIBLE_MS: u64 = 1_000;

/// Maximum user-configurable visible duration (ms).
pub const MAX_NOTICE_VISIBLE_MS: u64 = 60_000;

/// Maximum width of a notice banner in logical pixels.
pub const NOTICE_MAX_WIDTH_PX: f32 = 300.0;

/// Offset of the notice stack from the top-right window corner.
pub const NOTICE_MARGIN_PX: f32 = 20.0;

/// Distance a notice slides upward while fading out.
pub const NOTICE_SLIDE_PX: f32 = 20.0;

/// Hard cap on simultaneously live notices. When the cap is reached the
/// oldest notice is dropped immediately so a notification storm cannot grow
/// the stack without bound.
pub const MAX_ACTIVE_NOTICES: usize = 16;

// =============================================================================
// Forms
// =============================================================================

/// Busy label shown on any submit control while its form is submitting.
pub const SUBMIT_BUSY_LABEL: &str = "Processing...";

/// Busy label for the contact form's submit control specifically.
pub const CONTACT_BUSY_LABEL: &str = "Sending...";

/// Cosmetic settle delay between a submission starting and completing (ms).
/// There is no real transport behind the forms; the delay makes the busy
/// affordance observable before the success notice appears.
pub const FORM_SETTLE_MS: u64 = 900;

/// Success notice shown when the contact form settles.
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We will get back to you soon.";

/// Success notice shown when the signup form settles.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully. Welcome aboard!";

/// Minimum height of a multi-line text field, in rows.
pub const TEXTAREA_MIN_ROWS: usize = 3;

// =============================================================================
// Password strength
// =============================================================================

/// Minimum password length for the length predicate to count.
pub const STRENGTH_MIN_LENGTH: usize = 8;

/// Highest reachable strength score (all four predicates matched).
pub const STRENGTH_MAX_SCORE: u8 = 4;

// =============================================================================
// Card hover
// =============================================================================

/// Distance an achievement card lifts while hovered.
pub const CARD_HOVER_LIFT_PX: f32 = 10.0;

/// Duration of the hover lift animation in seconds.
pub const CARD_HOVER_SECS: f32 = 0.15;

// =============================================================================
// Page definition limits
// =============================================================================

/// Maximum size of a page definition TOML file in bytes.
pub const MAX_PAGE_FILE_SIZE: u64 = 64 * 1024; // 64 KB

/// Maximum number of sections in a page definition.
pub const MAX_SECTIONS: usize = 32;

/// Maximum number of nav links in a page definition.
pub const MAX_NAV_LINKS: usize = 16;

/// Maximum number of stat items in a single section.
pub const MAX_STATS_PER_SECTION: usize = 16;

/// Maximum number of achievement cards in a single section.
pub const MAX_CARDS_PER_SECTION: usize = 64;

/// Maximum number of flash notices declared by a page definition.
pub const MAX_FLASH_NOTICES: usize = 8;

/// Pattern every section id must match: kebab-case, starting with a letter.
/// Section ids double as anchor targets (`#stats`), so the grammar is kept
/// deliberately narrow.
pub const SECTION_ID_PATTERN: &str = "^[a-z][a-z0-9-]*$";

/// Maximum length of a section id in characters.
pub const MAX_SECTION_ID_LENGTH: usize = 64;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Repaint interval while any animation is in flight (ms). Roughly one
/// frame at 60 Hz; egui coalesces duplicate requests.
pub const ANIM_REPAINT_MS: u64 = 16;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
