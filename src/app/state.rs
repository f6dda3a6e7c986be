// PagePulse - app/state.rs
//
// Application state: the loaded page, every interaction controller, and
// the form field values. Owned by the eframe::App implementation; the
// UI layer borrows what it needs each frame.

use crate::core::content::{PageDefinition, SectionRole};
use crate::core::form::{FormController, FormKind};
use crate::core::menu::MenuController;
use crate::core::navbar::NavbarController;
use crate::core::notice::NoticeCenter;
use crate::core::reveal::RevealController;
use crate::core::scrollto::ScrollAnimator;
use std::collections::HashMap;
use std::time::Instant;

/// Field values for the signup form.
#[derive(Debug, Clone)]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roll_number: String,
    pub department: String,
    /// Year of study, 1-4.
    pub year: u8,
    pub password1: String,
    pub password2: String,
}

impl Default for SignupFields {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            roll_number: String::new(),
            department: "Computer Science & Engineering".to_string(),
            year: 1,
            password1: String::new(),
            password2: String::new(),
        }
    }
}

impl SignupFields {
    /// First problem that blocks submission, if any.
    pub fn validation_error(&self) -> Option<&'static str> {
        let required = [
            &self.username,
            &self.email,
            &self.first_name,
            &self.last_name,
            &self.roll_number,
            &self.password1,
            &self.password2,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Some("Please fill in all required fields.");
        }
        if self.password1 != self.password2 {
            return Some("Passwords do not match.");
        }
        None
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Field values for the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn validation_error(&self) -> Option<&'static str> {
        let required = [&self.name, &self.email, &self.subject, &self.message];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Some("Please fill in all required fields.");
        }
        None
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// The page being shown.
    pub page: PageDefinition,

    // -- Interaction controllers --
    pub menu: MenuController,
    pub navbar: NavbarController,
    pub reveal: RevealController,
    pub scroller: ScrollAnimator,
    pub notices: NoticeCenter,
    pub signup_form: FormController,
    pub contact_form: FormController,

    // -- Form field values --
    pub signup_fields: SignupFields,
    pub contact_fields: ContactFields,

    /// Content-space y offset of each section's top edge, recorded while
    /// rendering. Anchor scrolls read last frame's positions, which is
    /// fine: the layout is stable between frames.
    pub anchor_positions: HashMap<String, f32>,

    /// Current scroll offset of the page scroll area.
    pub scroll_offset: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state for a loaded page and push its flash notices.
    ///
    /// `reveal_enabled` and `notice_visible_ms` come from the validated
    /// config; passing them as plain values keeps this layer free of the
    /// platform config types.
    ///
    /// Logs a wiring summary, so a page author can see at a glance which
    /// interactions their markup actually enabled.
    pub fn new(
        page: PageDefinition,
        reveal_enabled: bool,
        notice_visible_ms: u64,
        debug_mode: bool,
        now: Instant,
    ) -> Self {
        let mut state = Self {
            page: PageDefinition::default(),
            menu: MenuController::new(false),
            navbar: NavbarController::new(),
            reveal: RevealController::new(reveal_enabled),
            scroller: ScrollAnimator::new(),
            notices: NoticeCenter::new(notice_visible_ms),
            signup_form: FormController::new(FormKind::Signup),
            contact_form: FormController::new(FormKind::Contact),
            signup_fields: SignupFields::default(),
            contact_fields: ContactFields::default(),
            anchor_positions: HashMap::new(),
            scroll_offset: 0.0,
            debug_mode,
        };
        state.load_new_page(page, now);
        state
    }

    /// Swap in a different page and rewire the content-driven controllers
    /// around it. Config-derived settings (reveal enablement, notice
    /// timing) and live notices carry over; scroll position, form state,
    /// and reveal history reset with the content.
    pub fn load_new_page(&mut self, page: PageDefinition, now: Instant) {
        self.menu = MenuController::new(page.menu.is_some());
        self.navbar = NavbarController::new();
        self.scroller.cancel();
        self.anchor_positions.clear();
        self.scroll_offset = 0.0;

        self.reveal = RevealController::new(self.reveal.is_enabled());
        for section in &page.sections {
            self.reveal.register(&section.id);
            for idx in 0..section.cards.len() {
                self.reveal.register(&Self::card_reveal_id(&section.id, idx));
            }
        }

        self.signup_form = FormController::new(FormKind::Signup);
        self.contact_form = FormController::new(FormKind::Contact);
        self.signup_fields = SignupFields::default();
        self.contact_fields = ContactFields::default();

        for flash in &page.flashes {
            self.notices.push(flash.message.clone(), flash.kind, now);
        }

        let has_signup = page
            .sections
            .iter()
            .any(|s| s.role == SectionRole::FormSignup);
        let has_contact = page
            .sections
            .iter()
            .any(|s| s.role == SectionRole::FormContact);

        tracing::info!(
            title = %page.title,
            menu = page.menu.is_some(),
            nav_links = page.nav_links.len(),
            sections = page.sections.len(),
            revealable = self.reveal.registered_count(),
            signup_form = has_signup,
            contact_form = has_contact,
            flashes = page.flashes.len(),
            "Page interaction wiring complete"
        );

        self.page = page;
    }

    /// Reveal-tracking id for a card: scoped by its section so two card
    /// grids cannot collide.
    pub fn card_reveal_id(section_id: &str, index: usize) -> String {
        format!("{section_id}#card-{index}")
    }

    /// Start an animated scroll to a section anchor. Silently ignored
    /// when the section's position has not been recorded yet (nothing
    /// has rendered), with a warning so a broken anchor is diagnosable.
    pub fn start_anchor_scroll(&mut self, target: &str, now: Instant) {
        match self.anchor_positions.get(target) {
            Some(&y) => self.scroller.start(self.scroll_offset, y, now),
            None => {
                tracing::warn!(target, "Anchor position unknown; scroll ignored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content;
    use std::path::PathBuf;

    fn test_page() -> PageDefinition {
        let toml = r#"
[page]
title = "State Test"

[menu]

[[nav]]
label = "Wall"
target = "wall"

[[section]]
id = "wall"
heading = "Wall"
role = "cards"

[[section.card]]
title = "One"

[[section.card]]
title = "Two"

[[flash]]
message = "hello"
kind = "info"
"#;
        let path = PathBuf::from("state-test.toml");
        let doc = content::parse_page_toml(toml, &path).unwrap();
        content::validate_page(doc).unwrap()
    }

    fn test_state() -> AppState {
        AppState::new(
            test_page(),
            true,
            crate::util::constants::NOTICE_VISIBLE_MS,
            false,
            Instant::now(),
        )
    }

    #[test]
    fn test_new_registers_reveals_and_flashes() {
        let state = test_state();

        // One section + two cards.
        assert_eq!(state.reveal.registered_count(), 3);
        assert!(state.menu.is_wired());
        assert_eq!(state.notices.len(), 1);
    }

    #[test]
    fn test_anchor_scroll_requires_recorded_position() {
        let mut state = test_state();

        let now = Instant::now();
        state.start_anchor_scroll("wall", now);
        assert!(!state.scroller.is_active(), "no position recorded yet");

        state.anchor_positions.insert("wall".to_string(), 640.0);
        state.start_anchor_scroll("wall", now);
        assert!(state.scroller.is_active());
    }

    #[test]
    fn test_signup_validation() {
        let mut fields = SignupFields::default();
        assert!(fields.validation_error().is_some());

        fields.username = "asha".into();
        fields.email = "asha@example.edu".into();
        fields.first_name = "Asha".into();
        fields.last_name = "Rao".into();
        fields.roll_number = "CS21B042".into();
        fields.password1 = "Password1!".into();
        fields.password2 = "Password1!".into();
        assert_eq!(fields.validation_error(), None);

        fields.password2 = "different".into();
        assert_eq!(fields.validation_error(), Some("Passwords do not match."));
    }

    #[test]
    fn test_contact_validation() {
        let mut fields = ContactFields::default();
        assert!(fields.validation_error().is_some());

        fields.name = "Dev".into();
        fields.email = "dev@example.com".into();
        fields.subject = "Hi".into();
        fields.message = "A question about the portal.".into();
        assert_eq!(fields.validation_error(), None);
    }

    #[test]
    fn test_signup_clear_restores_defaults() {
        let mut fields = SignupFields {
            username: "x".into(),
            department: "Physics".into(),
            year: 3,
            ..SignupFields::default()
        };
        fields.clear();
        assert_eq!(fields.username, "");
        assert_eq!(fields.department, "Computer Science & Engineering");
        assert_eq!(fields.year, 1);
    }

    #[test]
    fn test_card_reveal_ids_are_scoped() {
        assert_eq!(AppState::card_reveal_id("wall", 0), "wall#card-0");
        assert_ne!(
            AppState::card_reveal_id("a", 1),
            AppState::card_reveal_id("b", 1)
        );
    }

    #[test]
    fn test_load_new_page_rewires_controllers() {
        let mut state = test_state();
        let now = Instant::now();

        // Dirty the session: open menu, scroll down, half-fill a form.
        state.menu.toggle();
        state.scroll_offset = 900.0;
        state.anchor_positions.insert("wall".to_string(), 640.0);
        state.signup_fields.username = "draft".to_string();

        let toml = r#"
[page]
title = "Second Page"

[[section]]
id = "intro"
heading = "Intro"
"#;
        let path = PathBuf::from("second.toml");
        let doc = content::parse_page_toml(toml, &path).unwrap();
        let page = content::validate_page(doc).unwrap();

        state.load_new_page(page, now);

        assert_eq!(state.page.title, "Second Page");
        assert!(!state.menu.is_wired(), "new page has no menu");
        assert_eq!(state.scroll_offset, 0.0);
        assert!(state.anchor_positions.is_empty());
        assert!(state.signup_fields.username.is_empty());
        assert_eq!(state.reveal.registered_count(), 1);
        // The first page's flash is still live; the new page had none.
        assert_eq!(state.notices.len(), 1);
    }
}
