// PagePulse - core/content.rs
//
// Page definition loading and validation.
// Core layer: accepts TOML strings, never touches the filesystem.
// I/O is handled by app::page_loader which feeds content here.
//
// A page definition is declarative markup: a title block, an optional
// collapsible menu, nav links, a list of sections, and optional flash
// notices shown once at startup. Section ids double as anchor targets
// for the smooth-scroll controller, so their grammar is validated here.

use crate::core::notice::NoticeKind;
use crate::util::constants;
use crate::util::error::ContentError;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML page definition as deserialized from a .toml file.
/// This is validated and compiled into a `PageDefinition` for runtime use.
#[derive(Debug, Deserialize)]
pub struct PageDocument {
    pub page: PageMetaDef,
    #[serde(default)]
    pub menu: Option<MenuDef>,
    #[serde(default, rename = "nav")]
    pub nav_links: Vec<NavLinkDef>,
    #[serde(default, rename = "section")]
    pub sections: Vec<SectionDef>,
    #[serde(default, rename = "flash")]
    pub flashes: Vec<FlashDef>,
}

#[derive(Debug, Deserialize)]
pub struct PageMetaDef {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
}

/// Presence of a `[menu]` block declares that the page wants the
/// collapsible slide-in menu. Pages without one get inline nav only.
#[derive(Debug, Deserialize)]
pub struct MenuDef {
    /// Heading shown at the top of the slide-in panel.
    /// Falls back to the page title when empty.
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct NavLinkDef {
    pub label: String,
    /// Section id this link scrolls to. Omitted means the link is inert.
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SectionDef {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub role: SectionRole,
    #[serde(default, rename = "stat")]
    pub stats: Vec<StatDef>,
    #[serde(default, rename = "card")]
    pub cards: Vec<CardDef>,
}

#[derive(Debug, Deserialize)]
pub struct StatDef {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct CardDef {
    pub title: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub prize: String,
    #[serde(default)]
    pub level: Option<CompetitionLevel>,
    #[serde(default)]
    pub blurb: String,
}

#[derive(Debug, Deserialize)]
pub struct FlashDef {
    pub message: String,
    #[serde(default)]
    pub kind: NoticeKind,
}

/// What a section renders as. Determines layout and which interaction
/// controllers the section participates in (forms get submit affordances,
/// cards get hover lift, everything gets scroll reveal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SectionRole {
    /// Grid of label/value stat tiles.
    Stats,
    /// Grid of achievement cards.
    Cards,
    /// Registration form with live password strength feedback.
    FormSignup,
    /// Contact form with a multi-line message field.
    FormContact,
    /// Plain heading + body text.
    #[default]
    Prose,
}

/// Competition level badge shown on achievement cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompetitionLevel {
    College,
    University,
    State,
    National,
    International,
}

impl CompetitionLevel {
    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::College => "College",
            Self::University => "University",
            Self::State => "State",
            Self::National => "National",
            Self::International => "International",
        }
    }
}

// =============================================================================
// Compiled runtime model
// =============================================================================

/// Validated, runtime-ready page definition.
#[derive(Debug, Clone, Default)]
pub struct PageDefinition {
    pub title: String,
    pub tagline: String,
    /// `Some` when the page declares a collapsible menu.
    pub menu: Option<MenuSpec>,
    pub nav_links: Vec<NavLink>,
    pub sections: Vec<Section>,
    /// Flash notices pushed into the notice stack once at startup.
    pub flashes: Vec<FlashNotice>,
}

impl PageDefinition {
    /// Look up a section by its anchor id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct MenuSpec {
    pub title: String,
}

/// A nav link with its target resolved against the page's sections.
/// `target` is `None` for inert links: either the author omitted the
/// target or it named a section that does not exist.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub target: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub role: SectionRole,
    pub stats: Vec<StatItem>,
    pub cards: Vec<AchievementCard>,
}

#[derive(Debug, Clone)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct AchievementCard {
    pub title: String,
    pub event: String,
    pub prize: String,
    pub level: Option<CompetitionLevel>,
    pub blurb: String,
}

#[derive(Debug, Clone)]
pub struct FlashNotice {
    pub message: String,
    pub kind: NoticeKind,
}

// =============================================================================
// Page validation and compilation
// =============================================================================

/// Parse a TOML string into a `PageDocument`.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_page_toml(
    toml_content: &str,
    source_path: &PathBuf,
) -> Result<PageDocument, ContentError> {
    toml::from_str(toml_content).map_err(|e| ContentError::TomlParse {
        path: source_path.clone(),
        source: e,
    })
}

/// Validate a `PageDocument` and compile it into a runtime `PageDefinition`.
///
/// Validates:
/// - Required fields are present and non-empty
/// - Section ids match the anchor grammar and are unique
/// - Section, nav, stat, card, and flash counts are within limits
///
/// Nav links whose target names no section are degraded to inert links
/// with a warning rather than rejected, so a stale link cannot take the
/// whole page down.
pub fn validate_page(doc: PageDocument) -> Result<PageDefinition, ContentError> {
    if doc.page.title.trim().is_empty() {
        return Err(ContentError::EmptyField {
            owner: "page".to_string(),
            field: "title",
        });
    }

    if doc.sections.len() > constants::MAX_SECTIONS {
        return Err(ContentError::TooManySections {
            count: doc.sections.len(),
            max: constants::MAX_SECTIONS,
        });
    }
    if doc.nav_links.len() > constants::MAX_NAV_LINKS {
        return Err(ContentError::TooManyItems {
            owner: "page".to_string(),
            kind: "nav links",
            count: doc.nav_links.len(),
            max: constants::MAX_NAV_LINKS,
        });
    }
    if doc.flashes.len() > constants::MAX_FLASH_NOTICES {
        return Err(ContentError::TooManyItems {
            owner: "page".to_string(),
            kind: "flash notices",
            count: doc.flashes.len(),
            max: constants::MAX_FLASH_NOTICES,
        });
    }

    // The id grammar is a compile-time constant; a failure here is a bug,
    // not bad input, so it is mapped to the invalid-id error rather than
    // unwrapped.
    let id_pattern = Regex::new(constants::SECTION_ID_PATTERN).map_err(|_| {
        ContentError::InvalidSectionId {
            id: constants::SECTION_ID_PATTERN.to_string(),
        }
    })?;

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for section in &doc.sections {
        if section.id.len() > constants::MAX_SECTION_ID_LENGTH
            || !id_pattern.is_match(&section.id)
        {
            return Err(ContentError::InvalidSectionId {
                id: section.id.clone(),
            });
        }
        if !seen_ids.insert(&section.id) {
            return Err(ContentError::DuplicateSectionId {
                id: section.id.clone(),
            });
        }
        if section.heading.trim().is_empty() {
            return Err(ContentError::EmptyField {
                owner: section.id.clone(),
                field: "heading",
            });
        }
        if section.stats.len() > constants::MAX_STATS_PER_SECTION {
            return Err(ContentError::TooManyItems {
                owner: section.id.clone(),
                kind: "stats",
                count: section.stats.len(),
                max: constants::MAX_STATS_PER_SECTION,
            });
        }
        if section.cards.len() > constants::MAX_CARDS_PER_SECTION {
            return Err(ContentError::TooManyItems {
                owner: section.id.clone(),
                kind: "cards",
                count: section.cards.len(),
                max: constants::MAX_CARDS_PER_SECTION,
            });
        }
        for stat in &section.stats {
            if stat.label.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    owner: section.id.clone(),
                    field: "stat.label",
                });
            }
        }
        for card in &section.cards {
            if card.title.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    owner: section.id.clone(),
                    field: "card.title",
                });
            }
        }

        // Role/content mismatches degrade: the section still renders,
        // just without the grid it promised.
        let mismatch = match section.role {
            SectionRole::Stats => section.stats.is_empty(),
            SectionRole::Cards => section.cards.is_empty(),
            _ => false,
        };
        if mismatch {
            tracing::warn!(
                section_id = %section.id,
                role = ?section.role,
                "Section role declares a grid but the item list is empty"
            );
        }
    }

    for flash in &doc.flashes {
        if flash.message.trim().is_empty() {
            return Err(ContentError::EmptyField {
                owner: "flash".to_string(),
                field: "message",
            });
        }
    }

    // Resolve nav targets against the section ids. Unknown targets are
    // degraded to inert links so the rest of the page stays functional.
    let nav_links = doc
        .nav_links
        .into_iter()
        .map(|link| {
            let target = match link.target {
                Some(t) if seen_ids.contains(t.as_str()) => Some(t),
                Some(t) => {
                    tracing::warn!(
                        label = %link.label,
                        target = %t,
                        "Nav link targets an unknown section; link will be inert"
                    );
                    None
                }
                None => None,
            };
            NavLink {
                label: link.label,
                target,
            }
        })
        .collect();

    let menu = doc.menu.map(|m| MenuSpec {
        title: if m.title.trim().is_empty() {
            doc.page.title.clone()
        } else {
            m.title
        },
    });

    let sections = doc
        .sections
        .into_iter()
        .map(|s| Section {
            id: s.id,
            heading: s.heading,
            body: s.body,
            role: s.role,
            stats: s
                .stats
                .into_iter()
                .map(|st| StatItem {
                    label: st.label,
                    value: st.value,
                })
                .collect(),
            cards: s
                .cards
                .into_iter()
                .map(|c| AchievementCard {
                    title: c.title,
                    event: c.event,
                    prize: c.prize,
                    level: c.level,
                    blurb: c.blurb,
                })
                .collect(),
        })
        .collect();

    let flashes = doc
        .flashes
        .into_iter()
        .map(|fl| FlashNotice {
            message: fl.message,
            kind: fl.kind,
        })
        .collect();

    Ok(PageDefinition {
        title: doc.page.title,
        tagline: doc.page.tagline,
        menu,
        nav_links,
        sections,
        flashes,
    })
}

// =============================================================================
// Built-in page (embedded at compile time)
// =============================================================================

/// Embedded TOML content for the built-in showcase page.
pub fn builtin_page_source() -> &'static str {
    include_str!("../../pages/showcase.toml")
}

/// Load and validate the built-in showcase page.
///
/// A failure here is a build defect, not bad user input; the caller
/// decides whether to abort or degrade.
pub fn load_builtin_page() -> Result<PageDefinition, ContentError> {
    let path = PathBuf::from("<builtin>/showcase.toml");
    let doc = parse_page_toml(builtin_page_source(), &path)?;
    validate_page(doc)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PAGE_TOML: &str = r#"
[page]
title = "Test Portal"
tagline = "A page for the tests"

[menu]

[[nav]]
label = "Stats"
target = "stats"

[[nav]]
label = "Nowhere"
target = "missing-section"

[[nav]]
label = "Inert"

[[section]]
id = "stats"
heading = "By The Numbers"
role = "stats"

[[section.stat]]
label = "Members"
value = "120"

[[section.stat]]
label = "Awards"
value = "34"

[[section]]
id = "wall"
heading = "Achievement Wall"
role = "cards"

[[section.card]]
title = "Hackathon Winners"
event = "CodeStorm 2024"
prize = "First Prize"
level = "national"

[[section]]
id = "about"
heading = "About"
body = "Some prose."

[[flash]]
message = "Welcome back!"
kind = "success"
"#;

    #[test]
    fn test_parse_valid_page() {
        let path = PathBuf::from("test.toml");
        let doc = parse_page_toml(VALID_PAGE_TOML, &path).unwrap();
        assert_eq!(doc.page.title, "Test Portal");
        assert_eq!(doc.nav_links.len(), 3);
        assert_eq!(doc.sections.len(), 3);
        assert_eq!(doc.flashes.len(), 1);
    }

    #[test]
    fn test_compile_valid_page() {
        let path = PathBuf::from("test.toml");
        let doc = parse_page_toml(VALID_PAGE_TOML, &path).unwrap();
        let page = validate_page(doc).unwrap();

        assert_eq!(page.title, "Test Portal");
        assert_eq!(page.sections[0].role, SectionRole::Stats);
        assert_eq!(page.sections[0].stats.len(), 2);
        assert_eq!(page.sections[1].role, SectionRole::Cards);
        assert_eq!(
            page.sections[1].cards[0].level,
            Some(CompetitionLevel::National)
        );
        assert_eq!(page.sections[2].role, SectionRole::Prose);
        assert_eq!(page.flashes[0].kind, NoticeKind::Success);
    }

    #[test]
    fn test_menu_title_falls_back_to_page_title() {
        let path = PathBuf::from("test.toml");
        let doc = parse_page_toml(VALID_PAGE_TOML, &path).unwrap();
        let page = validate_page(doc).unwrap();
        assert_eq!(page.menu.as_ref().unwrap().title, "Test Portal");
    }

    #[test]
    fn test_page_without_menu_block() {
        let toml = r#"
[page]
title = "Bare"
"#;
        let path = PathBuf::from("bare.toml");
        let doc = parse_page_toml(toml, &path).unwrap();
        let page = validate_page(doc).unwrap();
        assert!(page.menu.is_none());
        assert!(page.nav_links.is_empty());
        assert!(page.sections.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let toml = r#"
[page]
title = "  "
"#;
        let path = PathBuf::from("bad.toml");
        let doc = parse_page_toml(toml, &path).unwrap();
        let result = validate_page(doc);
        assert!(result.is_err());
        match result.unwrap_err() {
            ContentError::EmptyField { field, .. } => assert_eq!(field, "title"),
            other => panic!("Expected EmptyField, got: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_section_id() {
        let toml = r#"
[page]
title = "Bad Ids"

[[section]]
id = "9lives"
heading = "Leading digit"
"#;
        let path = PathBuf::from("bad.toml");
        let doc = parse_page_toml(toml, &path).unwrap();
        let result = validate_page(doc);
        assert!(matches!(
            result.unwrap_err(),
            ContentError::InvalidSectionId { .. }
        ));
    }

    #[test]
    fn test_uppercase_section_id_rejected() {
        let toml = r#"
[page]
title = "Bad Ids"

[[section]]
id = "Stats"
heading = "Uppercase"
"#;
        let path = PathBuf::from("bad.toml");
        let doc = parse_page_toml(toml, &path).unwrap();
        assert!(matches!(
            validate_page(doc).unwrap_err(),
            ContentError::InvalidSectionId { .. }
        ));
    }

    #[test]
    fn test_duplicate_section_id() {
        let toml = r#"
[page]
title = "Dupes"

[[section]]
id = "twice"
heading = "First"

[[section]]
id = "twice"
heading = "Second"
"#;
        let path = PathBuf::from("bad.toml");
        let doc = parse_page_toml(toml, &path).unwrap();
        match validate_page(doc).unwrap_err() {
            ContentError::DuplicateSectionId { id } => assert_eq!(id, "twice"),
            other => panic!("Expected DuplicateSectionId, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_nav_target_degrades_to_inert() {
        let path = PathBuf::from("test.toml");
        let doc = parse_page_toml(VALID_PAGE_TOML, &path).unwrap();
        let page = validate_page(doc).unwrap();

        assert_eq!(page.nav_links[0].target.as_deref(), Some("stats"));
        assert_eq!(page.nav_links[1].target, None); // named a missing section
        assert_eq!(page.nav_links[2].target, None); // authored inert
    }

    #[test]
    fn test_too_many_sections() {
        let mut toml = String::from("[page]\ntitle = \"Big\"\n");
        for i in 0..constants::MAX_SECTIONS + 1 {
            toml.push_str(&format!(
                "\n[[section]]\nid = \"s-{i}\"\nheading = \"S{i}\"\n"
            ));
        }
        let path = PathBuf::from("big.toml");
        let doc = parse_page_toml(&toml, &path).unwrap();
        assert!(matches!(
            validate_page(doc).unwrap_err(),
            ContentError::TooManySections { .. }
        ));
    }

    #[test]
    fn test_section_lookup() {
        let path = PathBuf::from("test.toml");
        let doc = parse_page_toml(VALID_PAGE_TOML, &path).unwrap();
        let page = validate_page(doc).unwrap();
        assert!(page.section("stats").is_some());
        assert!(page.section("nope").is_none());
    }

    #[test]
    fn test_load_builtin_page() {
        let page = load_builtin_page().expect("built-in page must validate");
        assert!(!page.sections.is_empty(), "built-in page has no sections");
        assert!(page.menu.is_some(), "built-in page should declare a menu");
        // Every nav link on the built-in page must resolve.
        assert!(page
            .nav_links
            .iter()
            .all(|link| link.target.is_some()));
    }
}
