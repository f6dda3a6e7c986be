// PagePulse - core/mod.rs
//
// Core interaction logic and page model.
// Dependencies: standard library only (plus serde derives on the model).
// Must NOT depend on: ui, platform, app, or any I/O crate directly.
// Controllers take the current `Instant` as a parameter, never read the
// clock themselves, so every timing behaviour is testable without sleeping.

pub mod content;
pub mod ease;
pub mod form;
pub mod menu;
pub mod navbar;
pub mod notice;
pub mod reveal;
pub mod scrollto;
pub mod strength;
