// PagePulse - app/mod.rs
//
// Application layer: orchestration, state management, page loading.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod page_loader;
pub mod state;
