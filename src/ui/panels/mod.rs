// PagePulse - ui/panels/mod.rs

pub mod forms;
pub mod menu;
pub mod navbar;
pub mod notices;
pub mod page;
