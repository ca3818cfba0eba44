//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::registry::{Category, Registry, Section};
use crate::core::state::{App, Selection, Variant};

/// Two-section registry: World (europe, asia) and Sports (nfl, nba).
pub fn test_registry() -> Registry {
    Registry::new(vec![
        Section::new(
            "World",
            vec![Category::new("europe", "Europe"), Category::new("asia", "Asia")],
        ),
        Section::new(
            "Sports",
            vec![Category::new("nfl", "NFL"), Category::new("nba", "NBA")],
        ),
    ])
}

/// Creates a test App on the homepage with everything collapsed.
pub fn test_app(variant: Variant) -> App {
    App::new(Arc::new(test_registry()), variant, Selection::default())
}

/// Creates TUI state from an all-defaults config.
pub(crate) fn test_tui() -> crate::tui::TuiState {
    let config = crate::core::config::resolve(
        &crate::core::config::SidenavConfig::default(),
        Some(crate::LayoutMode::Auto),
        Some("homepage"),
    );
    let mut tui = crate::tui::TuiState::new(&config);
    tui.open_command = None;
    tui
}
