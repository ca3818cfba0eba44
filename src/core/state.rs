//! # Navigation State
//!
//! Core navigation state for the panel. This module contains domain logic
//! only - no TUI-specific types. Scroll offsets, cursors and hit regions live
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── registry: Arc<Registry>       // sections → categories (read-only)
//! ├── current: Selection            // what the content pane shows
//! ├── expanded: ExpandedSections    // per-section accordion flags
//! ├── panel_open: bool              // mobile drawer visibility
//! ├── footer_open: bool             // footer tray visibility
//! ├── variant: Variant              // desktop panel or mobile drawer
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::links::QuickLink;
use crate::core::registry::Registry;

/// Which presentation the panel is currently using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Always-visible side column. Expanding a section scrolls it into view.
    Desktop,
    /// Drawer shown over the content; the list grows inline, no scrolling.
    Mobile,
}

impl Variant {
    /// Compact variants fold the footer links into a tray.
    pub fn is_compact(self) -> bool {
        matches!(self, Variant::Mobile)
    }
}

/// The currently selected navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    QuickLink(QuickLink),
    Category(String),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::QuickLink(QuickLink::Home)
    }
}

impl Selection {
    /// Parse a raw key, mapping the reserved sentinels to quick links.
    pub fn from_key(key: &str) -> Self {
        match QuickLink::from_sentinel(key) {
            Some(link) => Selection::QuickLink(link),
            None => Selection::Category(key.to_string()),
        }
    }

    /// The raw value a router would see: a category key or a sentinel.
    pub fn key(&self) -> &str {
        match self {
            Selection::QuickLink(link) => link.sentinel(),
            Selection::Category(key) => key,
        }
    }

    pub fn is_category(&self, key: &str) -> bool {
        matches!(self, Selection::Category(k) if k == key)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-section expanded flags. A missing entry reads as collapsed.
/// Entries are only ever flipped, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections {
    flags: HashMap<String, bool>,
}

impl ExpandedSections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.flags.get(section).copied().unwrap_or(false)
    }

    /// Raw entry, distinguishing "absent" from "collapsed".
    pub fn get(&self, section: &str) -> Option<bool> {
        self.flags.get(section).copied()
    }

    pub fn expand(&mut self, section: &str) {
        self.flags.insert(section.to_string(), true);
    }

    /// Flip a section's flag and return the new value.
    pub fn toggle(&mut self, section: &str) -> bool {
        let flag = self.flags.entry(section.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Set every recorded entry to collapsed, keeping the keys.
    pub fn collapse_all(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = false;
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(name, flag)| (name.as_str(), *flag))
    }
}

pub struct App {
    pub registry: Arc<Registry>,
    pub current: Selection,
    pub expanded: ExpandedSections,
    pub panel_open: bool,
    pub footer_open: bool,
    pub variant: Variant,
    pub status_message: String,
}

impl App {
    /// Create the initial state. A category selection pre-expands its
    /// section so the panel opens showing where the reader is.
    pub fn new(registry: Arc<Registry>, variant: Variant, initial: Selection) -> Self {
        let mut expanded = ExpandedSections::new();
        if let Selection::Category(ref key) = initial
            && let Some(section) = registry.section_of(key)
        {
            debug!("Initial category '{}' expands section '{}'", key, section.name);
            expanded.expand(&section.name);
        }

        Self {
            registry,
            current: initial,
            expanded,
            panel_open: false,
            footer_open: false,
            variant,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig, variant: Variant) -> Self {
        Self::new(
            Arc::new(config.registry.clone()),
            variant,
            Selection::from_key(&config.initial_category),
        )
    }

    /// Human-readable trail for the current selection, e.g. `News › World`.
    pub fn breadcrumb(&self) -> String {
        match &self.current {
            Selection::QuickLink(link) => link.label().to_string(),
            Selection::Category(key) => match self.registry.category(key) {
                Some((section, cat)) => format!("{} › {}", section.name, cat.name),
                None => key.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_registry};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app(Variant::Desktop);
        assert_eq!(app.current, Selection::QuickLink(QuickLink::Home));
        assert!(!app.panel_open);
        assert!(!app.footer_open);
        assert!(app.expanded.is_empty());
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_initial_category_expands_its_section() {
        let app = App::new(
            Arc::new(test_registry()),
            Variant::Mobile,
            Selection::from_key("nfl"),
        );
        assert_eq!(app.current, Selection::Category("nfl".to_string()));
        assert!(app.expanded.is_expanded("Sports"));
        assert!(!app.expanded.is_expanded("World"));
        assert!(!app.panel_open);
    }

    #[test]
    fn test_initial_sentinel_leaves_sections_collapsed() {
        let app = App::new(
            Arc::new(test_registry()),
            Variant::Desktop,
            Selection::from_key("mostviewed"),
        );
        assert_eq!(app.current, Selection::QuickLink(QuickLink::MostViewed));
        assert!(app.expanded.is_empty());
    }

    #[test]
    fn test_initial_unknown_category_is_kept() {
        let app = App::new(
            Arc::new(test_registry()),
            Variant::Desktop,
            Selection::from_key("missing"),
        );
        assert_eq!(app.current.key(), "missing");
        assert!(app.expanded.is_empty());
    }

    #[test]
    fn test_expanded_sections_toggle_and_collapse() {
        let mut expanded = ExpandedSections::new();
        assert_eq!(expanded.get("World"), None);
        assert!(expanded.toggle("World"));
        assert!(!expanded.toggle("World"));
        expanded.expand("Sports");
        expanded.collapse_all();
        assert_eq!(expanded.get("World"), Some(false));
        assert_eq!(expanded.get("Sports"), Some(false));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_breadcrumb() {
        let mut app = test_app(Variant::Desktop);
        assert_eq!(app.breadcrumb(), "HOME");
        app.current = Selection::from_key("europe");
        assert_eq!(app.breadcrumb(), "World › Europe");
        app.current = Selection::from_key("unlisted");
        assert_eq!(app.breadcrumb(), "unlisted");
    }
}
