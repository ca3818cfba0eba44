//! # Category Registry
//!
//! Ordered mapping from section name to its ordered categories. Defined once
//! at startup (built-in or from `[[sections]]` in the config file) and never
//! mutated afterwards.
//!
//! ```text
//! Registry
//! ├── Section "News"
//! │   ├── Category { key: "world", name: "World" }
//! │   └── Category { key: "us", name: "U.S." }
//! └── Section "Arts"
//!     └── ...
//! ```
//!
//! Category keys are expected to be unique across the whole registry. This is
//! not enforced: lookups resolve to the first section in display order.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single selectable navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub key: String,
    pub name: String,
}

impl Category {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}

/// A named, collapsible group of categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Section {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Section {
    pub fn new(name: &str, categories: Vec<Category>) -> Self {
        Self {
            name: name.to_string(),
            categories,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|cat| cat.key == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    sections: Vec<Section>,
}

impl Registry {
    /// Build a registry. Duplicate section names or category keys are logged;
    /// the data is kept as given.
    pub fn new(sections: Vec<Section>) -> Self {
        let registry = Self { sections };

        let mut seen = HashSet::new();
        for section in &registry.sections {
            if !seen.insert(section.name.as_str()) {
                warn!("Duplicate section name in registry: {}", section.name);
            }
        }
        for key in registry.duplicate_keys() {
            warn!(
                "Category key '{}' appears in more than one section; the first one wins",
                key
            );
        }

        registry
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// First section, in display order, whose category list contains `key`.
    pub fn section_of(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(key))
    }

    /// Resolve a category key to its section and entry.
    pub fn category(&self, key: &str) -> Option<(&Section, &Category)> {
        self.sections.iter().find_map(|section| {
            section
                .categories
                .iter()
                .find(|cat| cat.key == key)
                .map(|cat| (section, cat))
        })
    }

    /// Category keys that occur more than once, in first-seen order.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for cat in self.sections.iter().flat_map(|s| s.categories.iter()) {
            if !seen.insert(cat.key.as_str()) && !dupes.contains(&cat.key.as_str()) {
                dupes.push(cat.key.as_str());
            }
        }
        dupes
    }
}

/// The built-in section layout.
pub fn default_registry() -> Registry {
    Registry::new(vec![
        Section::new(
            "News",
            vec![
                Category::new("world", "World"),
                Category::new("us", "U.S."),
                Category::new("politics", "Politics"),
                Category::new("nyregion", "New York"),
                Category::new("business", "Business"),
                Category::new("technology", "Technology"),
                Category::new("science", "Science"),
                Category::new("health", "Health"),
                Category::new("sports", "Sports"),
                Category::new("obituaries", "Obituaries"),
            ],
        ),
        Section::new(
            "Opinion",
            vec![
                Category::new("opinion", "Today's Opinion"),
                Category::new("sundayreview", "Sunday Review"),
            ],
        ),
        Section::new(
            "Arts",
            vec![
                Category::new("arts", "Today's Arts"),
                Category::new("books", "Books"),
                Category::new("movies", "Movies"),
                Category::new("theater", "Theater"),
                Category::new("t-magazine", "T Magazine"),
            ],
        ),
        Section::new(
            "Lifestyle",
            vec![
                Category::new("fashion", "Style"),
                Category::new("food", "Food"),
                Category::new("travel", "Travel"),
                Category::new("realestate", "Real Estate"),
                Category::new("automobiles", "Automobiles"),
            ],
        ),
        Section::new(
            "More",
            vec![
                Category::new("magazine", "Magazine"),
                Category::new("upshot", "The Upshot"),
                Category::new("insider", "Times Insider"),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_registry;

    #[test]
    fn test_section_of_finds_containing_section() {
        let registry = test_registry();
        assert_eq!(registry.section_of("nfl").map(|s| s.name.as_str()), Some("Sports"));
        assert_eq!(registry.section_of("europe").map(|s| s.name.as_str()), Some("World"));
        assert!(registry.section_of("nope").is_none());
    }

    #[test]
    fn test_duplicate_key_resolves_to_first_section() {
        let registry = Registry::new(vec![
            Section::new("A", vec![Category::new("x", "X in A")]),
            Section::new("B", vec![Category::new("x", "X in B")]),
        ]);
        assert_eq!(registry.section_of("x").map(|s| s.name.as_str()), Some("A"));
        assert_eq!(registry.category("x").map(|(_, c)| c.name.as_str()), Some("X in A"));
        assert_eq!(registry.duplicate_keys(), vec!["x"]);
    }

    #[test]
    fn test_default_registry_has_unique_keys() {
        let registry = default_registry();
        assert!(!registry.is_empty());
        assert!(registry.duplicate_keys().is_empty());
        assert!(registry.contains_section("News"));
        assert!(!registry.contains_section("homepage"));
    }

    #[test]
    fn test_sections_keep_declaration_order() {
        let registry = default_registry();
        let names: Vec<&str> = registry
            .sections()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["News", "Opinion", "Arts", "Lifestyle", "More"]);
    }

    #[test]
    fn test_section_parses_from_toml() {
        let section: Section = toml::from_str(
            r#"
name = "World"
categories = [{ key = "europe", name = "Europe" }]
"#,
        )
        .unwrap();
        assert_eq!(section.name, "World");
        assert_eq!(section.categories, vec![Category::new("europe", "Europe")]);
    }
}
