//! # Actions
//!
//! Everything the reader can do in the panel becomes an `Action`.
//! Clicks a category? That's `Action::SelectCategory(key)`.
//! Clicks a section header? That's `Action::ToggleSection(name)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable without a terminal: build an `App`, apply
//! actions, assert on fields.

use log::{debug, info, warn};

use crate::core::links::{OutboundLink, QuickLink};
use crate::core::state::{App, Selection, Variant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select a category by key and expand the section that holds it.
    SelectCategory(String),
    /// Select Home or Popular and collapse every section.
    SelectQuickLink(QuickLink),
    /// Flip one section's expanded flag.
    ToggleSection(String),
    /// Hamburger control for the mobile drawer.
    TogglePanel,
    /// Backdrop click or Esc on the open drawer.
    ClosePanel,
    ToggleFooter,
    CloseFooter,
    OpenLink(OutboundLink),
    Quit,
}

impl Action {
    /// Moving around the panel, as opposed to panel chrome or leaving.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Action::SelectCategory(_) | Action::SelectQuickLink(_) | Action::ToggleSection(_)
        )
    }
}

/// Work the adapter has to do after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Scroll the panel so this section's header is at the top, once the
    /// next layout pass has measured the expanded section.
    ScrollToSection(String),
    OpenUrl(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    if action.is_navigation() {
        app.status_message.clear();
    }
    match action {
        Action::SelectCategory(key) => select_category(app, &key),
        Action::SelectQuickLink(link) => {
            info!("Navigating to quick link '{}'", link.sentinel());
            app.current = Selection::QuickLink(link);
            app.expanded.collapse_all();
            app.panel_open = false;
            Effect::None
        }
        Action::ToggleSection(section) => toggle_section(app, &section),
        Action::TogglePanel => {
            app.panel_open = !app.panel_open;
            Effect::None
        }
        Action::ClosePanel => {
            app.panel_open = false;
            Effect::None
        }
        Action::ToggleFooter => {
            app.footer_open = !app.footer_open;
            Effect::None
        }
        Action::CloseFooter => {
            app.footer_open = false;
            Effect::None
        }
        Action::OpenLink(link) => {
            info!("Opening outbound link {:?}", link);
            app.status_message = format!("Opening {}", link.label());
            Effect::OpenUrl(link.url().to_string())
        }
        Action::Quit => Effect::Quit,
    }
}

fn select_category(app: &mut App, key: &str) -> Effect {
    info!("Navigating to category '{}'", key);
    app.current = Selection::from_key(key);
    app.panel_open = false;

    let Some(section) = app.registry.section_of(key) else {
        warn!("Category '{}' is not in the registry; no section expanded", key);
        return Effect::None;
    };

    let name = section.name.clone();
    app.expanded.expand(&name);
    match app.variant {
        Variant::Desktop => Effect::ScrollToSection(name),
        Variant::Mobile => Effect::None,
    }
}

fn toggle_section(app: &mut App, section: &str) -> Effect {
    if !app.registry.contains_section(section) {
        warn!("Ignoring toggle of unknown section '{}'", section);
        return Effect::None;
    }

    let expanded = app.expanded.toggle(section);
    debug!("Section '{}' expanded={}", section, expanded);
    if expanded && app.variant == Variant::Desktop {
        Effect::ScrollToSection(section.to_string())
    } else {
        Effect::None
    }
}
