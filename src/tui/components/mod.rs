//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: Site title masthead at the top of the panel
//! - `ContentPane`: The current selection, plus the mobile hamburger marker
//! - `StatusBar`: Bottom line with variant, status message or key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Sidebar`: Quick links, section accordion and footer entries
//! - `FooterTray`: Expandable tray of informational links (compact panel)
//!
//! ## Design Philosophy
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Sidebar::new(&mut tui.sidebar, &app, &tui.site_title).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! Sidebar::default().render(frame, area); // reads from global App
//! ```
//!
//! ### Components Emit Events, Not Actions
//!
//! Stateful components translate raw `TuiEvent`s into their own event type
//! (`SidebarEvent`, `TrayEvent`). The event loop maps those onto core
//! `Action`s, so components never mutate navigation state directly.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── header.rs       (Panel masthead)
//! ├── sidebar.rs      (Navigation panel)
//! ├── footer_tray.rs  (Expandable footer links)
//! ├── content.rs      (Selection view + hamburger)
//! └── status_bar.rs   (Bottom status line)
//! ```

pub mod content;
pub mod footer_tray;
pub mod header;
pub mod sidebar;
mod status_bar;

pub use content::ContentPane;
pub use footer_tray::{FooterTray, FooterTrayState, TrayEvent};
pub use sidebar::{Sidebar, SidebarState};
pub use status_bar::StatusBar;
