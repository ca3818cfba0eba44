//! # Core Navigation Logic
//!
//! This module contains the panel's interaction model.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Registry (sections)  │
//!                    │  • App (nav state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Tests    │
//!             │  Adapter   │          │ (no render │
//!             │ (ratatui)  │          │   needed)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Sections and their categories, read-only at runtime
//! - [`state`]: The `App` struct: current selection, expanded sections, panel flags
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`links`]: Quick links and outbound footer links
//! - [`config`]: Layered configuration (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod links;
pub mod registry;
pub mod state;
