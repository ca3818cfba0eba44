//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sidenav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LayoutMode;
use crate::core::links::HOMEPAGE;
use crate::core::registry::{Registry, Section, default_registry};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SidenavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub layout: Option<LayoutMode>,
    pub breakpoint: Option<u16>,
    pub sidebar_width: Option<u16>,
    pub initial_category: Option<String>,
    pub site_title: Option<String>,
    pub open_command: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BREAKPOINT: u16 = 100;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 30;
pub const DEFAULT_SITE_TITLE: &str = "The New York Times";

/// Narrower than this and the panel can't show a label next to a chevron.
const MIN_SIDEBAR_WIDTH: u16 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub layout: LayoutMode,
    pub breakpoint: u16,
    pub sidebar_width: u16,
    pub initial_category: String,
    pub site_title: String,
    pub open_command: Option<String>,
    pub registry: Registry,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sidenav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sidenav").join("config.toml"))
}

/// Load config from `~/.sidenav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SidenavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SidenavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SidenavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SidenavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<SidenavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SidenavConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sidenav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# layout = "auto"                    # "auto", "desktop" or "mobile"
# breakpoint = 100                   # auto: desktop at or above this many columns
# sidebar_width = 30
# initial_category = "homepage"      # a category key, "homepage" or "mostviewed"
# site_title = "The New York Times"
# open_command = "xdg-open"          # run with the URL when a footer link is chosen

# Replace the built-in sections. Order here is display order.
# [[sections]]
# name = "World"
# categories = [
#     { key = "europe", name = "Europe" },
#     { key = "asia", name = "Asia" },
# ]

# [[sections]]
# name = "Sports"
# categories = [{ key = "nfl", name = "NFL" }]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_layout` and `cli_category` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SidenavConfig,
    cli_layout: Option<LayoutMode>,
    cli_category: Option<&str>,
) -> ResolvedConfig {
    // Layout: CLI → env → config → default
    let layout = cli_layout
        .or_else(|| {
            std::env::var("SIDENAV_LAYOUT")
                .ok()
                .and_then(|s| match LayoutMode::from_str(&s, true) {
                    Ok(mode) => Some(mode),
                    Err(e) => {
                        warn!("Ignoring SIDENAV_LAYOUT: {}", e);
                        None
                    }
                })
        })
        .or(config.general.layout)
        .unwrap_or_default();

    // Initial category: CLI → env → config → homepage
    let initial_category = cli_category
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SIDENAV_CATEGORY").ok())
        .or_else(|| config.general.initial_category.clone())
        .unwrap_or_else(|| HOMEPAGE.to_string());

    // Open command: env → config
    let open_command = std::env::var("SIDENAV_OPEN_COMMAND")
        .ok()
        .or_else(|| config.general.open_command.clone())
        .filter(|cmd| !cmd.trim().is_empty());

    let registry = if config.sections.is_empty() {
        default_registry()
    } else {
        info!("Using {} sections from config", config.sections.len());
        Registry::new(config.sections.clone())
    };

    ResolvedConfig {
        layout,
        breakpoint: config.general.breakpoint.unwrap_or(DEFAULT_BREAKPOINT),
        sidebar_width: config
            .general
            .sidebar_width
            .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
            .max(MIN_SIDEBAR_WIDTH),
        initial_category,
        site_title: config
            .general
            .site_title
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
        open_command,
        registry,
    }
}
