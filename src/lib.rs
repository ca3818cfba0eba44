//! Sidenav library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::state::Variant;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the panel picks between its desktop and mobile variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Desktop at or above the breakpoint width, mobile below it.
    #[default]
    Auto,
    Desktop,
    Mobile,
}

impl LayoutMode {
    pub fn variant_for_width(self, width: u16, breakpoint: u16) -> Variant {
        match self {
            LayoutMode::Desktop => Variant::Desktop,
            LayoutMode::Mobile => Variant::Mobile,
            LayoutMode::Auto if width >= breakpoint => Variant::Desktop,
            LayoutMode::Auto => Variant::Mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_layout_switches_at_breakpoint() {
        assert_eq!(LayoutMode::Auto.variant_for_width(100, 100), Variant::Desktop);
        assert_eq!(LayoutMode::Auto.variant_for_width(99, 100), Variant::Mobile);
    }

    #[test]
    fn test_forced_layouts_ignore_width() {
        assert_eq!(LayoutMode::Desktop.variant_for_width(20, 100), Variant::Desktop);
        assert_eq!(LayoutMode::Mobile.variant_for_width(300, 100), Variant::Mobile);
    }
}
