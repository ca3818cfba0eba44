//! # StatusBar Component
//!
//! Bottom line showing the active layout variant and either the last status
//! message or the key hints.
//!
//! Stateless: it renders what it is given. The variant comes from the core
//! `App`, the status message from the last action that set one.
//!
//! The text changes based on state:
//!
//! 1. **Status message**: `"desktop | Opening Help"`
//! 2. **Default**: `"desktop | ↑↓ move  Enter open  Space fold  …"`

use crate::core::state::Variant;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const DESKTOP_HINTS: &str = "↑↓ move  Enter open  Space fold  h home  p popular  q quit";
const MOBILE_HINTS: &str = "Tab menu  ↑↓ move  Enter open  f more  q quit";

pub struct StatusBar {
    pub variant: Variant,
    pub status_message: String,
}

impl StatusBar {
    pub fn new(variant: Variant, status_message: String) -> Self {
        Self {
            variant,
            status_message,
        }
    }

    fn text(&self) -> String {
        let label = match self.variant {
            Variant::Desktop => "desktop",
            Variant::Mobile => "mobile",
        };
        if self.status_message.is_empty() {
            let hints = match self.variant {
                Variant::Desktop => DESKTOP_HINTS,
                Variant::Mobile => MOBILE_HINTS,
            };
            format!(" {label} | {hints}")
        } else {
            format!(" {label} | {}", self.status_message)
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::DarkGray));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut bar: StatusBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_bar_shows_hints_when_idle() {
        let text = rendered(StatusBar::new(Variant::Mobile, String::new()));
        assert!(text.contains("mobile"));
        assert!(text.contains("Tab menu"));
    }

    #[test]
    fn test_status_bar_prefers_status_message() {
        let text = rendered(StatusBar::new(Variant::Desktop, "Opening Help".to_string()));
        assert!(text.contains("desktop"));
        assert!(text.contains("Opening Help"));
        assert!(!text.contains("q quit"));
    }
}
