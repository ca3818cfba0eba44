//! # Header Component
//!
//! The panel's masthead: the site title standing in for a logo, with a rule
//! underneath separating it from the quick links.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct Header<'a> {
    pub site_title: &'a str,
}

impl<'a> Header<'a> {
    /// Title line plus rule.
    pub const HEIGHT: u16 = 2;

    pub fn new(site_title: &'a str) -> Self {
        Self { site_title }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, rule_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.site_title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let rule = Paragraph::new("━".repeat(rule_area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(rule, rule_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_renders_title_and_rule() {
        let backend = TestBackend::new(30, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Header::new("Daily Ledger").render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Daily Ledger"));
        assert!(text.contains("━━━━"));
    }
}
