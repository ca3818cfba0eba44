//! # Content Pane
//!
//! Stands in for the page the router would load: shows which selection is
//! active. On the mobile variant it also carries the hamburger marker that
//! opens the drawer (top-left while closed, top-right while open so the
//! drawer doesn't cover it).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

const MENU_MARKER: &str = "☰ MENU";
const CLOSE_MARKER: &str = "✕";

pub struct ContentPane {
    pub breadcrumb: String,
    pub selection_key: String,
    pub show_marker: bool,
    pub panel_open: bool,
    /// Where the hamburger landed in the last render, for click hit tests.
    pub marker_area: Option<Rect>,
}

impl ContentPane {
    pub fn new(breadcrumb: String, selection_key: String, show_marker: bool, panel_open: bool) -> Self {
        Self {
            breadcrumb,
            selection_key,
            show_marker,
            panel_open,
            marker_area: None,
        }
    }

    fn render_marker(&mut self, frame: &mut Frame, area: Rect) {
        let (label, alignment) = if self.panel_open {
            (CLOSE_MARKER, Alignment::Right)
        } else {
            (MENU_MARKER, Alignment::Left)
        };
        let width = (label.width() as u16).min(area.width);
        let x = match alignment {
            Alignment::Right => area.x + area.width.saturating_sub(width),
            _ => area.x,
        };
        let marker_rect = Rect::new(x, area.y, width, 1.min(area.height));

        let marker = Paragraph::new(Span::styled(
            label,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(marker, marker_rect);
        self.marker_area = Some(marker_rect);
    }
}

impl Component for ContentPane {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.marker_area = None;
        let [marker_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        if self.show_marker {
            self.render_marker(frame, marker_area);
        }

        let lines = vec![
            Line::from(Span::styled(
                "Now showing",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                self.breadcrumb.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("key: {}", self.selection_key),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )),
        ];

        let body = Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(pane: &mut ContentPane) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                pane.render(f, f.area());
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
    fn test_content_shows_breadcrumb_and_key() {
        let mut pane = ContentPane::new("World › Europe".to_string(), "europe".to_string(), false, false);
        let text = draw(&mut pane);
        assert!(text.contains("Now showing"));
        assert!(text.contains("Europe"));
        assert!(text.contains("key: europe"));
        assert!(pane.marker_area.is_none());
    }

    #[test]
    fn test_marker_moves_right_when_panel_open() {
        let mut pane = ContentPane::new("HOME".to_string(), "homepage".to_string(), true, false);
        draw(&mut pane);
        let closed = pane.marker_area.unwrap();
        assert_eq!(closed.x, 0);

        pane.panel_open = true;
        draw(&mut pane);
        let open = pane.marker_area.unwrap();
        assert_eq!(open.x, 59);
        assert_eq!(open.width, 1);
    }
}
