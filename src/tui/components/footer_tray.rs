//! # Footer Tray Component
//!
//! Expandable tray of the informational links, pinned to the bottom of the
//! compact panel while `footer_open` is set. Opened with `f` or the MORE
//! entry, dismissed with Esc, `f` or its close entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FooterTrayState` lives in `TuiState`
//! - `FooterTray` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::core::links::{FOOTER_LINKS, OutboundLink};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const CLOSE_LABEL: &str = "✕ Close";

/// Persistent state for the footer tray.
pub struct FooterTrayState {
    pub selected: usize,
    pub list_state: ListState,
    /// Inner list area from the last render, for click hit tests.
    list_area: Option<Rect>,
}

impl Default for FooterTrayState {
    fn default() -> Self {
        Self::new()
    }
}

impl FooterTrayState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
            list_area: None,
        }
    }

    /// Links plus the close entry.
    pub fn entry_count() -> usize {
        FOOTER_LINKS.len() + 1
    }

    /// Rows the tray occupies including its top border.
    pub fn height() -> u16 {
        Self::entry_count() as u16 + 1
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(Self::entry_count() - 1);
        self.list_state.select(Some(self.selected));
    }

    fn activate(&self, index: usize) -> TrayEvent {
        match FOOTER_LINKS.get(index) {
            Some(link) => TrayEvent::Open(*link),
            None => TrayEvent::Close,
        }
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let index = (row - area.y) as usize + self.list_state.offset();
        (index < Self::entry_count()).then_some(index)
    }
}

/// Events emitted by the footer tray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayEvent {
    Open(OutboundLink),
    Close,
}

impl EventHandler for FooterTrayState {
    type Event = TrayEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<TrayEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('f') => Some(TrayEvent::Close),
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit => Some(self.activate(self.selected)),
            TuiEvent::MouseClick(column, row) => match self.hit_test(*column, *row) {
                Some(index) => {
                    self.select(index);
                    Some(self.activate(index))
                }
                // Clicking anywhere off the tray dismisses it
                None => Some(TrayEvent::Close),
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the footer tray.
pub struct FooterTray<'a> {
    state: &'a mut FooterTrayState,
}

impl<'a> FooterTray<'a> {
    pub fn new(state: &'a mut FooterTrayState) -> Self {
        Self { state }
    }

    /// Render pinned to the bottom of `panel`.
    pub fn render(&mut self, frame: &mut Frame, panel: Rect) {
        let height = FooterTrayState::height().min(panel.height);
        let tray = Rect::new(panel.x, panel.bottom() - height, panel.width, height);

        frame.render_widget(Clear, tray);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" More ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(tray);

        let mut items: Vec<ListItem> = FOOTER_LINKS
            .iter()
            .map(|link| {
                ListItem::new(Line::from(Span::styled(
                    format!(" {}", link.label()),
                    Style::default().fg(Color::Gray),
                )))
            })
            .collect();
        items.push(ListItem::new(
            Line::from(Span::styled(CLOSE_LABEL, Style::default().fg(Color::DarkGray))).centered(),
        ));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, tray, &mut self.state.list_state);
        self.state.list_area = Some(inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_tray(state: &mut FooterTrayState) -> String {
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                FooterTray::new(state).render(f, f.area());
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
    fn test_tray_lists_all_links() {
        let mut state = FooterTrayState::new();
        let text = render_tray(&mut state);
        assert!(text.contains("More"));
        assert!(text.contains("My Account"));
        assert!(text.contains("Privacy Policy"));
        assert!(text.contains("Terms of Service"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_keyboard_selection_and_activation() {
        let mut state = FooterTrayState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TrayEvent::Open(OutboundLink::Account))
        );
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TrayEvent::Open(OutboundLink::Help))
        );
        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, FooterTrayState::entry_count() - 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(TrayEvent::Close));
    }

    #[test]
    fn test_escape_closes() {
        let mut state = FooterTrayState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(TrayEvent::Close));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('f')), Some(TrayEvent::Close));
    }

    #[test]
    fn test_click_hits_rendered_rows() {
        let mut state = FooterTrayState::new();
        render_tray(&mut state);
        // Tray is 7 rows pinned to the bottom of 12: border on row 5, links from row 6
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(3, 6)),
            Some(TrayEvent::Open(OutboundLink::Account))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(3, 8)),
            Some(TrayEvent::Open(OutboundLink::PrivacyPolicy))
        );
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(3, 11)), Some(TrayEvent::Close));
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(3, 1)), Some(TrayEvent::Close));
    }
}
