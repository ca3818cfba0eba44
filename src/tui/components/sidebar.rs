//! # Sidebar Component
//!
//! The navigation panel: masthead, Home/Popular quick links, the accordion of
//! sections, and the footer entries.
//!
//! ## Responsibilities
//!
//! - Lay out the visible rows for the current expanded state
//! - Keep a keyboard cursor on the same row across re-layouts
//! - Scroll the accordion, including deferred scroll-to-section requests
//! - Hit testing for mouse clicks
//!
//! ## Architecture
//!
//! `Sidebar` is a transient component (created each frame) that wraps
//! `&'a mut SidebarState` (persistent state) and the core `App` (props).
//!
//! ## Deferred Scrolling
//!
//! Expanding a section changes the height of everything below it, so the
//! header's offset can only be known after layout. `schedule_scroll()` just
//! records the section name. The render pass lays out rows from the current
//! state, records each header's anchor, and only then applies the pending
//! scroll. A second request before the next frame replaces the first.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::core::links::{FOOTER_LINKS, OutboundLink, QuickLink};
use crate::core::registry::Registry;
use crate::core::state::{App, ExpandedSections, Selection, Variant};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::header::Header;
use crate::tui::event::TuiEvent;

/// One line of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRow {
    QuickLink(QuickLink),
    SectionHeader(String),
    Category {
        section: String,
        key: String,
        name: String,
    },
    Subscribe,
    /// MORE toggle for the footer tray (compact panel only).
    FooterToggle,
    /// Inline footer link (wide panel only).
    FooterLink(OutboundLink),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Top,
    Scroll,
    Footer,
}

impl NavRow {
    fn zone(&self) -> Zone {
        match self {
            NavRow::QuickLink(_) => Zone::Top,
            NavRow::SectionHeader(_) | NavRow::Category { .. } => Zone::Scroll,
            NavRow::Subscribe | NavRow::FooterToggle | NavRow::FooterLink(_) => Zone::Footer,
        }
    }
}

/// Visible rows in display order for the given state.
pub fn build_rows(registry: &Registry, expanded: &ExpandedSections, variant: Variant) -> Vec<NavRow> {
    let mut rows: Vec<NavRow> = QuickLink::ALL.iter().copied().map(NavRow::QuickLink).collect();

    for section in registry.sections() {
        rows.push(NavRow::SectionHeader(section.name.clone()));
        if expanded.is_expanded(&section.name) {
            rows.extend(section.categories.iter().map(|cat| NavRow::Category {
                section: section.name.clone(),
                key: cat.key.clone(),
                name: cat.name.clone(),
            }));
        }
    }

    rows.push(NavRow::Subscribe);
    if variant.is_compact() {
        rows.push(NavRow::FooterToggle);
    } else {
        rows.extend(FOOTER_LINKS.iter().copied().map(NavRow::FooterLink));
    }
    rows
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    QuickLink(QuickLink),
    Category(String),
    ToggleSection(String),
    ToggleFooter,
    Open(OutboundLink),
}

impl From<SidebarEvent> for Action {
    fn from(event: SidebarEvent) -> Self {
        match event {
            SidebarEvent::QuickLink(link) => Action::SelectQuickLink(link),
            SidebarEvent::Category(key) => Action::SelectCategory(key),
            SidebarEvent::ToggleSection(section) => Action::ToggleSection(section),
            SidebarEvent::ToggleFooter => Action::ToggleFooter,
            SidebarEvent::Open(link) => Action::OpenLink(link),
        }
    }
}

/// Layout, cursor and scroll state for the panel.
/// Must be persisted in the parent TuiState.
pub struct SidebarState {
    /// Rows from the last layout pass
    pub rows: Vec<NavRow>,
    /// Cursor position in `rows`
    pub selected: usize,
    /// Scroll offset of the accordion
    pub scroll_state: ScrollViewState,
    /// Section header → line offset inside the accordion, from the last layout pass
    pub anchors: HashMap<String, u16>,
    pub content_height: u16,
    pub viewport_height: u16,
    pending_scroll: Option<String>,
    hit_regions: Vec<(Rect, usize)>,
    /// Title line of the header; clicking it opens the site.
    masthead_area: Option<Rect>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            scroll_state: ScrollViewState::default(),
            anchors: HashMap::new(),
            content_height: 0,
            viewport_height: 0,
            pending_scroll: None,
            hit_regions: Vec::new(),
            masthead_area: None,
        }
    }

    /// Request that `section`'s header be scrolled to the top after the next
    /// layout pass.
    pub fn schedule_scroll(&mut self, section: String) {
        self.pending_scroll = Some(section);
    }

    pub fn pending_scroll(&self) -> Option<&str> {
        self.pending_scroll.as_deref()
    }

    pub fn selected_row(&self) -> Option<&NavRow> {
        self.rows.get(self.selected)
    }

    /// Forget click targets, e.g. while the drawer is hidden.
    pub fn clear_hit_regions(&mut self) {
        self.hit_regions.clear();
        self.masthead_area = None;
    }

    /// Replace the cached rows, keeping the cursor on the same row. If that
    /// row disappeared (its section collapsed) the cursor moves to the
    /// section header.
    fn sync_rows(&mut self, rows: Vec<NavRow>) {
        let previous = self.rows.get(self.selected).cloned();
        self.rows = rows;

        let position = previous.and_then(|prev| {
            self.rows.iter().position(|row| *row == prev).or_else(|| match prev {
                NavRow::Category { section, .. } => self
                    .rows
                    .iter()
                    .position(|row| matches!(row, NavRow::SectionHeader(name) if *name == section)),
                _ => None,
            })
        });

        self.selected = match position {
            Some(index) => index,
            None => self.selected.min(self.rows.len().saturating_sub(1)),
        };
    }

    /// Line offset of a row inside the accordion, if it lives there.
    fn scroll_offset_of(&self, index: usize) -> Option<u16> {
        if self.rows.get(index)?.zone() != Zone::Scroll {
            return None;
        }
        let before = self.rows[..index]
            .iter()
            .filter(|row| row.zone() == Zone::Scroll)
            .count();
        Some(before as u16)
    }

    fn move_cursor(&mut self, index: usize) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = index.min(self.rows.len() - 1);
        self.scroll_to_selected();
    }

    /// Scroll the accordion so the cursor row is visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(row_y) = self.scroll_offset_of(self.selected) else {
            return;
        };
        let offset_y = self.scroll_state.offset().y;

        if row_y < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row_y });
        } else if self.viewport_height > 0 && row_y >= offset_y + self.viewport_height {
            let new_y = row_y + 1 - self.viewport_height;
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Run the deferred scroll against anchors from the current layout.
    fn apply_pending_scroll(&mut self) {
        let Some(section) = self.pending_scroll.take() else {
            return;
        };
        match self.anchors.get(&section) {
            Some(&anchor) => {
                let max_y = self.content_height.saturating_sub(self.viewport_height);
                self.scroll_state.set_offset(Position {
                    x: 0,
                    y: anchor.min(max_y),
                });
            }
            None => log::debug!("No anchor for section '{}', scroll dropped", section),
        }
    }

    fn activate(&self, index: usize) -> Option<SidebarEvent> {
        let event = match self.rows.get(index)? {
            NavRow::QuickLink(link) => SidebarEvent::QuickLink(*link),
            NavRow::SectionHeader(name) => SidebarEvent::ToggleSection(name.clone()),
            NavRow::Category { key, .. } => SidebarEvent::Category(key.clone()),
            NavRow::Subscribe => SidebarEvent::Open(OutboundLink::Subscribe),
            NavRow::FooterToggle => SidebarEvent::ToggleFooter,
            NavRow::FooterLink(link) => SidebarEvent::Open(*link),
        };
        Some(event)
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.hit_regions
            .iter()
            .find(|(rect, _)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(_, index)| *index)
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_cursor(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.move_cursor(self.selected + 1);
                None
            }
            TuiEvent::Submit => self.activate(self.selected),
            // Space folds the section under the cursor, or the one it sits in
            TuiEvent::InputChar(' ') => match self.selected_row()? {
                NavRow::SectionHeader(name) | NavRow::Category { section: name, .. } => {
                    Some(SidebarEvent::ToggleSection(name.clone()))
                }
                _ => None,
            },
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::MouseClick(column, row) => {
                if self
                    .masthead_area
                    .is_some_and(|r| r.contains(Position::new(*column, *row)))
                {
                    return Some(SidebarEvent::Open(OutboundLink::Masthead));
                }
                let index = self.hit_test(*column, *row)?;
                self.selected = index;
                self.activate(index)
            }
            _ => None,
        }
    }
}

/// Navigation panel component.
/// Created fresh each frame with references to state and data.
pub struct Sidebar<'a> {
    pub state: &'a mut SidebarState,
    pub app: &'a App,
    pub site_title: &'a str,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut SidebarState, app: &'a App, site_title: &'a str) -> Self {
        Self {
            state,
            app,
            site_title,
        }
    }

    fn is_current(&self, row: &NavRow) -> bool {
        match row {
            NavRow::QuickLink(link) => self.app.current == Selection::QuickLink(*link),
            NavRow::Category { key, .. } => self.app.current.is_category(key),
            _ => false,
        }
    }

    fn row_line(&self, index: usize, row: &NavRow, width: u16) -> Line<'static> {
        let width = width as usize;
        let mut style = if self.is_current(row) {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text = match row {
            NavRow::QuickLink(link) => {
                style = style.add_modifier(Modifier::BOLD);
                pad(&format!(" {}", link.label()), width)
            }
            NavRow::SectionHeader(name) => {
                style = style.fg(Color::White).add_modifier(Modifier::BOLD);
                let chevron = if self.app.expanded.is_expanded(name) { "▾" } else { "▸" };
                let label_width = width.saturating_sub(2);
                format!("{}{} ", pad(&format!(" {name}"), label_width), chevron)
            }
            NavRow::Category { name, .. } => pad(&format!("   {name}"), width),
            NavRow::Subscribe => {
                style = Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD);
                center(&OutboundLink::Subscribe.label(), width)
            }
            NavRow::FooterToggle => {
                let arrow = if self.app.footer_open { "▴" } else { "▾" };
                center(&format!("MORE {arrow}"), width)
            }
            NavRow::FooterLink(link) => {
                style = Style::default().fg(Color::DarkGray);
                pad(&format!(" {}", link.label()), width)
            }
        };

        if index == self.state.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(Span::styled(text, style))
    }

    /// Render rows outside the accordion one per line from the top of `area`.
    fn render_fixed(&mut self, frame: &mut Frame, area: Rect, zone: Zone) {
        let rows: Vec<(usize, NavRow)> = self
            .state
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.zone() == zone)
            .map(|(index, row)| (index, row.clone()))
            .collect();

        for (offset, (index, row)) in rows.iter().enumerate() {
            let y = area.y + offset as u16;
            if y >= area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, 1);
            frame.render_widget(Paragraph::new(self.row_line(*index, row, area.width)), rect);
            self.state.hit_regions.push((rect, *index));
        }
    }

    fn render_accordion(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let rows: Vec<(usize, NavRow)> = self
            .state
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.zone() == Zone::Scroll)
            .map(|(index, row)| (index, row.clone()))
            .collect();

        // 1. Layout: record anchors for the rows as they are now
        self.state.anchors.clear();
        for (y, (_, row)) in rows.iter().enumerate() {
            if let NavRow::SectionHeader(name) = row {
                self.state.anchors.insert(name.clone(), y as u16);
            }
        }
        self.state.content_height = rows.len() as u16;
        self.state.viewport_height = area.height;

        // 2. Layout has settled; deferred scroll may read it now
        self.state.apply_pending_scroll();
        self.state.clamp_scroll();
        let offset_y = self.state.scroll_state.offset().y;

        // 3. Draw
        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (y, (index, row)) in rows.iter().enumerate() {
            let y = y as u16;
            let rect = Rect::new(0, y, content_width, 1);
            scroll_view.render_widget(Paragraph::new(self.row_line(*index, row, content_width)), rect);

            if y >= offset_y && y < offset_y + area.height {
                let screen = Rect::new(area.x, area.y + (y - offset_y), content_width, 1);
                self.state.hit_regions.push((screen, *index));
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = build_rows(&self.app.registry, &self.app.expanded, self.app.variant);
        self.state.sync_rows(rows);
        self.state.clear_hit_regions();

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let footer_rows = self
            .state
            .rows
            .iter()
            .filter(|row| row.zone() == Zone::Footer)
            .count() as u16;

        use Constraint::{Length, Min};
        let [header_area, quick_area, divider_area, list_area, rule_area, footer_area] =
            Layout::vertical([
                Length(Header::HEIGHT),
                Length(QuickLink::ALL.len() as u16),
                Length(1),
                Min(0),
                Length(1),
                Length(footer_rows),
            ])
            .areas(inner);

        Header::new(self.site_title).render(frame, header_area);
        self.state.masthead_area = Some(Rect { height: 1, ..header_area });
        self.render_fixed(frame, quick_area, Zone::Top);

        for rule in [divider_area, rule_area] {
            frame.render_widget(
                Paragraph::new("─".repeat(rule.width as usize))
                    .style(Style::default().fg(Color::DarkGray)),
                rule,
            );
        }

        self.render_accordion(frame, list_area);
        self.render_fixed(frame, footer_area, Zone::Footer);
    }
}

/// Left-align `text` in `width` columns, truncating with an ellipsis.
fn pad(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let fill = width.saturating_sub(fitted.width());
    format!("{fitted}{}", " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let fitted = fit_width(text, width);
    let spare = width.saturating_sub(fitted.width());
    let left = spare / 2;
    format!("{}{fitted}{}", " ".repeat(left), " ".repeat(spare - left))
}

/// Truncate `text` to at most `width` display columns.
fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
