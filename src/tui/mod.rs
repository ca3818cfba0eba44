//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the panel,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next draw.
//!
//! ## Variant Selection
//!
//! Before each draw the terminal width is checked against the configured
//! breakpoint; in `auto` layout the core `App` is switched between the
//! desktop and mobile variants as the window is resized.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::process::{Child, Command, Stdio};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::LayoutMode;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::links::QuickLink;
use crate::core::state::{App, Variant};
use crate::tui::component::EventHandler;
use crate::tui::components::{FooterTrayState, SidebarState, TrayEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core navigation logic)
pub(crate) struct TuiState {
    // Persistent component states
    pub sidebar: SidebarState,
    pub footer_tray: FooterTrayState,
    // Props from config
    pub layout: LayoutMode,
    pub breakpoint: u16,
    pub sidebar_width: u16,
    pub site_title: String,
    pub open_command: Option<String>,
    // Click targets from the last frame
    pub hamburger_area: Option<Rect>,
    pub drawer_area: Option<Rect>,
    /// Opener processes not yet reaped
    pub children: Vec<Child>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            sidebar: SidebarState::new(),
            footer_tray: FooterTrayState::new(),
            layout: config.layout,
            breakpoint: config.breakpoint,
            sidebar_width: config.sidebar_width,
            site_title: config.site_title.clone(),
            open_command: config.open_command.clone(),
            hamburger_area: None,
            drawer_area: None,
            children: Vec::new(),
        }
    }

    pub fn variant_for_width(&self, width: u16) -> Variant {
        self.layout.variant_for_width(width, self.breakpoint)
    }

    /// Collect exit statuses of finished openers so they don't linger as zombies.
    pub fn reap_children(&mut self) {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Opener {} exited with {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!("Failed to poll opener {}: {}", child.id(), e);
                false
            }
        });
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e));

    let mut tui = TuiState::new(&config);
    let width = terminal.size()?.width;
    let mut app = App::from_config(&config, tui.variant_for_width(width));
    info!(
        "Panel starting: layout={:?}, variant={:?}, selection={}",
        config.layout, app.variant, app.current
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let width = terminal.size()?.width;
            let variant = tui.variant_for_width(width);
            if variant != app.variant {
                info!("Switching to {:?} variant at {} columns", variant, width);
                app.variant = variant;
            }
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        tui.reap_children();

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one input event. Returns true when the app should quit.
pub(crate) fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        // Resize just needs a redraw (already flagged by the loop)
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit | TuiEvent::Quit => return dispatch(app, tui, Action::Quit),
        _ => {}
    }

    let compact = app.variant.is_compact();

    if matches!(event, TuiEvent::TogglePanel) {
        return dispatch(app, tui, Action::TogglePanel);
    }

    // The footer tray takes all other input while it is showing
    if compact && app.panel_open && app.footer_open {
        return match tui.footer_tray.handle_event(&event) {
            Some(TrayEvent::Open(link)) => dispatch(app, tui, Action::OpenLink(link)),
            Some(TrayEvent::Close) => dispatch(app, tui, Action::CloseFooter),
            None => false,
        };
    }

    match event {
        TuiEvent::Escape if compact && app.panel_open => {
            return dispatch(app, tui, Action::ClosePanel);
        }
        TuiEvent::MouseClick(column, row) if compact => {
            if contains(tui.hamburger_area, column, row) {
                return dispatch(app, tui, Action::TogglePanel);
            }
            // Backdrop: clicking beside the open drawer closes it
            if app.panel_open && !contains(tui.drawer_area, column, row) {
                return dispatch(app, tui, Action::ClosePanel);
            }
        }
        TuiEvent::InputChar('h') => {
            return dispatch(app, tui, Action::SelectQuickLink(QuickLink::Home));
        }
        TuiEvent::InputChar('p') => {
            return dispatch(app, tui, Action::SelectQuickLink(QuickLink::MostViewed));
        }
        // The tray only exists inside the open drawer
        TuiEvent::InputChar('f') if compact && app.panel_open => {
            return dispatch(app, tui, Action::ToggleFooter);
        }
        _ => {}
    }

    if compact && !app.panel_open {
        // Closed drawer: Enter opens it, everything else has no target
        if matches!(event, TuiEvent::Submit) {
            return dispatch(app, tui, Action::TogglePanel);
        }
        return false;
    }

    match tui.sidebar.handle_event(&event) {
        Some(sidebar_event) => dispatch(app, tui, sidebar_event.into()),
        None => false,
    }
}

/// Apply an action to the core and carry out its effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let footer_was_open = app.footer_open;
    let effect = update(app, action);

    if app.footer_open && !footer_was_open {
        tui.footer_tray = FooterTrayState::new();
    }

    match effect {
        Effect::Quit => return true,
        Effect::ScrollToSection(section) => {
            debug!("Scheduling scroll to section '{}'", section);
            tui.sidebar.schedule_scroll(section);
        }
        Effect::OpenUrl(url) => open_url(app, tui, &url),
        Effect::None => {}
    }
    false
}

/// Hand a URL to the configured opener, or show it when there is none.
fn open_url(app: &mut App, tui: &mut TuiState, url: &str) {
    let Some(command) = tui.open_command.as_deref() else {
        app.status_message = format!("Open in your browser: {url}");
        return;
    };

    match Command::new(command)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            info!("Launched '{}' for {}", command, url);
            tui.children.push(child);
        }
        Err(e) => {
            warn!("Failed to launch '{}' for {}: {}", command, url, e);
            app.status_message = format!("Could not open link: {e}");
        }
    }
}

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|r| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::links::OutboundLink;
    use crate::core::state::Selection;
    use crate::test_support::{test_app, test_tui};

    #[test]
    fn test_quit_keys() {
        let mut app = test_app(Variant::Desktop);
        let mut tui = test_tui();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Quit));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Resize));
    }

    #[test]
    fn test_hotkeys_select_quick_links() {
        let mut app = test_app(Variant::Desktop);
        let mut tui = test_tui();
        app.expanded.expand("World");
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('p'));
        assert_eq!(app.current, Selection::QuickLink(QuickLink::MostViewed));
        assert!(!app.expanded.is_expanded("World"));
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('h'));
        assert_eq!(app.current, Selection::QuickLink(QuickLink::Home));
    }

    #[test]
    fn test_closed_drawer_ignores_navigation_until_opened() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.sidebar.selected, 0);

        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.panel_open);
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.panel_open);
        handle_event(&mut app, &mut tui, TuiEvent::TogglePanel);
        assert!(app.panel_open);
    }

    #[test]
    fn test_backdrop_click_closes_drawer() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        app.panel_open = true;
        tui.drawer_area = Some(Rect::new(0, 0, 30, 20));
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(45, 5));
        assert!(!app.panel_open);
    }

    #[test]
    fn test_hamburger_click_opens_drawer() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        tui.hamburger_area = Some(Rect::new(0, 0, 6, 1));
        handle_event(&mut app, &mut tui, TuiEvent::MouseClick(2, 0));
        assert!(app.panel_open);
    }

    #[test]
    fn test_tray_captures_input_while_open() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        tui.open_command = None;
        app.panel_open = true;
        app.current = Selection::QuickLink(QuickLink::MostViewed);

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        assert!(app.footer_open);

        // 'h' goes to the tray, not the quick-link hotkey
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('h'));
        assert_eq!(app.current, Selection::QuickLink(QuickLink::MostViewed));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(
            app.status_message,
            format!("Open in your browser: {}", OutboundLink::Help.url())
        );

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.footer_open);
        assert!(app.panel_open);
    }

    #[test]
    fn test_reopened_tray_starts_at_top() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        app.panel_open = true;
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.footer_tray.selected, 1);
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        assert_eq!(tui.footer_tray.selected, 0);
    }

    #[test]
    fn test_desktop_expand_schedules_scroll() {
        let mut app = test_app(Variant::Desktop);
        let mut tui = test_tui();
        dispatch(&mut app, &mut tui, Action::ToggleSection("Sports".to_string()));
        assert_eq!(tui.sidebar.pending_scroll(), Some("Sports"));

        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        dispatch(&mut app, &mut tui, Action::ToggleSection("Sports".to_string()));
        assert_eq!(tui.sidebar.pending_scroll(), None);
    }

    #[test]
    fn test_failed_opener_reports_in_status() {
        let mut app = test_app(Variant::Desktop);
        let mut tui = test_tui();
        tui.open_command = Some("/nonexistent/opener-binary".to_string());
        open_url(&mut app, &mut tui, "https://example.com");
        assert!(app.status_message.starts_with("Could not open link"));
        assert!(tui.children.is_empty());
    }

    #[test]
    fn test_footer_hotkey_needs_open_drawer() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        assert!(!app.footer_open);

        let mut desktop = test_app(Variant::Desktop);
        handle_event(&mut desktop, &mut tui, TuiEvent::InputChar('f'));
        assert!(!desktop.footer_open);

        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.panel_open);
        assert!(!app.footer_open);
        handle_event(&mut app, &mut tui, TuiEvent::TogglePanel);
        assert!(!app.panel_open);
    }

    #[test]
    fn test_tab_closes_drawer_over_open_tray() {
        let mut app = test_app(Variant::Mobile);
        let mut tui = test_tui();
        app.panel_open = true;
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        assert!(app.footer_open);

        handle_event(&mut app, &mut tui, TuiEvent::TogglePanel);
        assert!(!app.panel_open);
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Quit));
    }

    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "pid (comm) state ppid ..."; comm may contain spaces
                let Some((_, rest)) = stat.rsplit_once(')') else {
                    return false;
                };
                let fields: Vec<&str> = rest.split_whitespace().collect();
                fields.len() > 1 && fields[0] == "Z" && fields[1] == me
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_finished_openers_are_reaped() {
        let mut app = test_app(Variant::Desktop);
        let mut tui = test_tui();
        tui.open_command = Some("true".to_string());
        for _ in 0..5 {
            open_url(&mut app, &mut tui, "https://example.com");
        }
        assert_eq!(tui.children.len(), 5);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while !tui.children.is_empty() && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            tui.reap_children();
        }
        assert!(tui.children.is_empty());
        assert_eq!(zombie_children(), 0);
    }
}
