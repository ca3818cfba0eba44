use crate::core::state::{App, Variant};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ContentPane, FooterTray, Sidebar, StatusBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [main_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    tui.drawer_area = None;
    tui.hamburger_area = None;

    match app.variant {
        Variant::Desktop => {
            let [nav_area, content_area] =
                Layout::horizontal([Length(tui.sidebar_width), Min(0)]).areas(main_area);
            Sidebar::new(&mut tui.sidebar, app, &tui.site_title).render(frame, nav_area);
            draw_content(frame, content_area, app, false);
        }
        Variant::Mobile => {
            tui.hamburger_area = draw_content(frame, main_area, app, true);

            if app.panel_open {
                let drawer = drawer_rect(main_area, tui.sidebar_width);
                frame.render_widget(Clear, drawer);
                Sidebar::new(&mut tui.sidebar, app, &tui.site_title).render(frame, drawer);
                if app.footer_open {
                    FooterTray::new(&mut tui.footer_tray).render(frame, drawer);
                }
                tui.drawer_area = Some(drawer);
            } else {
                tui.sidebar.clear_hit_regions();
            }
        }
    }

    StatusBar::new(app.variant, app.status_message.clone()).render(frame, status_area);
}

/// Draw the content pane, returning where its hamburger marker landed.
fn draw_content(frame: &mut Frame, area: Rect, app: &App, show_marker: bool) -> Option<Rect> {
    let mut content = ContentPane::new(
        app.breadcrumb(),
        app.current.key().to_string(),
        show_marker,
        app.panel_open,
    );
    content.render(frame, area);
    content.marker_area
}

/// The drawer slides in from the left edge at the panel's configured width.
pub fn drawer_rect(area: Rect, width: u16) -> Rect {
    Rect::new(area.x, area.y, width.min(area.width), area.height)
}
