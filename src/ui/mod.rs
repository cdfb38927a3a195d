//! UI rendering.
//!
//! Pure functions from the current [`App`] state to a ratatui frame. The
//! screens only read loader snapshots; all state changes happen in the
//! event loop.

mod detail;
mod helpers;
mod home;
mod sidebar;
pub mod theme;
mod top_bar;

pub use theme::Palette;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Screen};

/// Sidebar width in columns when the menu is open.
const SIDEBAR_WIDTH: u16 = 26;

/// Render the full UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();

    // Paint the themed background before anything else
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    top_bar::render(frame, rows[0], app, &palette);

    let content = if app.menu_open {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(rows[1]);
        sidebar::render(frame, cols[0], app, &palette);
        cols[1]
    } else {
        rows[1]
    };

    match app.screen {
        Screen::Home => home::render(frame, content, app, &palette),
        Screen::ArticleDetail => detail::render(frame, content, app, &palette),
    }
}
