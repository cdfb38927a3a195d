//! Top navigation bar.
//!
//! Menu hint, app title, search box, locale indicator and theme toggle
//! indicator. The search box and locale selector are inert affordances:
//! rendered, but wired to nothing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::app::{App, Theme};

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let menu_hint = if app.menu_open {
        "[m] menu ◂"
    } else {
        "[m] menu ▸"
    };
    let theme_icon = match app.theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    let dim = Style::default().fg(palette.dim);
    let line = Line::from(vec![
        Span::styled(menu_hint, dim),
        Span::raw("  "),
        Span::styled(
            "Nederlandse Gids",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("zoeken: ", dim),
        Span::styled("\u{2026}", dim),
        Span::raw("   "),
        Span::styled("NL \u{25be}", dim),
        Span::raw("  "),
        Span::styled(format!("[t] {}", theme_icon), dim),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
