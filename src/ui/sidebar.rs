//! Category sidebar.
//!
//! Lists category names with their subcategory labels indented beneath.
//! Subcategories are decorative: they never filter the article list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Categorie\u{00eb}n",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for category in app.categories.snapshot() {
        lines.push(Line::from(Span::styled(
            category.name.clone(),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )));
        if let Some(subcategories) = &category.subcategories {
            for sub in subcategories {
                lines.push(Line::from(Span::styled(
                    format!("  {}", sub),
                    Style::default().fg(palette.dim),
                )));
            }
        }
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
