//! Home screen: greeting plus the article card list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::{format_date, truncate};
use super::theme::Palette;
use crate::app::App;

/// Lines occupied by the greeting and section heading.
const HEADER_LINES: u16 = 4;

/// Lines per rendered card, including the trailing blank line.
const LINES_PER_CARD: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Welkom bij Nederlandse Gids",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Uitgelichte Artikelen",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let articles = app.articles.snapshot();

    if articles.is_empty() {
        let hint = if app.articles.is_settled() {
            "Geen artikelen gevonden."
        } else {
            "Artikelen laden\u{2026}"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(palette.dim),
        )));
    }

    for (index, article) in articles.iter().enumerate() {
        let selected = index == app.list_index;
        let marker = if selected { "\u{25b8} " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
        };
        let dim = Style::default().fg(palette.dim);

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(article.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {} \u{2022} {}", article.category, article.read_time),
            dim,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate(&article.excerpt, area.width.saturating_sub(4) as usize)),
            Style::default().fg(palette.fg),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} \u{00b7} {}",
                article.author,
                format_date(&article.created_at)
            ),
            dim,
        )));
        lines.push(Line::default());
    }

    // Keep the highlighted card in view
    let selected_top = HEADER_LINES + app.list_index as u16 * LINES_PER_CARD;
    let offset = (selected_top + LINES_PER_CARD).saturating_sub(area.height);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        area,
    );
}
