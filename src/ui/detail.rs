//! Article detail screen: the reading view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::helpers::format_date;
use super::theme::Palette;
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    // The router never enters this screen without a selection; render an
    // empty hint rather than panicking if state is ever inconsistent.
    let Some(article) = app.selected.as_ref() else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Geen artikel geselecteerd.",
                Style::default().fg(palette.dim),
            )),
            area,
        );
        return;
    };

    let dim = Style::default().fg(palette.dim);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("\u{2190} terug (esc)", dim)),
        Line::default(),
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            article.author.clone(),
            Style::default().fg(palette.fg),
        )),
        Line::from(Span::styled(
            format!(
                "{} \u{2022} {}",
                format_date(&article.created_at),
                article.read_time
            ),
            dim,
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("[afbeelding: {}]", article.image_or_placeholder()),
            dim,
        )),
        Line::default(),
    ];

    // Body is trusted markup from the store; rendered verbatim
    for raw in article.content.lines() {
        lines.push(Line::from(Span::styled(
            raw.to_string(),
            Style::default().fg(palette.fg),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0)),
        area,
    );
}
