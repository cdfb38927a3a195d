//! Render smoke tests on a TestBackend.

mod common;

use common::{sample_article, sample_articles, sample_category, TestAppBuilder};
use gids::app::AppMessage;
use gids::ui::render;
use ratatui::{backend::TestBackend, Terminal};

/// Collect the backend buffer into one searchable string.
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

#[test]
fn home_screen_shows_greeting_and_cards() {
    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::ArticlesLoaded(sample_articles()));

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Welkom bij Nederlandse Gids"));
    assert!(text.contains("Uitgelichte Artikelen"));
    assert!(text.contains("Voorbeeld"));
    assert!(text.contains("Fietsen door Utrecht"));
    assert!(text.contains("Jan de Vries"));
}

#[test]
fn empty_home_screen_shows_loading_hint() {
    let app = TestAppBuilder::new().build();

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Artikelen laden"));
}

#[test]
fn detail_screen_renders_content_verbatim() {
    let mut article = sample_article("a1", "Voorbeeld", 0);
    article.content = "<p>Hallo</p>".to_string();

    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::ArticlesLoaded(vec![article]));
    app.select_article_at(0);

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Voorbeeld"));
    assert!(text.contains("<p>Hallo</p>"));
    assert!(text.contains("terug (esc)"));
    // No image on the fixture, so the placeholder shows
    assert!(text.contains("/api/placeholder/800/400"));
}

#[test]
fn open_menu_renders_categories_sidebar() {
    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::CategoriesLoaded(vec![
        sample_category("c1", "Reizen", &["Steden", "Natuur"]),
        sample_category("c2", "Cultuur", &[]),
    ]));
    app.toggle_menu();

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Categorie"));
    assert!(text.contains("Reizen"));
    assert!(text.contains("Steden"));
    assert!(text.contains("Cultuur"));
}

#[test]
fn sidebar_with_failed_categories_renders_empty() {
    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::CategoriesLoadFailed {
        error: "server error".to_string(),
    });
    app.toggle_menu();

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    // Heading only; no category names, no crash
    let text = buffer_text(&terminal);
    assert!(text.contains("Categorie"));
    assert!(!text.contains("Reizen"));
}

#[test]
fn both_themes_render_without_panicking() {
    let mut app = TestAppBuilder::new().build();
    app.handle_message(AppMessage::ArticlesLoaded(sample_articles()));

    let mut terminal = test_terminal();
    terminal.draw(|f| render(f, &app)).unwrap();

    app.toggle_theme();
    terminal.draw(|f| render(f, &app)).unwrap();
}
