//! Keyboard event handling.
//!
//! Maps key presses to state transitions on the [`App`]. Kept free of
//! terminal I/O so the mapping can be tested directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

/// Lines scrolled per PageUp/PageDown in the detail view.
const PAGE_SCROLL: u16 = 10;

/// Apply a key press to the application state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.mark_dirty();

    // Global keybinds (always active)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        _ => {}
    }

    match app.screen {
        Screen::Home => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter => app.select_highlighted(),
            _ => {}
        },
        Screen::ArticleDetail => match key.code {
            KeyCode::Esc | KeyCode::Backspace => app.go_back(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(1),
            KeyCode::PageUp => app.scroll_detail_up(PAGE_SCROLL),
            KeyCode::PageDown => app.scroll_detail_down(PAGE_SCROLL),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::MockContentStore;
    use crate::app::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Arc::new(MockContentStore::new()))
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn enter_on_empty_snapshot_is_a_no_op() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Home);
        assert!(app.selected.is_none());
    }

    #[test]
    fn toggles_work_from_any_screen() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.theme, Theme::Dark);
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert!(app.menu_open);
        // Neither toggle moved the router
        assert_eq!(app.screen, Screen::Home);
        assert!(app.selected.is_none());
    }

    #[test]
    fn esc_leaves_detail_for_home() {
        let mut app = test_app();
        app.articles.begin();
        app.articles.complete(vec![crate::models::Article {
            id: "a1".to_string(),
            title: "Voorbeeld".to_string(),
            excerpt: String::new(),
            content: "<p>Hallo</p>".to_string(),
            author: String::new(),
            category: String::new(),
            read_time: String::new(),
            image_url: None,
            created_at: chrono::Utc::now(),
        }]);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::ArticleDetail);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Home);
        assert!(app.selected.is_none());
    }
}
