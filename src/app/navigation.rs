//! Navigation and shell-toggle methods for the App.

use super::{App, Screen};

impl App {
    /// Move card selection up on the home screen.
    pub fn move_up(&mut self) {
        if self.list_index > 0 {
            self.list_index -= 1;
        }
    }

    /// Move card selection down on the home screen.
    pub fn move_down(&mut self) {
        let len = self.articles.snapshot().len();
        if len > 0 && self.list_index < len - 1 {
            self.list_index += 1;
        }
    }

    /// Open the detail view for the article at `index` in the current
    /// snapshot.
    ///
    /// Out-of-range indices are ignored, so selection can only ever land on
    /// a member of the last-loaded snapshot and the detail screen is never
    /// entered without a selected article.
    pub fn select_article_at(&mut self, index: usize) {
        let Some(article) = self.articles.snapshot().get(index) else {
            return;
        };
        self.selected = Some(article.clone());
        self.screen = Screen::ArticleDetail;
        self.detail_scroll = 0;
    }

    /// Open the currently highlighted card.
    pub fn select_highlighted(&mut self) {
        self.select_article_at(self.list_index);
    }

    /// Return to the home screen, clearing the selection. Idempotent when
    /// already there.
    pub fn go_back(&mut self) {
        self.selected = None;
        self.screen = Screen::Home;
        self.detail_scroll = 0;
    }

    /// Flip the light/dark display mode.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Show or hide the category sidebar.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll the detail view up by `lines`.
    pub fn scroll_detail_up(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_sub(lines);
    }

    /// Scroll the detail view down by `lines`.
    pub fn scroll_detail_down(&mut self, lines: u16) {
        self.detail_scroll = self.detail_scroll.saturating_add(lines);
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
