//! AppMessage handling: applying loader results to state.

use tracing::debug;

use super::{App, AppMessage};

impl App {
    /// Apply a message from a loader task.
    ///
    /// Successful loads replace the corresponding snapshot wholesale;
    /// failures only reach the log and the affected section keeps rendering
    /// its last-known (possibly empty) snapshot.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ArticlesLoaded(articles) => {
                debug!(count = articles.len(), "articles loaded");
                self.articles.complete(articles);
                if self.list_index >= self.articles.snapshot().len() {
                    self.list_index = 0;
                }
            }
            AppMessage::ArticlesLoadFailed { error } => {
                self.articles.fail(&error);
            }
            AppMessage::CategoriesLoaded(categories) => {
                debug!(count = categories.len(), "categories loaded");
                self.categories.complete(categories);
            }
            AppMessage::CategoriesLoadFailed { error } => {
                self.categories.fail(&error);
            }
        }
        self.mark_dirty();
    }
}
