//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Theme`] - Light or dark display mode
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{Screen, Theme};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::loader::CollectionLoader;
use crate::models::{Article, Category};
use crate::traits::ContentStore;

/// Central application state.
///
/// Owns the view router (screen + selection), both collection loaders and
/// the shell toggles. Nothing here is shared: the event loop is the only
/// writer, and loader tasks communicate through the message channel.
pub struct App {
    /// Which screen is currently displayed
    pub screen: Screen,
    /// The article open in the detail view; `Some` iff `screen` is
    /// [`Screen::ArticleDetail`]
    pub selected: Option<Article>,
    /// Articles snapshot, newest first
    pub articles: CollectionLoader<Article>,
    /// Categories snapshot for the sidebar
    pub categories: CollectionLoader<Category>,
    /// Light/dark display mode
    pub theme: Theme,
    /// Whether the category sidebar is open
    pub menu_open: bool,
    /// Highlighted card index on the home screen
    pub list_index: usize,
    /// Scroll offset within the detail view
    pub detail_scroll: u16,
    /// Set when the user asks to quit
    pub should_quit: bool,
    /// Redraw needed on the next loop iteration
    pub needs_redraw: bool,
    /// Injected content store collaborator
    store: Arc<dyn ContentStore>,
    /// Sender cloned into spawned loader tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the initial state: home screen, nothing selected, both
    /// collections empty and unloaded, light theme, menu closed.
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            selected: None,
            articles: CollectionLoader::new("articles"),
            categories: CollectionLoader::new("categories"),
            theme: Theme::default(),
            menu_open: false,
            list_index: 0,
            detail_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            store,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Lifecycle hook run once at activation: spawn each collection's
    /// single fetch. Loaders that already claimed their fetch are skipped,
    /// so calling this again is harmless.
    ///
    /// Results come back as [`AppMessage`]s; if the receiver is gone by
    /// then (the app has shut down), the send fails and the result is
    /// dropped without effect.
    pub fn activate(&mut self) {
        if self.articles.begin() {
            let store = Arc::clone(&self.store);
            let tx = self.message_tx.clone();
            tokio::spawn(async move {
                match store.list_articles().await {
                    Ok(articles) => {
                        let _ = tx.send(AppMessage::ArticlesLoaded(articles));
                    }
                    Err(e) => {
                        let _ = tx.send(AppMessage::ArticlesLoadFailed {
                            error: e.to_string(),
                        });
                    }
                }
            });
        }

        if self.categories.begin() {
            let store = Arc::clone(&self.store);
            let tx = self.message_tx.clone();
            tokio::spawn(async move {
                match store.list_categories().await {
                    Ok(categories) => {
                        let _ = tx.send(AppMessage::CategoriesLoaded(categories));
                    }
                    Err(e) => {
                        let _ = tx.send(AppMessage::CategoriesLoadFailed {
                            error: e.to_string(),
                        });
                    }
                }
            });
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
