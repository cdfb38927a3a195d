//! Type definitions for the application state.

/// Represents which screen is currently active.
///
/// The detail screen is reachable only through selecting an article, and
/// home only through going back (or the initial state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    ArticleDetail,
}

/// Display mode for the whole shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
