//! Prelude module for convenient imports.
//!
//! ```ignore
//! use gids::prelude::*;
//! ```

// Core application types
pub use crate::app::{App, AppMessage, Screen, Theme};

// Model types
pub use crate::models::{Article, Category, IMAGE_PLACEHOLDER};

// Collection loading
pub use crate::loader::{CollectionLoader, LoadPhase};

// Store collaborator
pub use crate::adapters::{MockContentStore, RestContentStore};
pub use crate::traits::{ContentStore, StoreError};

// Configuration
pub use crate::config::Config;

// UI entry point
pub use crate::ui::{render, Palette};
