//! Gids TUI - a terminal reader for the Nederlandse Gids article service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod events;
pub mod loader;
pub mod models;
pub mod prelude;
pub mod traits;
pub mod ui;
