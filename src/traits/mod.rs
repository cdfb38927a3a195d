//! Trait abstractions for external collaborators.
//!
//! The content store is injected behind a trait so loaders and the app can
//! be exercised in tests without network access.

pub mod store;

pub use store::{ContentStore, StoreError};
