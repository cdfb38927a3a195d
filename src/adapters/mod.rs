//! Concrete implementations of trait abstractions.
//!
//! - [`RestContentStore`] - production store client using reqwest
//! - [`MockContentStore`] - configurable test double

pub mod mock;
pub mod rest_store;

pub use mock::MockContentStore;
pub use rest_store::RestContentStore;
