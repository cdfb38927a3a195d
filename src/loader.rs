//! Collection loading with replace-on-success snapshot semantics.
//!
//! Each remote collection (articles, categories) is owned by one
//! [`CollectionLoader`]. A loader performs exactly one fetch per activation;
//! the snapshot it holds is always the most recent successful result, never
//! partially overwritten.

use tracing::warn;

/// Load lifecycle for one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch claimed yet
    #[default]
    Idle,
    /// The single fetch has been claimed and not yet settled
    InFlight,
    /// The fetch settled, successfully or not; no retry follows
    Settled,
}

/// In-memory snapshot of one remote collection.
#[derive(Debug)]
pub struct CollectionLoader<T> {
    name: &'static str,
    snapshot: Vec<T>,
    phase: LoadPhase,
}

impl<T> CollectionLoader<T> {
    /// Create an empty loader; `name` identifies the collection in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            snapshot: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }

    /// Claim the single fetch this loader performs per activation.
    ///
    /// Returns true exactly once, on the first call while idle. Callers
    /// spawn the fetch only on a true return, which keeps at most one
    /// request in flight per instance.
    pub fn begin(&mut self) -> bool {
        if self.phase == LoadPhase::Idle {
            self.phase = LoadPhase::InFlight;
            true
        } else {
            false
        }
    }

    /// Replace the snapshot with a completed fetch result.
    pub fn complete(&mut self, items: Vec<T>) {
        self.snapshot = items;
        self.phase = LoadPhase::Settled;
    }

    /// Record a failed fetch.
    ///
    /// The snapshot keeps its prior value (initially empty) and the failure
    /// only reaches the log; there is no retry and no user-facing error.
    pub fn fail(&mut self, error: &str) {
        warn!(
            collection = self.name,
            error, "fetch failed; keeping previous snapshot"
        );
        self.phase = LoadPhase::Settled;
    }

    /// The current collection. Safe at any time; reflects only settled loads.
    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether the one load attempt has settled.
    pub fn is_settled(&self) -> bool {
        self.phase == LoadPhase::Settled
    }
}
