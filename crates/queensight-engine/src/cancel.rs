//! Cooperative cancellation.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A shared, monotonic cancellation flag for one run.
///
/// Cloned handles all observe the same flag. [`cancel`](Self::cancel) may be
/// called from any thread at any time; the running engine polls the flag at
/// its suspension points, so a cancellation becomes effective within at most
/// one pause interval, never instantaneously. The flag only ever moves
/// false→true. Create a fresh token per run instead of reusing one: that
/// keeps a cancel scoped to exactly the run it targeted, even when the
/// request races the run starting or finishing.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Cooperative: in-flight work stops at its next
    /// poll point, not immediately.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
