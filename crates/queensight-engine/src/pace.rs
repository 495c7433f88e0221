//! Pacing between snapshots.

use std::time::Duration;

/// Controls how the engine suspends between snapshots.
///
/// The engine itself never sleeps; it asks its pacer to pause so the
/// consumer can render the snapshot just published. Production code uses
/// [`SleepPacer`]; tests and headless runs use [`NoPacer`].
pub trait Pacer {
    /// Suspends the calling task for roughly `duration`.
    fn pause(&self, duration: Duration);
}

/// A pacer that blocks the current thread with [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// A pacer that returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&self, _duration: Duration) {}
}
