//! Snapshot consumers.

use queensight_core::Board;

/// Receives one board snapshot per state change, in mutation order.
///
/// The engine calls [`publish`](Self::publish) immediately after every
/// board mutation and before the pause that follows it. Implementations
/// must not mutate search state; they only observe.
pub trait SnapshotSink {
    /// Consumes a snapshot of the full board.
    fn publish(&mut self, board: &Board);
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn publish(&mut self, board: &Board) {
        (**self).publish(board);
    }
}

/// A sink that clones every snapshot into a `Vec`, in publication order.
///
/// Useful for tests and for replaying a finished run.
#[derive(Debug, Default)]
pub struct RecordingSink {
    snapshots: Vec<Board>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshots received so far, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Consumes the sink and returns the recorded snapshots.
    #[must_use]
    pub fn into_snapshots(self) -> Vec<Board> {
        self.snapshots
    }
}

impl SnapshotSink for RecordingSink {
    fn publish(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }
}
