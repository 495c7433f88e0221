//! Background run execution using a thread and channel.

use std::{sync::mpsc, time::Duration};

use queensight_core::{Board, BoardSize};
use queensight_engine::{
    CancelToken, RunController, RunOutcome, RunReport, SleepPacer, SnapshotSink,
};

/// An event produced by the running search.
#[derive(Debug)]
pub(crate) enum RunEvent {
    /// One board snapshot, in publication order.
    Snapshot(Board),
    /// The terminal result; no further events follow.
    Finished(RunReport),
}

/// Errors that can occur while receiving background run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkerError {
    /// The run channel disconnected before a terminal event arrived.
    #[display("run worker disconnected")]
    Disconnected,
}

/// A handle for polling run events from the UI thread.
#[derive(Debug)]
pub(crate) struct RunHandle {
    receiver: mpsc::Receiver<RunEvent>,
}

impl RunHandle {
    /// Attempts to receive the next pending event without blocking.
    pub(crate) fn poll(&mut self) -> Result<Option<RunEvent>, WorkerError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }
}

/// A sink forwarding snapshots over the run channel.
struct ChannelSink {
    sender: mpsc::Sender<RunEvent>,
}

impl SnapshotSink for ChannelSink {
    fn publish(&mut self, board: &Board) {
        // A send failure means the UI dropped the handle; the run keeps
        // going until cancelled, it just has no audience.
        let _ = self.sender.send(RunEvent::Snapshot(board.clone()));
    }
}

/// Spawns one search run on a background thread and returns a handle for
/// polling its events.
///
/// The token belongs to this run alone; cancelling it is effective at any
/// point in the run's life, including before the worker thread has claimed
/// the controller's single-run guard. A previous, already-cancelled run may
/// still be winding down when this one starts; the worker waits for the
/// guard to be released rather than giving up, so a start issued right
/// after a reset is not lost. Every spawned run sends exactly one
/// [`RunEvent::Finished`].
pub(crate) fn spawn_run(
    controller: RunController,
    size: BoardSize,
    token: CancelToken,
) -> RunHandle {
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let mut sink = ChannelSink {
            sender: sender.clone(),
        };
        let report = loop {
            if token.is_cancelled() {
                // Cancelled before the run could claim the guard.
                break RunReport {
                    outcome: RunOutcome::Cancelled,
                    board: Board::new(size),
                };
            }
            if let Some(report) = controller.solve(size, &token, &mut sink, &SleepPacer) {
                break report;
            }
            std::thread::sleep(Duration::from_millis(1));
        };
        let _ = sender.send(RunEvent::Finished(report));
    });
    RunHandle { receiver }
}
