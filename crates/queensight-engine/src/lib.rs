//! The cancellable backtracking engine behind the Queensight visualizer.
//!
//! This crate drives a depth-first, column-by-column N-Queens search that
//! publishes a board snapshot after every state change and pauses between
//! snapshots so a consumer can animate the search. The search is
//! cooperatively cancellable: a [`CancelToken`] may be set from any thread
//! and is observed by the engine at its suspension points, within at most
//! one pause interval.
//!
//! # Overview
//!
//! - [`cancel`]: the shared cancellation flag ([`CancelToken`])
//! - [`sink`]: where snapshots go ([`SnapshotSink`], [`RecordingSink`])
//! - [`pace`]: how the engine pauses between snapshots ([`Pacer`])
//! - [`engine`]: the recursive search itself ([`SearchEngine`])
//! - [`outcome`]: terminal results ([`RunOutcome`], [`RunReport`])
//! - [`controller`]: single-run orchestration ([`RunController`])
//!
//! # Examples
//!
//! ```
//! use queensight_core::BoardSize;
//! use queensight_engine::{CancelToken, NoPacer, RecordingSink, RunController, RunOutcome};
//!
//! let controller = RunController::default();
//! let token = CancelToken::new();
//! let mut sink = RecordingSink::new();
//!
//! let report = controller
//!     .solve(BoardSize::new(4).unwrap(), &token, &mut sink, &NoPacer)
//!     .expect("no other run is active");
//!
//! assert_eq!(report.outcome, RunOutcome::Solved);
//! assert!(report.board.is_valid_solution());
//! ```

pub mod cancel;
pub mod controller;
pub mod engine;
pub mod outcome;
pub mod pace;
pub mod sink;

pub use self::{
    cancel::CancelToken,
    controller::RunController,
    engine::{DEFAULT_STEP_DELAY, SearchEngine},
    outcome::{RunOutcome, RunReport},
    pace::{NoPacer, Pacer, SleepPacer},
    sink::{RecordingSink, SnapshotSink},
};
