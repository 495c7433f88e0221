//! Terminal run results.

use queensight_core::Board;

/// How a search run ended.
///
/// Every run terminates in exactly one of these; none of them is an error.
/// Exhaustion (no solution exists) and cancellation are ordinary outcomes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum RunOutcome {
    /// A complete valid placement was found; first solution wins.
    #[display("solved")]
    Solved,
    /// The search space was exhausted without a solution.
    #[display("exhausted")]
    Exhausted,
    /// Cancellation was requested and observed before the search finished.
    #[display("cancelled")]
    Cancelled,
}

/// The outcome of a run together with its terminal board.
///
/// `Solved` carries the solution, `Exhausted` carries a cleared board, and
/// `Cancelled` carries the board exactly as last mutated. The
/// Exhausted/Cancelled asymmetry is deliberate.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// The board accompanying the outcome.
    pub board: Board,
}
