//! Per-cell visualization state.

/// The visualization state of a single board cell.
///
/// `Trying` is transient: it marks the cell currently under evaluation and
/// must never persist past the step that produces or resolves it. A cell
/// holding a committed queen is `Queen`; everything else is `Empty`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// No queen and no attempt in progress.
    #[default]
    Empty,
    /// A committed queen.
    Queen,
    /// A placement currently under evaluation.
    Trying,
}

#[cfg(test)]
mod tests {
    use super::CellState;

    #[test]
    fn default_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
        assert!(CellState::Empty.is_empty());
        assert!(CellState::Queen.is_queen());
        assert!(CellState::Trying.is_trying());
    }
}
