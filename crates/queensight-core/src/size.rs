//! Validated board size.

/// A validated N-Queens board size in the range 1-10.
///
/// The backtracking algorithm is correct for any N ≥ 1; the upper bound is
/// a usability constraint of the visualizer (larger boards animate too
/// slowly to be watchable), enforced once here so the rest of the system
/// never revalidates.
///
/// # Examples
///
/// ```
/// use queensight_core::BoardSize;
///
/// let size = BoardSize::new(8).unwrap();
/// assert_eq!(size.get(), 8);
///
/// assert!(BoardSize::new(0).is_err());
/// assert!(BoardSize::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(u8);

impl BoardSize {
    /// The smallest supported board (a single cell).
    pub const MIN: Self = Self(1);
    /// The largest supported board.
    pub const MAX: Self = Self(10);
    /// The conventional eight-queens board.
    pub const DEFAULT: Self = Self(8);

    /// Creates a board size, rejecting values outside 1-10.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is 0 or greater than 10.
    pub const fn new(size: usize) -> Result<Self, BoardSizeError> {
        if size < Self::MIN.0 as usize || size > Self::MAX.0 as usize {
            return Err(BoardSizeError { size });
        }
        #[expect(clippy::cast_possible_truncation)]
        let size = size as u8;
        Ok(Self(size))
    }

    /// Returns the side length as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a board size is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size must be between 1 and 10, got {size}")]
pub struct BoardSizeError {
    /// The rejected value.
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::BoardSize;

    #[test]
    fn accepts_full_range() {
        for n in 1..=10 {
            assert_eq!(BoardSize::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(BoardSize::new(0).is_err());
        assert!(BoardSize::new(11).is_err());
        assert!(BoardSize::try_from(100).is_err());
    }

    #[test]
    fn error_message_names_value() {
        let err = BoardSize::new(42).unwrap_err();
        assert_eq!(
            err.to_string(),
            "board size must be between 1 and 10, got 42"
        );
    }
}
