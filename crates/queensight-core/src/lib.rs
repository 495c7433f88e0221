//! Core data structures for the Queensight N-Queens visualizer.
//!
//! This crate provides the board model and the placement safety check used
//! by the backtracking engine. It is pure data: no timing, no cancellation,
//! no I/O.
//!
//! # Overview
//!
//! - [`cell`]: the per-cell visualization state ([`CellState`])
//! - [`position`]: board coordinates ([`Position`])
//! - [`size`]: validated board size ([`BoardSize`], 1-10)
//! - [`board`]: the N×N grid itself ([`Board`])
//! - [`safety`]: the leftward attack check ([`is_safe`])
//!
//! # Examples
//!
//! ```
//! use queensight_core::{Board, BoardSize, CellState, Position, is_safe};
//!
//! let size = BoardSize::new(4).unwrap();
//! let mut board = Board::new(size);
//!
//! // Column 0 is empty, so every row is safe.
//! assert!(is_safe(&board, 1, 0));
//!
//! board.set(Position::new(1, 0), CellState::Queen);
//!
//! // (1, 1) shares a row, (2, 1) shares a diagonal.
//! assert!(!is_safe(&board, 1, 1));
//! assert!(!is_safe(&board, 2, 1));
//! assert!(is_safe(&board, 3, 1));
//! ```

pub mod board;
pub mod cell;
pub mod position;
pub mod safety;
pub mod size;

pub use self::{
    board::Board,
    cell::CellState,
    position::Position,
    safety::is_safe,
    size::{BoardSize, BoardSizeError},
};
