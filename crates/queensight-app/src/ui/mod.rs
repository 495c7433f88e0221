//! UI components.

pub(crate) mod controls;
pub(crate) mod grid;
pub(crate) mod status_line;
