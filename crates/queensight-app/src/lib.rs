//! Shared library module for the Queensight app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod state;
pub mod ui;
pub mod worker;
