//! Presentation layer: command-line parsing, dispatch and terminal output.

pub mod cli;
pub mod ui;
