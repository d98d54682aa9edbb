//! Command-line front end: one-shot commands and the interactive REPL.

pub mod commands;
pub mod repl;
