//! # CLI Layer
//!
//! One possible UI client for roomlist. This is the only place that knows
//! about the terminal: it parses arguments, builds the API over a
//! `FileStore`, and renders `CmdResult`s.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
