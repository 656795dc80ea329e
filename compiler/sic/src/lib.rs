//! S command-line front end.
//!
//! Loads programs (from a file or typed in), hands them to `s_eval`, and
//! turns a fatal interpreter error into a message and an exit status.
//! `main.rs` only parses arguments.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
