//! CLI command handlers

pub mod commands;

pub use commands::{fetch, run, show_config};
