//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `stores status` - Report store files and record counts

pub mod args;

pub use args::{Cli, Commands};
