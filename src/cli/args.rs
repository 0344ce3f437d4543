//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// TrainHub - Training and inventory API server
#[derive(Parser, Debug)]
#[command(name = "trainhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Inspect the JSON stores
    Stores(StoresArgs),
}

/// Arguments for the serve command
///
/// Unset flags fall back to the environment configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the stores command
#[derive(Parser, Debug)]
pub struct StoresArgs {
    #[command(subcommand)]
    pub action: StoresAction,
}

/// Store inspection actions
#[derive(Subcommand, Debug)]
pub enum StoresAction {
    /// Show file locations and record counts
    Status,
}
