//! TrainHub server - Training modules and personal inventories over HTTP
//!
//! Records live in two JSON files (`users.json`, `trainings.json`), each
//! loaded whole at startup and rewritten atomically after every change.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, inventories, trainings and passwords
//! - **services**: Application use cases
//! - **infra**: JSON record store, repositories, barcode API client
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//!
//! # Show store files and record counts
//! cargo run -- stores status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Training, User};
pub use errors::{AppError, AppResult};
pub use infra::{JsonStore, Record, StoreError};
