//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `create-db` - Database bootstrap

pub mod args;

pub use args::{Cli, Commands};
