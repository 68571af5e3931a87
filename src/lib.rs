//! Library Catalog - Books and authors API
//!
//! A small REST service over a relational catalog: books, authors and the
//! links between them, built with Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Book aggregate plus input and output shapes
//! - **services**: Catalog use cases
//! - **infra**: Database pool, migrations, entities, repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (pagination, acknowledgements)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the database if needed
//! cargo run -- create-db
//!
//! # Start the server (runs migrations on startup)
//! cargo run -- serve
//!
//! # Inspect migrations
//! cargo run -- migrate status
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
pub use domain::{Book, BookResponse, CreateBook, UpdateBook};
pub use errors::{AppError, AppResult};
pub use infra::Database;
