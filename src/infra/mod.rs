//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection pool, bootstrap and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for repository access and transaction scoping

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{ensure_database_exists, Database, Migrator};
pub use repositories::{BookRepository, BookStore};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockBookRepository;
