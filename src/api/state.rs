//! Application state - Dependency injection container.
//!
//! Provides centralized access to the catalog service and the connection pool.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{BookService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Book catalog service
    pub book_service: Arc<dyn BookService>,
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database pool.
    ///
    /// Builds the service container, which wires the Unit of Work and
    /// repositories on top of the pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let container = Services::from_connection(database.get_connection());

        Self {
            book_service: container.books(),
            database,
        }
    }
}
