//! Service Container - Centralized service access.
//!
//! Manages service lifecycle and hands out trait objects so handlers
//! depend on service traits, not implementations.

use std::sync::Arc;

use super::BookService;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get book service
    fn books(&self) -> Arc<dyn BookService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    book_service: Arc<dyn BookService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        use super::BookManager;

        let uow = Arc::new(Persistence::new(db));
        let book_service = Arc::new(BookManager::new(uow));

        Self { book_service }
    }
}

impl ServiceContainer for Services {
    fn books(&self) -> Arc<dyn BookService> {
        self.book_service.clone()
    }
}
