//! Unit of Work pattern implementation.
//!
//! Centralizes repository access for the service layer and owns the
//! request-scoped transaction boundary: every repository operation runs
//! inside exactly one transaction that is committed on success and rolled
//! back on error.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::repositories::{BookRepository, BookStore};
use crate::errors::{AppError, AppResult};

/// Boxed future borrowed from a transaction
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories.
pub trait UnitOfWork: Send + Sync {
    /// Get book repository
    fn books(&self) -> Arc<dyn BookRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    book_repo: Arc<BookStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let book_repo = Arc::new(BookStore::new(db));
        Self { book_repo }
    }
}

impl UnitOfWork for Persistence {
    fn books(&self) -> Arc<dyn BookRepository> {
        self.book_repo.clone()
    }
}

/// Execute a closure within a transaction.
///
/// The transaction is committed when the closure succeeds and rolled back
/// when it fails. If the future is dropped midway the transaction is rolled
/// back when `DatabaseTransaction` drops.
pub(crate) async fn in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db.begin().await.map_err(AppError::from)?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
