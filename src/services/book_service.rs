//! Book service - Catalog use cases.
//!
//! Orchestrates repository access via the Unit of Work and turns missing
//! rows into `NotFound` errors.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Book, CreateBook, UpdateBook};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::PageParams;

/// Book service trait for dependency injection.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Create a book, reusing authors that already exist
    async fn create_book(&self, input: CreateBook) -> AppResult<Book>;

    /// List books ordered by adding date; the limit is clamped to the maximum
    async fn list_books(&self, page: PageParams) -> AppResult<Vec<Book>>;

    /// Get one book with its authors
    async fn get_book(&self, id: i32) -> AppResult<Book>;

    /// Update the supplied fields of a book
    async fn update_book(&self, id: i32, changes: UpdateBook) -> AppResult<Book>;

    /// Delete a book
    async fn delete_book(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookService using Unit of Work.
pub struct BookManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookManager<U> {
    /// Create new book service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BookService for BookManager<U> {
    async fn create_book(&self, input: CreateBook) -> AppResult<Book> {
        let book = self.uow.books().create(input).await?;
        tracing::info!(book_id = book.id, authors = book.authors.len(), "Book created");
        Ok(book)
    }

    async fn list_books(&self, page: PageParams) -> AppResult<Vec<Book>> {
        self.uow.books().list(page.offset(), page.limit()).await
    }

    async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.uow.books().find_by_id(id).await?.ok_or_not_found("Book")
    }

    async fn update_book(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        let book = self.uow.books().update(id, changes).await?;
        tracing::info!(book_id = id, "Book updated");
        Ok(book)
    }

    async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.uow.books().delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{Author, AuthorInput};
    use crate::errors::AppError;
    use crate::infra::{BookRepository, MockBookRepository};

    /// Test UnitOfWork that hands out a mocked repository
    struct TestUnitOfWork {
        book_repo: Arc<MockBookRepository>,
    }

    impl TestUnitOfWork {
        fn new(book_repo: MockBookRepository) -> Self {
            Self {
                book_repo: Arc::new(book_repo),
            }
        }
    }

    impl UnitOfWork for TestUnitOfWork {
        fn books(&self) -> Arc<dyn BookRepository> {
            self.book_repo.clone()
        }
    }

    fn service(repo: MockBookRepository) -> BookManager<TestUnitOfWork> {
        BookManager::new(Arc::new(TestUnitOfWork::new(repo)))
    }

    fn create_test_book(id: i32) -> Book {
        Book {
            id,
            title_book: "Dune".to_string(),
            price: 9.99,
            adding_date: Utc::now(),
            authors: vec![Author {
                id: 1,
                first_name: "Frank".to_string(),
                second_name: "Herbert".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_create_book_passes_input_through() {
        let mut repo = MockBookRepository::new();
        repo.expect_create()
            .withf(|input| input.title_book == "Dune" && input.authors.len() == 1)
            .times(1)
            .returning(|_| Ok(create_test_book(1)));

        let input = CreateBook {
            title_book: "Dune".to_string(),
            price: Some(9.99),
            authors: vec![AuthorInput {
                first_name: "Frank".to_string(),
                second_name: "Herbert".to_string(),
            }],
        };

        let book = service(repo).create_book(input).await.unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.authors[0].first_name, "Frank");
        assert_eq!(book.authors[0].second_name, "Herbert");
    }

    #[tokio::test]
    async fn test_list_books_clamps_limit() {
        let mut repo = MockBookRepository::new();
        repo.expect_list()
            .with(eq(10), eq(100))
            .times(1)
            .returning(|_, _| Ok(vec![create_test_book(11), create_test_book(12)]));

        let books = service(repo)
            .list_books(PageParams::new(10, 1_000))
            .await
            .unwrap();
        assert_eq!(books.len(), 2);
    }

    #[tokio::test]
    async fn test_get_book_success() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(create_test_book(id))));

        let book = service(repo).get_book(7).await.unwrap();
        assert_eq!(book.id, 7);
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repo).get_book(404).await;
        assert!(matches!(result, Err(AppError::NotFound("Book"))));
    }

    #[tokio::test]
    async fn test_update_book_forwards_partial_changes() {
        let mut repo = MockBookRepository::new();
        repo.expect_update()
            .withf(|id, changes| *id == 3 && changes.title_book.is_none() && changes.price == Some(1.5))
            .returning(|id, changes| {
                let mut book = create_test_book(id);
                book.price = changes.price.unwrap_or(book.price);
                Ok(book)
            });

        let changes = UpdateBook {
            title_book: None,
            price: Some(1.5),
        };
        let book = service(repo).update_book(3, changes).await.unwrap();
        assert_eq!(book.price, 1.5);
        assert_eq!(book.title_book, "Dune");
    }

    #[tokio::test]
    async fn test_delete_book_propagates_not_found() {
        let mut repo = MockBookRepository::new();
        repo.expect_delete()
            .with(eq(9))
            .returning(|_| Err(AppError::NotFound("Book")));

        let result = service(repo).delete_book(9).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
