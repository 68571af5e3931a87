//! Book repository implementation.
//!
//! Every method runs in its own transaction. Author rows are shared between
//! books and resolved by exact name match (find-or-create).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    LoaderTrait, ModelTrait, NotSet, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::{author, author_book_link, book};
use crate::domain::{Author, AuthorInput, Book, CreateBook, UpdateBook};
use crate::errors::{AppError, AppResult};
use crate::infra::unit_of_work::in_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Book repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book, resolving or creating each author and linking them
    async fn create(&self, book: CreateBook) -> AppResult<Book>;

    /// List books ordered by adding date, authors included
    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<Book>>;

    /// Find book by ID, authors included
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Apply the supplied fields; authors are never touched
    async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book>;

    /// Delete a book and its author links (authors themselves are kept)
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BookRepository
pub struct BookStore {
    db: DatabaseConnection,
}

impl BookStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookStore {
    async fn create(&self, input: CreateBook) -> AppResult<Book> {
        in_transaction(&self.db, move |txn| Box::pin(insert_book(txn, input))).await
    }

    async fn list(&self, offset: u64, limit: u64) -> AppResult<Vec<Book>> {
        in_transaction(&self.db, move |txn| Box::pin(select_page(txn, offset, limit))).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        in_transaction(&self.db, move |txn| Box::pin(select_book(txn, id))).await
    }

    async fn update(&self, id: i32, changes: UpdateBook) -> AppResult<Book> {
        in_transaction(&self.db, move |txn| Box::pin(apply_changes(txn, id, changes))).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        in_transaction(&self.db, move |txn| Box::pin(remove_book(txn, id))).await
    }
}

async fn insert_book(txn: &DatabaseTransaction, input: CreateBook) -> AppResult<Book> {
    let active_model = book::ActiveModel {
        id: NotSet,
        title_book: Set(input.title_book.clone()),
        price: Set(input.price_or_default()),
        adding_date: Set(Utc::now()),
    };
    let model = active_model.insert(txn).await?;

    let mut authors = Vec::with_capacity(input.authors.len());
    for author_input in input.distinct_authors() {
        let author = find_or_create_author(txn, &author_input).await?;
        link_author(txn, author.id, model.id).await?;
        authors.push(author);
    }

    tracing::debug!(book_id = model.id, authors = authors.len(), "Book inserted");
    Ok(into_book(model, authors))
}

async fn select_page(txn: &DatabaseTransaction, offset: u64, limit: u64) -> AppResult<Vec<Book>> {
    let models = book::Entity::find()
        .order_by_asc(book::Column::AddingDate)
        .order_by_asc(book::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(txn)
        .await?;

    if models.is_empty() {
        return Ok(Vec::new());
    }

    // One batched query for the authors of the whole page
    let authors = models
        .load_many_to_many(author::Entity, author_book_link::Entity, txn)
        .await?;

    Ok(models
        .into_iter()
        .zip(authors)
        .map(|(model, authors)| into_book(model, authors))
        .collect())
}

async fn select_book(txn: &DatabaseTransaction, id: i32) -> AppResult<Option<Book>> {
    let Some(model) = book::Entity::find_by_id(id).one(txn).await? else {
        return Ok(None);
    };

    let authors = load_authors(txn, &model).await?;
    Ok(Some(into_book(model, authors)))
}

async fn apply_changes(txn: &DatabaseTransaction, id: i32, changes: UpdateBook) -> AppResult<Book> {
    let model = book::Entity::find_by_id(id)
        .one(txn)
        .await?
        .ok_or(AppError::NotFound("Book"))?;

    if !changes.has_changes() {
        let authors = load_authors(txn, &model).await?;
        return Ok(into_book(model, authors));
    }

    let mut active: book::ActiveModel = model.clone().into();

    if let Some(title_book) = changes.title_book {
        active.title_book = Set(title_book);
    }
    if let Some(price) = changes.price {
        active.price = Set(price);
    }

    let model = if active.is_changed() {
        active.update(txn).await?
    } else {
        model
    };

    let authors = load_authors(txn, &model).await?;
    Ok(into_book(model, authors))
}

async fn remove_book(txn: &DatabaseTransaction, id: i32) -> AppResult<()> {
    let links = author_book_link::Entity::delete_many()
        .filter(author_book_link::Column::BookId.eq(id))
        .exec(txn)
        .await?;

    let result = book::Entity::delete_by_id(id).exec(txn).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Book"));
    }

    tracing::debug!(book_id = id, links = links.rows_affected, "Book deleted");
    Ok(())
}

/// Look up an author by exact first and second name.
async fn find_author(
    txn: &DatabaseTransaction,
    input: &AuthorInput,
) -> AppResult<Option<author::Model>> {
    author::Entity::find()
        .filter(author::Column::FirstName.eq(input.first_name.as_str()))
        .filter(author::Column::SecondName.eq(input.second_name.as_str()))
        .one(txn)
        .await
        .map_err(AppError::from)
}

/// Reuse the matching author row or insert a new one.
///
/// A concurrent insert of the same names hits the unique index; the conflict
/// is ignored and the winner's row is read back.
async fn find_or_create_author(
    txn: &DatabaseTransaction,
    input: &AuthorInput,
) -> AppResult<author::Model> {
    if let Some(existing) = find_author(txn, input).await? {
        return Ok(existing);
    }

    let active_model = author::ActiveModel {
        id: NotSet,
        first_name: Set(input.first_name.clone()),
        second_name: Set(input.second_name.clone()),
    };

    author::Entity::insert(active_model)
        .on_conflict(
            OnConflict::columns([author::Column::FirstName, author::Column::SecondName])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

    find_author(txn, input).await?.ok_or_else(|| {
        AppError::internal(format!(
            "author {} {} missing after insert",
            input.first_name, input.second_name
        ))
    })
}

/// Insert one authorship link.
async fn link_author(txn: &DatabaseTransaction, author_id: i32, book_id: i32) -> AppResult<()> {
    let link = author_book_link::ActiveModel {
        author_id: Set(author_id),
        book_id: Set(book_id),
    };

    author_book_link::Entity::insert(link)
        .exec_without_returning(txn)
        .await?;
    Ok(())
}

/// Authors linked to a single book, in insertion order.
async fn load_authors(
    txn: &DatabaseTransaction,
    model: &book::Model,
) -> AppResult<Vec<author::Model>> {
    model
        .find_related(author::Entity)
        .order_by_asc(author::Column::Id)
        .all(txn)
        .await
        .map_err(AppError::from)
}

/// Assemble the domain aggregate from its rows.
fn into_book(model: book::Model, mut authors: Vec<author::Model>) -> Book {
    authors.sort_by_key(|a| a.id);

    Book {
        id: model.id,
        title_book: model.title_book,
        price: model.price,
        adding_date: model.adding_date,
        authors: authors.into_iter().map(Author::from).collect(),
    }
}
