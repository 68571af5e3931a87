//! Book aggregate and its input/output shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{DEFAULT_PRICE, MAX_NAME_LENGTH, MAX_TITLE_LENGTH, MIN_PRICE_EXCLUSIVE};

/// Author as seen by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
}

/// Book domain entity with its authors loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub title_book: String,
    pub price: f64,
    pub adding_date: DateTime<Utc>,
    pub authors: Vec<Author>,
}

/// Author names supplied when creating a book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Validate, ToSchema)]
pub struct AuthorInput {
    /// Author first name
    #[validate(length(max = MAX_NAME_LENGTH, message = "first_name must be at most 20 characters"))]
    #[schema(example = "Frank", max_length = 20)]
    pub first_name: String,
    /// Author second name
    #[validate(length(max = MAX_NAME_LENGTH, message = "second_name must be at most 20 characters"))]
    #[schema(example = "Herbert", max_length = 20)]
    pub second_name: String,
}

/// Book creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    /// Book title
    #[validate(length(max = MAX_TITLE_LENGTH, message = "title_book must be at most 50 characters"))]
    #[schema(example = "Dune", max_length = 50)]
    pub title_book: String,
    /// Book price, greater than -1 (defaults to 0)
    #[validate(range(exclusive_min = MIN_PRICE_EXCLUSIVE, message = "price must be greater than -1"))]
    #[schema(example = 9.99)]
    #[serde(default)]
    pub price: Option<f64>,
    /// Authors to link; existing authors are reused by exact name match
    #[validate(nested)]
    #[serde(default)]
    pub authors: Vec<AuthorInput>,
}

impl CreateBook {
    /// Price to store, falling back to the default when omitted
    pub fn price_or_default(&self) -> f64 {
        self.price.unwrap_or(DEFAULT_PRICE)
    }

    /// Author inputs with repeated name pairs removed, first occurrence kept
    pub fn distinct_authors(&self) -> Vec<AuthorInput> {
        let mut seen = std::collections::HashSet::new();
        self.authors
            .iter()
            .filter(|a| seen.insert((*a).clone()))
            .cloned()
            .collect()
    }
}

/// Book update data transfer object; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    /// New title
    #[validate(length(max = MAX_TITLE_LENGTH, message = "title_book must be at most 50 characters"))]
    #[schema(example = "Dune Messiah", max_length = 50)]
    pub title_book: Option<String>,
    /// New price, greater than -1
    #[validate(range(exclusive_min = MIN_PRICE_EXCLUSIVE, message = "price must be greater than -1"))]
    #[schema(example = 12.5)]
    pub price: Option<f64>,
}

impl UpdateBook {
    /// Whether any field was supplied
    pub fn has_changes(&self) -> bool {
        self.title_book.is_some() || self.price.is_some()
    }
}

/// Author representation returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    #[schema(example = "Frank")]
    pub first_name: String,
    #[schema(example = "Herbert")]
    pub second_name: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            first_name: author.first_name,
            second_name: author.second_name,
        }
    }
}

/// Book representation returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    /// Book identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Book title
    #[schema(example = "Dune")]
    pub title_book: String,
    /// Book price
    #[schema(example = 9.99)]
    pub price: f64,
    /// When the book was added to the catalog
    pub adding_date: DateTime<Utc>,
    /// Linked authors
    pub authors: Vec<AuthorResponse>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title_book: book.title_book,
            price: book.price,
            adding_date: book.adding_date,
            authors: book.authors.into_iter().map(AuthorResponse::from).collect(),
        }
    }
}
