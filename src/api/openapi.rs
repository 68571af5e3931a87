//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::book_handler;
use crate::domain::{AuthorInput, AuthorResponse, BookResponse, CreateBook, UpdateBook};
use crate::types::Acknowledgement;

/// OpenAPI documentation for the Library Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Books and authors catalog backed by PostgreSQL",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        book_handler::create_book,
        book_handler::list_books,
        book_handler::get_book,
        book_handler::update_book,
        book_handler::delete_book,
    ),
    components(
        schemas(
            AuthorInput,
            AuthorResponse,
            BookResponse,
            CreateBook,
            UpdateBook,
            Acknowledgement,
        )
    ),
    tags(
        (name = "Books", description = "Book catalog operations")
    )
)]
pub struct ApiDoc;
