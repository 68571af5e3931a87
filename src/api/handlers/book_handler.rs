//! Book catalog handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ValidatedJson, ValidatedPath, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{BookResponse, CreateBook, UpdateBook};
use crate::errors::AppResult;
use crate::types::{Acknowledgement, PageParams};

/// Create book routes.
///
/// Collection paths are registered with and without the trailing slash.
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books/", get(list_books).post(create_book))
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:book_id",
            get(get_book).patch(update_book).delete(delete_book),
        )
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.create_book(payload).await?;
    Ok(Json(BookResponse::from(book)))
}

/// List books ordered by adding date
#[utoipa::path(
    get,
    path = "/books/",
    tag = "Books",
    params(PageParams),
    responses(
        (status = 200, description = "Page of books with their authors", body = [BookResponse]),
        (status = 422, description = "Invalid query parameters")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.book_service.list_books(page).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Get one book
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "Books",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Invalid book ID")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ValidatedPath(book_id): ValidatedPath<i32>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.get_book(book_id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Update the supplied fields of a book
#[utoipa::path(
    patch,
    path = "/books/{book_id}",
    tag = "Books",
    params(("book_id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ValidatedPath(book_id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    let book = state.book_service.update_book(book_id, payload).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "Books",
    params(("book_id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = Acknowledgement),
        (status = 404, description = "Book not found"),
        (status = 422, description = "Invalid book ID")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ValidatedPath(book_id): ValidatedPath<i32>,
) -> AppResult<Json<Acknowledgement>> {
    state.book_service.delete_book(book_id).await?;
    Ok(Json(Acknowledgement::ok()))
}
