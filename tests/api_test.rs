//! Integration tests for the catalog endpoints.
//!
//! Each test builds the full router over a fresh in-memory SQLite database
//! with migrations applied, and drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

use library_catalog::api::{create_router, AppState};
use library_catalog::infra::repositories::entities::{AuthorBookLinkEntity, AuthorEntity};
use library_catalog::infra::Database;

// =============================================================================
// Test Helpers
// =============================================================================

/// Router plus a handle on the same database for row counts
async fn test_app() -> (Router, Database) {
    let db = Database::connect_url("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open");
    db.run_migrations().await.expect("migrations should apply");

    let state = AppState::from_database(Arc::new(db.clone()));
    (create_router(state), db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn create_book(app: &Router, title: &str, price: f64, authors: &[(&str, &str)]) -> Value {
    let authors: Vec<Value> = authors
        .iter()
        .map(|(first, second)| json!({ "first_name": first, "second_name": second }))
        .collect();

    let (status, body) = send(
        app,
        "POST",
        "/books/",
        Some(json!({ "title_book": title, "price": price, "authors": authors })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {}", body);
    body
}

async fn author_count(db: &Database) -> u64 {
    AuthorEntity::find().count(db.connection()).await.unwrap()
}

async fn link_count(db: &Database) -> u64 {
    AuthorBookLinkEntity::find().count(db.connection()).await.unwrap()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_book_returns_book_with_authors() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/books/",
        Some(json!({
            "title_book": "Dune",
            "price": 9.99,
            "authors": [{ "first_name": "Frank", "second_name": "Herbert" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["title_book"], "Dune");
    assert_eq!(body["price"], 9.99);
    assert!(body["adding_date"].is_string());
    assert_eq!(
        body["authors"],
        json!([{ "first_name": "Frank", "second_name": "Herbert" }])
    );
}

#[tokio::test]
async fn test_create_book_links_each_distinct_author() {
    let (app, db) = test_app().await;

    let body = create_book(
        &app,
        "Good Omens",
        12.0,
        &[("Terry", "Pratchett"), ("Neil", "Gaiman")],
    )
    .await;

    assert_eq!(body["authors"].as_array().unwrap().len(), 2);
    assert_eq!(author_count(&db).await, 2);
    assert_eq!(link_count(&db).await, 2);
}

#[tokio::test]
async fn test_create_book_collapses_repeated_author_pair() {
    let (app, db) = test_app().await;

    let body = create_book(
        &app,
        "Mort",
        7.0,
        &[("Terry", "Pratchett"), ("Terry", "Pratchett")],
    )
    .await;

    assert_eq!(body["authors"].as_array().unwrap().len(), 1);
    assert_eq!(author_count(&db).await, 1);
    assert_eq!(link_count(&db).await, 1);
}

#[tokio::test]
async fn test_identical_author_is_reused_across_books() {
    let (app, db) = test_app().await;

    create_book(&app, "Dune", 9.99, &[("Frank", "Herbert")]).await;
    create_book(&app, "Dune Messiah", 8.5, &[("Frank", "Herbert")]).await;

    assert_eq!(author_count(&db).await, 1);
    assert_eq!(link_count(&db).await, 2);
}

#[tokio::test]
async fn test_create_book_defaults_price_and_allows_no_authors() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "POST", "/books/", Some(json!({ "title_book": "Anonymous" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 0.0);
    assert_eq!(body["authors"], json!([]));
}

#[tokio::test]
async fn test_create_book_rejects_invalid_fields() {
    let (app, db) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/books/",
        Some(json!({ "title_book": "x".repeat(51), "price": -1, "authors": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        "POST",
        "/books/",
        Some(json!({
            "title_book": "Dune",
            "authors": [{ "first_name": "Frank", "second_name": "A-name-well-over-twenty" }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(author_count(&db).await, 0);
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_get_book_returns_authors() {
    let (app, _db) = test_app().await;
    let created = create_book(&app, "Dune", 9.99, &[("Frank", "Herbert")]).await;

    let (status, body) = send(&app, "GET", &format!("/books/{}", created["id"]), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["title_book"], "Dune");
    assert_eq!(body["price"], 9.99);
    assert_eq!(body["authors"], created["authors"]);
}

#[tokio::test]
async fn test_get_missing_book_returns_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "GET", "/books/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Book not found");
}

#[tokio::test]
async fn test_list_books_in_creation_order_with_authors() {
    let (app, _db) = test_app().await;
    create_book(&app, "First", 1.0, &[("Ann", "Leckie")]).await;
    create_book(&app, "Second", 2.0, &[]).await;
    create_book(&app, "Third", 3.0, &[("Ann", "Leckie"), ("Iain", "Banks")]).await;

    let (status, body) = send(&app, "GET", "/books/", None).await;
    assert_eq!(status, StatusCode::OK);

    let books = body.as_array().unwrap();
    let titles: Vec<&str> = books.iter().map(|b| b["title_book"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
    assert_eq!(books[0]["authors"].as_array().unwrap().len(), 1);
    assert_eq!(books[1]["authors"], json!([]));
    assert_eq!(books[2]["authors"].as_array().unwrap().len(), 2);

    let (_, page) = send(&app, "GET", "/books?offset=1&limit=1", None).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["title_book"], "Second");
}

#[tokio::test]
async fn test_list_books_caps_limit_at_100() {
    let (app, _db) = test_app().await;
    for i in 0..101 {
        create_book(&app, &format!("Volume {}", i), 1.0, &[]).await;
    }

    let (status, body) = send(&app, "GET", "/books/?limit=500", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 100);

    let (_, body) = send(&app, "GET", "/books/", None).await;
    assert_eq!(body.as_array().unwrap().len(), 100);

    let (_, body) = send(&app, "GET", "/books/?offset=100", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_books_rejects_negative_offset() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "GET", "/books/?offset=-1", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_books_rejects_offset_beyond_signed_range() {
    let (app, _db) = test_app().await;
    create_book(&app, "Dune", 9.99, &[]).await;

    let (status, body) = send(&app, "GET", "/books/?offset=9223372036854775808", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, "GET", "/books/?offset=9223372036854775807", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_integer_book_id_is_a_validation_error() {
    let (app, _db) = test_app().await;

    for (method, uri) in [
        ("GET", "/books/abc"),
        ("GET", "/books/99999999999"),
        ("DELETE", "/books/abc"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} {}", method, uri);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    let (status, body) = send(&app, "PATCH", "/books/abc", Some(json!({ "price": 1.0 }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_patch_price_only_keeps_title_and_authors() {
    let (app, _db) = test_app().await;
    let created = create_book(&app, "Dune", 9.99, &[("Frank", "Herbert")]).await;
    let uri = format!("/books/{}", created["id"]);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "price": 15.0 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 15.0);
    assert_eq!(body["title_book"], "Dune");
    assert_eq!(body["authors"], created["authors"]);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_patch_title_and_empty_patch() {
    let (app, _db) = test_app().await;
    let created = create_book(&app, "Dune", 9.99, &[]).await;
    let uri = format!("/books/{}", created["id"]);

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "title_book": "Children of Dune" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title_book"], "Children of Dune");
    assert_eq!(body["price"], 9.99);

    let (status, unchanged) = send(&app, "PATCH", &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, body);
}

#[tokio::test]
async fn test_patch_missing_book_returns_404() {
    let (app, _db) = test_app().await;

    let (status, _) = send(&app, "PATCH", "/books/42", Some(json!({ "price": 1.0 }))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_rejects_out_of_range_price() {
    let (app, _db) = test_app().await;
    let created = create_book(&app, "Dune", 9.99, &[]).await;

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/books/{}", created["id"]),
        Some(json!({ "price": -2.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_book_then_get_returns_404() {
    let (app, db) = test_app().await;
    let created = create_book(&app, "Dune", 9.99, &[("Frank", "Herbert")]).await;
    let uri = format!("/books/{}", created["id"]);

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Ok": true }));

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Links go with the book, the author row stays
    assert_eq!(link_count(&db).await, 0);
    assert_eq!(author_count(&db).await, 1);
}

#[tokio::test]
async fn test_delete_missing_book_returns_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "DELETE", "/books/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Book not found");
}

// =============================================================================
// Operational endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books/{book_id}"].is_object());
}
