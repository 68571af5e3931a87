//! HTTP request handlers.

pub mod book_handler;

pub use book_handler::book_routes;
