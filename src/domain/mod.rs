//! Domain layer - Core business entities
//!
//! This module contains the catalog models independent of
//! infrastructure concerns: the book aggregate plus the shapes
//! accepted from and returned to clients.

pub mod book;

pub use book::{
    Author, AuthorInput, AuthorResponse, Book, BookResponse, CreateBook, UpdateBook,
};
