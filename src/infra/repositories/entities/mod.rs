//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod author;
pub mod author_book_link;
pub mod book;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use author::{ActiveModel as AuthorActiveModel, Entity as AuthorEntity, Model as AuthorModel};
#[allow(unused_imports)]
pub use author_book_link::{ActiveModel as AuthorBookLinkActiveModel, Entity as AuthorBookLinkEntity};
#[allow(unused_imports)]
pub use book::{ActiveModel as BookActiveModel, Entity as BookEntity, Model as BookModel};
