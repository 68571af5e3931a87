//! Book database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title_book: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    /// Set once at insert
    pub adding_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::author_book_link::Entity")]
    AuthorBookLink,
}

impl Related<super::author_book_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorBookLink.def()
    }
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        super::author_book_link::Relation::Author.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::author_book_link::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
