//! Author database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Author;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub second_name: String,
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

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        super::author_book_link::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::author_book_link::Relation::Author.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Author {
            id: model.id,
            first_name: model.first_name,
            second_name: model.second_name,
        }
    }
}
