//! Migration: Create book, author and authorbooklink tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Book::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Book::TitleBook).string_len(50).not_null())
                    .col(ColumnDef::new(Book::Price).double().not_null().default(0.0))
                    .col(
                        ColumnDef::new(Book::AddingDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_book_title_book")
                    .table(Book::Table)
                    .col(Book::TitleBook)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Author::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Author::FirstName).string_len(20).not_null())
                    .col(ColumnDef::new(Author::SecondName).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_author_second_name")
                    .table(Author::Table)
                    .col(Author::SecondName)
                    .to_owned(),
            )
            .await?;

        // Guards author find-or-create against concurrent duplicate inserts
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_author_full_name")
                    .table(Author::Table)
                    .col(Author::FirstName)
                    .col(Author::SecondName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthorBookLink::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuthorBookLink::AuthorId).integer().not_null())
                    .col(ColumnDef::new(AuthorBookLink::BookId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(AuthorBookLink::AuthorId)
                            .col(AuthorBookLink::BookId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authorbooklink_author")
                            .from(AuthorBookLink::Table, AuthorBookLink::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_authorbooklink_book")
                            .from(AuthorBookLink::Table, AuthorBookLink::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop the join table first
        manager
            .drop_table(Table::drop().table(AuthorBookLink::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Book {
    Table,
    Id,
    TitleBook,
    Price,
    AddingDate,
}

#[derive(Iden)]
enum Author {
    Table,
    Id,
    FirstName,
    SecondName,
}

#[derive(Iden)]
enum AuthorBookLink {
    #[iden = "authorbooklink"]
    Table,
    AuthorId,
    BookId,
}
