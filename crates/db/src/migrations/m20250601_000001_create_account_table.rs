//! Create account table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Account::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Account::Email).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Account::EmailLower)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Account::UserType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Account::Password).string_len(256).not_null())
                    .col(ColumnDef::new(Account::Token).string_len(64))
                    .col(
                        ColumnDef::new(Account::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Account::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Unique index: email_lower (one account per address, case-insensitive)
        manager
            .create_index(
                Index::create()
                    .name("idx_account_email_lower")
                    .table(Account::Table)
                    .col(Account::EmailLower)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unique index: token
        manager
            .create_index(
                Index::create()
                    .name("idx_account_token")
                    .table(Account::Table)
                    .col(Account::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
    Email,
    EmailLower,
    UserType,
    Password,
    Token,
    CreatedAt,
    UpdatedAt,
}
