//! Create investor profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InvestorProfile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InvestorProfile::UserId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::InvestorName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::InvestorType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::InvestmentRangeMinTzs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::InvestmentRangeMaxTzs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::PreferredIndustries)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::Location)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::Phone)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InvestorProfile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(InvestorProfile::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_investor_profile_account")
                            .from(InvestorProfile::Table, InvestorProfile::UserId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: investor_type (institutional investors get the post-project
        // surface)
        manager
            .create_index(
                Index::create()
                    .name("idx_investor_profile_type")
                    .table(InvestorProfile::Table)
                    .col(InvestorProfile::InvestorType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InvestorProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum InvestorProfile {
    Table,
    UserId,
    InvestorName,
    InvestorType,
    InvestmentRangeMinTzs,
    InvestmentRangeMaxTzs,
    PreferredIndustries,
    Location,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
}
