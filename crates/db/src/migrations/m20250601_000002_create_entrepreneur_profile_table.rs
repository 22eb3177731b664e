//! Create entrepreneur profile table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntrepreneurProfile::Table)
                    .if_not_exists()
                    // user_id is the primary key: the store itself enforces
                    // one profile per account, so a racing double-submit
                    // becomes a unique-violation instead of a duplicate row.
                    .col(
                        ColumnDef::new(EntrepreneurProfile::UserId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::BusinessName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::Industry)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::Stage)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::FundingNeededTzs)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::Location)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::Phone)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::PublicPitch)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EntrepreneurProfile::ExtendedSummary).text())
                    .col(
                        ColumnDef::new(EntrepreneurProfile::BusinessRegistered)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::HasRevenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::MonthsOperating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::VerificationStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::VisibilityStatus)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EntrepreneurProfile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(EntrepreneurProfile::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entrepreneur_profile_account")
                            .from(EntrepreneurProfile::Table, EntrepreneurProfile::UserId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: verification/visibility pair (the investor-facing listing
        // filters on verified + visible profiles)
        manager
            .create_index(
                Index::create()
                    .name("idx_entrepreneur_profile_status")
                    .table(EntrepreneurProfile::Table)
                    .col(EntrepreneurProfile::VerificationStatus)
                    .col(EntrepreneurProfile::VisibilityStatus)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntrepreneurProfile::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum EntrepreneurProfile {
    Table,
    UserId,
    BusinessName,
    Industry,
    Stage,
    FundingNeededTzs,
    Location,
    Phone,
    PublicPitch,
    ExtendedSummary,
    BusinessRegistered,
    HasRevenue,
    MonthsOperating,
    VerificationStatus,
    VisibilityStatus,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Account {
    Table,
    Id,
}
