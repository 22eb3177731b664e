//! Investor profile entity (one investment profile per account).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of investor behind the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum InvestorType {
    #[sea_orm(string_value = "individual")]
    Individual,
    #[sea_orm(string_value = "institutional")]
    Institutional,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "investor_profile")]
pub struct Model {
    /// Same as account.id (1:1 relationship)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    /// Personal or organization name
    pub investor_name: String,

    pub investor_type: InvestorType,

    /// Lower bound of the ticket size in actual TZS
    pub investment_range_min_tzs: i64,

    /// Upper bound of the ticket size in actual TZS, must exceed the minimum
    pub investment_range_max_tzs: i64,

    /// Non-empty JSON array of industry names
    #[sea_orm(column_type = "JsonBinary")]
    pub preferred_industries: Json,

    pub location: String,

    pub phone: String,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::UserId",
        to = "super::account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
