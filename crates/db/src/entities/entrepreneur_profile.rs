//! Entrepreneur profile entity (one business profile per account).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Business maturity stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[sea_orm(string_value = "idea")]
    Idea,
    #[sea_orm(string_value = "startup")]
    Startup,
    #[sea_orm(string_value = "growth")]
    Growth,
}

/// Moderation state of a profile. Mutated by an out-of-scope review process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum VerificationStatus {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Whether a verified profile is shown to investors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum VisibilityStatus {
    #[sea_orm(string_value = "hidden")]
    #[default]
    Hidden,
    #[sea_orm(string_value = "visible")]
    Visible,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entrepreneur_profile")]
pub struct Model {
    /// Same as account.id (1:1 relationship)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    pub business_name: String,

    pub industry: String,

    pub stage: Stage,

    /// Requested funding in actual TZS, 100K to 500M
    pub funding_needed_tzs: i64,

    pub location: String,

    pub phone: String,

    /// Short description visible to all investors, 280 chars max
    #[sea_orm(column_type = "Text")]
    pub public_pitch: String,

    /// Detailed description shared after an investor shows interest
    #[sea_orm(column_type = "Text", nullable)]
    pub extended_summary: Option<String>,

    /// Registered with BRELA (required for Startup/Growth stage)
    pub business_registered: bool,

    pub has_revenue: bool,

    #[sea_orm(default_value = 0)]
    pub months_operating: i32,

    pub verification_status: VerificationStatus,

    pub visibility_status: VisibilityStatus,

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
