//! Account entity (email, credentials, and marketplace role).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketplace role chosen at registration. Immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[sea_orm(string_value = "entrepreneur")]
    Entrepreneur,
    #[sea_orm(string_value = "individual_investor")]
    IndividualInvestor,
    #[sea_orm(string_value = "institutional_investor")]
    InstitutionalInvestor,
}

impl UserType {
    /// Whether this account lands on the entrepreneur side of the site.
    ///
    /// Both investor variants share one dashboard path.
    #[must_use]
    pub const fn is_entrepreneur(self) -> bool {
        matches!(self, Self::Entrepreneur)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub email: String,

    /// Uniqueness is enforced here, case-insensitively
    #[sea_orm(unique)]
    pub email_lower: String,

    /// Role chosen at registration
    pub user_type: UserType,

    /// Password hash (Argon2)
    #[serde(skip_serializing)]
    pub password: String,

    /// Opaque session token, rotated on logout
    #[sea_orm(unique, nullable)]
    pub token: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::entrepreneur_profile::Entity")]
    EntrepreneurProfile,

    #[sea_orm(has_one = "super::investor_profile::Entity")]
    InvestorProfile,
}

impl Related<super::entrepreneur_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntrepreneurProfile.def()
    }
}

impl Related<super::investor_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestorProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
