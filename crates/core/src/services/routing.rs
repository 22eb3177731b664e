//! Role-based landing destination resolution.

use tanzconnect_common::AppResult;
use tanzconnect_db::{
    entities::account,
    repositories::{EntrepreneurProfileRepository, InvestorProfileRepository},
};

/// Where a visitor lands after the root route inspects their session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    EntrepreneurProfileCreate,
    EntrepreneurDashboard,
    InvestorProfileCreate,
    InvestorDashboard,
}

impl Destination {
    /// Path the destination redirects to.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::EntrepreneurProfileCreate => "/entrepreneur/profile/create",
            Self::EntrepreneurDashboard => "/entrepreneur/dashboard",
            Self::InvestorProfileCreate => "/investor/profile/create",
            Self::InvestorDashboard => "/investor/dashboard",
        }
    }
}

/// Resolves the landing destination for a visitor.
#[derive(Clone)]
pub struct RoutingService {
    entrepreneur_repo: EntrepreneurProfileRepository,
    investor_repo: InvestorProfileRepository,
}

impl RoutingService {
    /// Create a new routing service.
    #[must_use]
    pub const fn new(
        entrepreneur_repo: EntrepreneurProfileRepository,
        investor_repo: InvestorProfileRepository,
    ) -> Self {
        Self {
            entrepreneur_repo,
            investor_repo,
        }
    }

    /// Resolve where a visitor should land.
    ///
    /// No session goes to login. A session with a profile goes to the role's
    /// dashboard; without one, to the role's profile creation form. Any role
    /// other than entrepreneur routes to the investor side.
    pub async fn destination(&self, account: Option<&account::Model>) -> AppResult<Destination> {
        let Some(account) = account else {
            return Ok(Destination::Login);
        };

        if account.user_type.is_entrepreneur() {
            if self.has_entrepreneur_profile(&account.id).await {
                Ok(Destination::EntrepreneurDashboard)
            } else {
                Ok(Destination::EntrepreneurProfileCreate)
            }
        } else if self.has_investor_profile(&account.id).await {
            Ok(Destination::InvestorDashboard)
        } else {
            Ok(Destination::InvestorProfileCreate)
        }
    }

    /// Check for an entrepreneur profile, treating lookup failure as absent.
    async fn has_entrepreneur_profile(&self, account_id: &str) -> bool {
        match self.entrepreneur_repo.find_by_user_id(account_id).await {
            Ok(profile) => profile.is_some(),
            Err(e) => {
                tracing::warn!(account_id = account_id, error = %e, "Entrepreneur profile lookup failed, routing to creation");
                false
            }
        }
    }

    /// Check for an investor profile, treating lookup failure as absent.
    async fn has_investor_profile(&self, account_id: &str) -> bool {
        match self.investor_repo.find_by_user_id(account_id).await {
            Ok(profile) => profile.is_some(),
            Err(e) => {
                tracing::warn!(account_id = account_id, error = %e, "Investor profile lookup failed, routing to creation");
                false
            }
        }
    }
}
