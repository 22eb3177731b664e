//! Business logic services.

pub mod account;
pub mod entrepreneur_profile;
pub mod investor_profile;
pub mod routing;

pub use account::{AccountService, LoginInput, RegisterInput};
pub use entrepreneur_profile::{CreateEntrepreneurProfileInput, EntrepreneurProfileService};
pub use investor_profile::{CreateInvestorProfileInput, InvestorProfileService};
pub use routing::{Destination, RoutingService};
