//! Database entities.

pub mod account;
pub mod entrepreneur_profile;
pub mod investor_profile;

pub use account::Entity as Account;
pub use entrepreneur_profile::Entity as EntrepreneurProfile;
pub use investor_profile::Entity as InvestorProfile;
