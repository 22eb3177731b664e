//! Repository layer: thin, keyed access to the store.

mod account;
mod entrepreneur_profile;
mod investor_profile;

pub use account::AccountRepository;
pub use entrepreneur_profile::EntrepreneurProfileRepository;
pub use investor_profile::InvestorProfileRepository;
