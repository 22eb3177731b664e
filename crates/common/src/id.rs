//! ID generation utilities.

use ulid::Ulid;
use uuid::Uuid;

/// ID generator for entities.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new ULID-based ID.
    ///
    /// ULIDs are lexicographically sortable and shorter than UUIDs when
    /// represented as strings, which keeps account IDs readable in logs.
    #[must_use]
    pub fn generate(&self) -> String {
        Ulid::new().to_string().to_lowercase()
    }

    /// Generate an opaque session token.
    #[must_use]
    pub fn generate_token(&self) -> String {
        // UUID v4: no time component in tokens
        Uuid::new_v4().simple().to_string()
    }
}
