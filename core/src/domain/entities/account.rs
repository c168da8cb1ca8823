//! Marketplace account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered marketplace account
///
/// Only the fields the password-reset flow traffics in are modelled here;
/// listing history, ratings and media live in their own aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalized email address, unique per account
    pub email: String,

    /// Hashed password; hashing happens outside this crate
    pub password_hash: String,

    /// Public display name shown on listings
    pub display_name: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account
    ///
    /// # Arguments
    ///
    /// * `email` - Normalized email address
    /// * `password_hash` - Already-hashed password
    /// * `display_name` - Public display name
    pub fn new(email: String, password_hash: String, display_name: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            display_name,
            created_at: now,
            updated_at: now,
        }
    }
}
