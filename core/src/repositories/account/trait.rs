//! Account repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for Account entities.
//! The trait is async-first and uses Result types for proper error handling;
//! concrete database implementations live in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// This trait defines the contract for data access operations related to
/// accounts. Implementations handle the actual database operations while
/// maintaining the abstraction boundary between domain and infrastructure
/// layers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized email address
    ///
    /// This is a pure read: no side effects may be observable to callers.
    ///
    /// # Arguments
    /// * `email` - Normalized (trimmed, lower-cased) email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account registered for the email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Replace an account's password
    ///
    /// The implementation is responsible for hashing `new_password` before
    /// storing it; this crate never handles hashing.
    ///
    /// # Arguments
    /// * `id` - The account's unique identifier
    /// * `new_password` - The replacement password in clear text
    ///
    /// # Returns
    /// * `Ok(())` - Password updated
    /// * `Err(DomainError)` - Account missing or database error
    async fn update_password(&self, id: Uuid, new_password: &str) -> Result<(), DomainError>;
}
