//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    /// Fails with `EmailAlreadyExists` when the unique constraint is hit.
    async fn create(&self, user: &User) -> Result<User, DomainError>;
    async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), DomainError>;
}
