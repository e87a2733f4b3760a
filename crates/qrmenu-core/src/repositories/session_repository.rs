//! Session repository trait (port)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qrmenu_security::Session;

use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &Session) -> Result<(), DomainError>;
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError>;
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), DomainError>;
    /// Returns the number of sessions removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
