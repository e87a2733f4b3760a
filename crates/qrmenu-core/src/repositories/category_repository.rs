//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Category;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Ordered by `display_order` ascending.
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Category>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError>;
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;
    async fn update(&self, category: &Category) -> Result<Category, DomainError>;
    /// Cascades to dishes.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
