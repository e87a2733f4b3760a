//! Restaurant repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Restaurant;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Restaurant>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Restaurant>, DomainError>;
    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError>;
    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError>;
    /// Cascades to categories, dishes and menus. Returns false when nothing was deleted.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
