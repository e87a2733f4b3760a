//! Dish repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Dish;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Ordered by `display_order` ascending.
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Dish>, DomainError>;
    /// Dishes of several categories in one round trip, ordered by `display_order`.
    async fn list_by_categories(&self, category_ids: &[Uuid]) -> Result<Vec<Dish>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dish>, DomainError>;
    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError>;
    async fn update(&self, dish: &Dish) -> Result<Dish, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
