//! Menu repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Menu;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Menu>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Menu>, DomainError>;
    /// Single atomic insert; a taken slug fails with `SlugAlreadyExists`.
    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError>;
    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
}
