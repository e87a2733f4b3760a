//! Repository traits (ports)

pub mod user_repository;
pub mod session_repository;
pub mod restaurant_repository;
pub mod category_repository;
pub mod dish_repository;
pub mod menu_repository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DomainError;

pub use user_repository::UserRepository;
pub use session_repository::SessionRepository;
pub use restaurant_repository::RestaurantRepository;
pub use category_repository::CategoryRepository;
pub use dish_repository::DishRepository;
pub use menu_repository::MenuRepository;

/// Connectivity probe used by readiness checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}

/// Every port, built once by the chosen store adapter and shared by services.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub dishes: Arc<dyn DishRepository>,
    pub menus: Arc<dyn MenuRepository>,
    pub health: Arc<dyn StoreHealth>,
}
