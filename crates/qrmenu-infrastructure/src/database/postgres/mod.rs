//! PostgreSQL repository implementations

pub mod user_repo_impl;
pub mod session_repo_impl;
pub mod restaurant_repo_impl;
pub mod category_repo_impl;
pub mod dish_repo_impl;
pub mod menu_repo_impl;

use async_trait::async_trait;
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::StoreHealth;
use sqlx::PgPool;

use super::map_db_error;

pub use user_repo_impl::PgUserRepository;
pub use session_repo_impl::PgSessionRepository;
pub use restaurant_repo_impl::PgRestaurantRepository;
pub use category_repo_impl::PgCategoryRepository;
pub use dish_repo_impl::PgDishRepository;
pub use menu_repo_impl::PgMenuRepository;

pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("pinging store", e))?;
        Ok(())
    }
}
