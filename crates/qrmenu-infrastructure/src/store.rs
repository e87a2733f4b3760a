//! Store selection: builds every repository port from configuration.

use std::sync::Arc;

use qrmenu_core::repositories::Repositories;
use qrmenu_shared::config::{DatabaseSettings, StoreBackend};
use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::{info, warn};

use crate::database::{
    create_pool, run_migrations, PgCategoryRepository, PgDishRepository, PgMenuRepository,
    PgRestaurantRepository, PgSessionRepository, PgStoreHealth, PgUserRepository,
};
use crate::memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] MigrateError),
}

pub async fn build_repositories(settings: &DatabaseSettings) -> Result<Repositories, StoreError> {
    match settings.backend {
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on restart");
            Ok(memory_repositories())
        }
        StoreBackend::Postgres => {
            let pool = create_pool(settings).await?;
            info!("Database pool ready (max {} connections)", settings.max_connections);
            if settings.auto_migrate {
                run_migrations(&pool).await?;
            }

            Ok(Repositories {
                users: Arc::new(PgUserRepository::new(pool.clone())),
                sessions: Arc::new(PgSessionRepository::new(pool.clone())),
                restaurants: Arc::new(PgRestaurantRepository::new(pool.clone())),
                categories: Arc::new(PgCategoryRepository::new(pool.clone())),
                dishes: Arc::new(PgDishRepository::new(pool.clone())),
                menus: Arc::new(PgMenuRepository::new(pool.clone())),
                health: Arc::new(PgStoreHealth::new(pool)),
            })
        }
    }
}

/// Every port backed by one shared memory store.
pub fn memory_repositories() -> Repositories {
    let store = Arc::new(MemoryStore::new());
    Repositories {
        users: store.clone(),
        sessions: store.clone(),
        restaurants: store.clone(),
        categories: store.clone(),
        dishes: store.clone(),
        menus: store.clone(),
        health: store,
    }
}
