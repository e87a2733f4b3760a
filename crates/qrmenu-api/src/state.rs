//! Shared application state, built once at start-up.

use std::sync::Arc;

use qrmenu_core::repositories::{Repositories, StoreHealth};
use qrmenu_core::services::{
    AuthService, CategoryService, DishService, MenuService, OwnershipService, RestaurantService,
    ShareSettings,
};
use qrmenu_security::{PasswordError, PasswordParams, PasswordService};
use qrmenu_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthService>,
    pub restaurants: Arc<RestaurantService>,
    pub categories: Arc<CategoryService>,
    pub dishes: Arc<DishService>,
    pub menus: Arc<MenuService>,
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Wires every service around the given store.
    pub fn new(config: AppConfig, repos: Repositories) -> Result<Self, PasswordError> {
        let passwords = PasswordService::new(PasswordParams {
            memory_kib: config.auth.argon2_memory_kib,
            iterations: config.auth.argon2_iterations,
            parallelism: config.auth.argon2_parallelism,
        })?;

        let ownership = Arc::new(OwnershipService::new(
            repos.restaurants.clone(),
            repos.categories.clone(),
            repos.dishes.clone(),
            repos.menus.clone(),
        ));

        let share = ShareSettings {
            public_base_url: config.app.public_base_url.clone(),
            qr_service_url: config.qr.image_service_url.clone(),
            qr_size: config.qr.size,
        };

        Ok(Self {
            auth: Arc::new(AuthService::new(
                repos.users.clone(),
                repos.sessions.clone(),
                passwords,
                config.auth.session_ttl_secs,
            )),
            restaurants: Arc::new(RestaurantService::new(repos.clone(), ownership.clone())),
            categories: Arc::new(CategoryService::new(
                repos.categories.clone(),
                repos.dishes.clone(),
                ownership.clone(),
            )),
            dishes: Arc::new(DishService::new(repos.dishes.clone(), ownership.clone())),
            menus: Arc::new(MenuService::new(repos.clone(), ownership, share)),
            health: repos.health,
            config: Arc::new(config),
        })
    }
}
