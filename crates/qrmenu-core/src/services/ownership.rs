//! Ownership checks for mutating operations.
//!
//! Categories, dishes and menus are owned transitively through their
//! restaurant. Each `require_*` returns the loaded entity so callers do not
//! fetch it twice.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{Category, Dish, Menu, Restaurant};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, DishRepository, MenuRepository, RestaurantRepository};

pub struct OwnershipService {
    restaurants: Arc<dyn RestaurantRepository>,
    categories: Arc<dyn CategoryRepository>,
    dishes: Arc<dyn DishRepository>,
    menus: Arc<dyn MenuRepository>,
}

impl OwnershipService {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        categories: Arc<dyn CategoryRepository>,
        dishes: Arc<dyn DishRepository>,
        menus: Arc<dyn MenuRepository>,
    ) -> Self {
        Self {
            restaurants,
            categories,
            dishes,
            menus,
        }
    }

    pub async fn require_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Restaurant, DomainError> {
        let restaurant = self
            .restaurants
            .find_by_id(&restaurant_id)
            .await?
            .ok_or(DomainError::RestaurantNotFound)?;

        if !restaurant.is_owned_by(user_id) {
            warn!("User {} denied access to restaurant {}", user_id, restaurant_id);
            return Err(DomainError::NotOwner("restaurant"));
        }

        debug!("User {} owns restaurant {}", user_id, restaurant_id);
        Ok(restaurant)
    }

    pub async fn require_category(
        &self,
        user_id: Uuid,
        category_id: Uuid,
    ) -> Result<Category, DomainError> {
        let category = self
            .categories
            .find_by_id(&category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;

        self.require_parent(user_id, category.restaurant_id, "category")
            .await?;
        Ok(category)
    }

    pub async fn require_dish(&self, user_id: Uuid, dish_id: Uuid) -> Result<Dish, DomainError> {
        let dish = self
            .dishes
            .find_by_id(&dish_id)
            .await?
            .ok_or(DomainError::DishNotFound)?;

        let category = self
            .categories
            .find_by_id(&dish.category_id)
            .await?
            .ok_or(DomainError::DishNotFound)?;
        self.require_parent(user_id, category.restaurant_id, "dish")
            .await?;
        Ok(dish)
    }

    pub async fn require_menu(&self, user_id: Uuid, menu_id: Uuid) -> Result<Menu, DomainError> {
        let menu = self
            .menus
            .find_by_id(&menu_id)
            .await?
            .ok_or(DomainError::MenuNotFound)?;

        self.require_parent(user_id, menu.restaurant_id, "menu").await?;
        Ok(menu)
    }

    async fn require_parent(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
        resource: &'static str,
    ) -> Result<(), DomainError> {
        match self.restaurants.find_by_id(&restaurant_id).await? {
            Some(restaurant) if restaurant.is_owned_by(user_id) => Ok(()),
            Some(_) => {
                warn!("User {} denied access to {} of restaurant {}", user_id, resource, restaurant_id);
                Err(DomainError::NotOwner(resource))
            }
            // Orphans are treated as owned by nobody.
            None => Err(DomainError::NotOwner(resource)),
        }
    }
}
