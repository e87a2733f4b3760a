//! Restaurant operations

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::category_service::categories_with_dishes;
use super::OwnershipService;
use crate::domain::{NewRestaurant, Restaurant, RestaurantChanges, RestaurantDetail, RestaurantSummary};
use crate::error::DomainError;
use crate::repositories::Repositories;

pub struct RestaurantService {
    repos: Repositories,
    ownership: Arc<OwnershipService>,
}

impl RestaurantService {
    pub fn new(repos: Repositories, ownership: Arc<OwnershipService>) -> Self {
        Self { repos, ownership }
    }

    /// The owner's restaurants, each with its categories.
    pub async fn list_for_owner(&self, user_id: Uuid) -> Result<Vec<RestaurantSummary>, DomainError> {
        let restaurants = self.repos.restaurants.list_by_owner(&user_id).await?;
        let mut summaries = Vec::with_capacity(restaurants.len());
        for restaurant in restaurants {
            let categories = self
                .repos
                .categories
                .list_by_restaurant(&restaurant.id)
                .await?;
            summaries.push(RestaurantSummary {
                restaurant,
                categories,
            });
        }
        Ok(summaries)
    }

    pub async fn get_detail(&self, restaurant_id: Uuid) -> Result<RestaurantDetail, DomainError> {
        let restaurant = self
            .repos
            .restaurants
            .find_by_id(&restaurant_id)
            .await?
            .ok_or(DomainError::RestaurantNotFound)?;

        let categories = categories_with_dishes(
            self.repos.categories.as_ref(),
            self.repos.dishes.as_ref(),
            restaurant.id,
            false,
        )
        .await?;

        Ok(RestaurantDetail {
            restaurant,
            categories,
        })
    }

    pub async fn create(&self, user_id: Uuid, input: NewRestaurant) -> Result<Restaurant, DomainError> {
        let restaurant = Restaurant::new(user_id, input)?;
        let created = self.repos.restaurants.create(&restaurant).await?;
        info!("Restaurant {} created for user {}", created.id, user_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
        changes: RestaurantChanges,
    ) -> Result<Restaurant, DomainError> {
        let mut restaurant = self
            .ownership
            .require_restaurant(user_id, restaurant_id)
            .await?;
        restaurant.apply(changes)?;
        self.repos.restaurants.update(&restaurant).await
    }

    /// Deletes the restaurant together with its categories, dishes and menus.
    pub async fn delete(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), DomainError> {
        self.ownership
            .require_restaurant(user_id, restaurant_id)
            .await?;
        if !self.repos.restaurants.delete(&restaurant_id).await? {
            return Err(DomainError::RestaurantNotFound);
        }
        info!("Restaurant {} deleted by user {}", restaurant_id, user_id);
        Ok(())
    }
}
