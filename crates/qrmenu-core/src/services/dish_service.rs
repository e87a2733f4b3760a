//! Dish operations

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::OwnershipService;
use crate::domain::{Dish, DishChanges, NewDish};
use crate::error::DomainError;
use crate::repositories::DishRepository;

pub struct DishService {
    dishes: Arc<dyn DishRepository>,
    ownership: Arc<OwnershipService>,
}

impl DishService {
    pub fn new(dishes: Arc<dyn DishRepository>, ownership: Arc<OwnershipService>) -> Self {
        Self { dishes, ownership }
    }

    pub async fn list_for_category(&self, category_id: Uuid) -> Result<Vec<Dish>, DomainError> {
        self.dishes.list_by_category(&category_id).await
    }

    pub async fn create(&self, user_id: Uuid, input: NewDish) -> Result<Dish, DomainError> {
        self.ownership
            .require_category(user_id, input.category_id)
            .await?;

        let dish = Dish::new(input)?;
        let created = self.dishes.create(&dish).await?;
        info!("Dish {} created in category {}", created.id, created.category_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        dish_id: Uuid,
        changes: DishChanges,
    ) -> Result<Dish, DomainError> {
        let mut dish = self.ownership.require_dish(user_id, dish_id).await?;
        dish.apply(changes)?;
        self.dishes.update(&dish).await
    }

    pub async fn delete(&self, user_id: Uuid, dish_id: Uuid) -> Result<(), DomainError> {
        self.ownership.require_dish(user_id, dish_id).await?;
        if !self.dishes.delete(&dish_id).await? {
            return Err(DomainError::DishNotFound);
        }
        info!("Dish {} deleted", dish_id);
        Ok(())
    }
}
