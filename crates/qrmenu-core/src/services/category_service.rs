//! Category operations

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::OwnershipService;
use crate::domain::{Category, CategoryChanges, CategoryWithDishes, Dish, NewCategory};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, DishRepository};

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    dishes: Arc<dyn DishRepository>,
    ownership: Arc<OwnershipService>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        dishes: Arc<dyn DishRepository>,
        ownership: Arc<OwnershipService>,
    ) -> Self {
        Self {
            categories,
            dishes,
            ownership,
        }
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<CategoryWithDishes>, DomainError> {
        categories_with_dishes(
            self.categories.as_ref(),
            self.dishes.as_ref(),
            restaurant_id,
            false,
        )
        .await
    }

    pub async fn create(&self, user_id: Uuid, input: NewCategory) -> Result<Category, DomainError> {
        self.ownership
            .require_restaurant(user_id, input.restaurant_id)
            .await?;

        let category = Category::new(input)?;
        let created = self.categories.create(&category).await?;
        info!("Category {} created in restaurant {}", created.id, created.restaurant_id);
        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        category_id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Category, DomainError> {
        let mut category = self.ownership.require_category(user_id, category_id).await?;
        category.apply(changes)?;
        self.categories.update(&category).await
    }

    pub async fn delete(&self, user_id: Uuid, category_id: Uuid) -> Result<(), DomainError> {
        self.ownership.require_category(user_id, category_id).await?;
        if !self.categories.delete(&category_id).await? {
            return Err(DomainError::CategoryNotFound);
        }
        info!("Category {} deleted", category_id);
        Ok(())
    }
}

/// Loads a restaurant's categories with their dishes, both in display order.
/// With `only_available`, unavailable dishes are left out.
pub(crate) async fn categories_with_dishes(
    categories: &dyn CategoryRepository,
    dishes: &dyn DishRepository,
    restaurant_id: Uuid,
    only_available: bool,
) -> Result<Vec<CategoryWithDishes>, DomainError> {
    let categories = categories.list_by_restaurant(&restaurant_id).await?;
    if categories.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = categories.iter().map(|c| c.id).collect();
    let mut grouped: HashMap<Uuid, Vec<Dish>> = HashMap::new();
    for dish in dishes.list_by_categories(&ids).await? {
        if only_available && !dish.available {
            continue;
        }
        grouped.entry(dish.category_id).or_default().push(dish);
    }

    Ok(categories
        .into_iter()
        .map(|category| {
            let dishes = grouped.remove(&category.id).unwrap_or_default();
            CategoryWithDishes { category, dishes }
        })
        .collect())
}
