// ============================================================================
// QR Menu Core - Category Entity
// File: crates/qrmenu-core/src/domain/category.rs
// ============================================================================

use chrono::{DateTime, Utc};
use qrmenu_shared::types::double_option;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{apply_name, clean_text, Dish};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub restaurant_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Category name must be between 1 and 200 characters"))]
    pub name: String,

    pub description: Option<String>,
    /// Ascending sort key; gaps and ties are allowed.
    pub display_order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChanges {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub display_order: Option<i32>,
}

impl Category {
    pub fn new(input: NewCategory) -> Result<Self, DomainError> {
        let now = Utc::now();
        let category = Self {
            id: Uuid::new_v4(),
            restaurant_id: input.restaurant_id,
            name: input.name.trim().to_string(),
            description: clean_text(input.description),
            display_order: input.display_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        category.validate()?;
        Ok(category)
    }

    pub fn apply(&mut self, changes: CategoryChanges) -> Result<(), DomainError> {
        apply_name(&mut self.name, changes.name);
        if let Some(description) = changes.description {
            self.description = clean_text(description);
        }
        if let Some(display_order) = changes.display_order {
            self.display_order = display_order;
        }
        self.updated_at = Utc::now();

        self.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithDishes {
    #[serde(flatten)]
    pub category: Category,
    pub dishes: Vec<Dish>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_category_defaults_order() {
        let category = Category::new(NewCategory {
            restaurant_id: Uuid::new_v4(),
            name: "Drinks".to_string(),
            description: None,
            display_order: None,
        })
        .unwrap();
        assert_eq!(category.display_order, 0);
    }

    #[test]
    fn test_apply_display_order() {
        let mut category = Category::new(NewCategory {
            restaurant_id: Uuid::new_v4(),
            name: "Drinks".to_string(),
            description: Some("Hot and cold".to_string()),
            display_order: Some(3),
        })
        .unwrap();
        let changes: CategoryChanges =
            serde_json::from_str(r#"{"displayOrder":1,"description":null}"#).unwrap();
        category.apply(changes).unwrap();
        assert_eq!(category.display_order, 1);
        assert_eq!(category.description, None);
        assert_eq!(category.name, "Drinks");
    }
}
