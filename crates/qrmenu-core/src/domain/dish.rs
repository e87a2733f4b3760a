// ============================================================================
// QR Menu Core - Dish Entity
// File: crates/qrmenu-core/src/domain/dish.rs
// ============================================================================

use chrono::{DateTime, Utc};
use qrmenu_shared::types::double_option;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{apply_name, clean_text, Price};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Uuid,
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Dish name must be between 1 and 200 characters"))]
    pub name: String,

    pub description: Option<String>,
    pub price: Price,
    pub image: Option<String>,
    /// Unavailable dishes stay on the dashboard but are hidden from public menus.
    pub available: bool,
    pub display_order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewDish {
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub image: Option<String>,
    pub available: Option<bool>,
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishChanges {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    pub available: Option<bool>,
    pub display_order: Option<i32>,
}

impl Dish {
    pub fn new(input: NewDish) -> Result<Self, DomainError> {
        let now = Utc::now();
        let dish = Self {
            id: Uuid::new_v4(),
            category_id: input.category_id,
            name: input.name.trim().to_string(),
            description: clean_text(input.description),
            price: input.price,
            image: clean_text(input.image),
            available: input.available.unwrap_or(true),
            display_order: input.display_order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        dish.validate()?;
        Ok(dish)
    }

    pub fn apply(&mut self, changes: DishChanges) -> Result<(), DomainError> {
        apply_name(&mut self.name, changes.name);
        if let Some(description) = changes.description {
            self.description = clean_text(description);
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(image) = changes.image {
            self.image = clean_text(image);
        }
        if let Some(available) = changes.available {
            self.available = available;
        }
        if let Some(display_order) = changes.display_order {
            self.display_order = display_order;
        }
        self.updated_at = Utc::now();

        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Dish {
        Dish::new(NewDish {
            category_id: Uuid::new_v4(),
            name: "Tea".to_string(),
            description: None,
            price: Price::from_decimal(2.5).unwrap(),
            image: None,
            available: None,
            display_order: None,
        })
        .unwrap()
    }

    #[test]
    fn test_new_dish_is_available() {
        let dish = tea();
        assert!(dish.available);
        assert_eq!(dish.price.cents(), 250);
    }

    #[test]
    fn test_apply_price_string_and_availability() {
        let mut dish = tea();
        let changes: DishChanges =
            serde_json::from_str(r#"{"price":"3.10","available":false}"#).unwrap();
        dish.apply(changes).unwrap();
        assert_eq!(dish.price.cents(), 310);
        assert!(!dish.available);
    }
}
