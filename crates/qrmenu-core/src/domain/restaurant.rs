// ============================================================================
// QR Menu Core - Restaurant Entity
// File: crates/qrmenu-core/src/domain/restaurant.rs
// ============================================================================

use chrono::{DateTime, Utc};
use qrmenu_shared::constants::DEFAULT_THEME;
use qrmenu_shared::types::double_option;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{apply_name, clean_text, Category, CategoryWithDishes};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Restaurant name must be between 1 and 200 characters"))]
    pub name: String,

    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Image URL or data URL.
    pub logo: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Theme must be between 1 and 50 characters"))]
    pub theme: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<String>,
}

/// Partial update. Nullable fields distinguish "absent" from explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantChanges {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo: Option<Option<String>>,
    pub theme: Option<String>,
}

impl Restaurant {
    pub fn new(user_id: Uuid, input: NewRestaurant) -> Result<Self, DomainError> {
        let now = Utc::now();
        let restaurant = Self {
            id: Uuid::new_v4(),
            user_id,
            name: input.name.trim().to_string(),
            description: clean_text(input.description),
            location: clean_text(input.location),
            phone: clean_text(input.phone),
            email: clean_text(input.email),
            logo: clean_text(input.logo),
            theme: clean_text(input.theme).unwrap_or_else(|| DEFAULT_THEME.to_string()),
            created_at: now,
            updated_at: now,
        };

        restaurant.validate()?;
        Ok(restaurant)
    }

    pub fn apply(&mut self, changes: RestaurantChanges) -> Result<(), DomainError> {
        apply_name(&mut self.name, changes.name);
        if let Some(description) = changes.description {
            self.description = clean_text(description);
        }
        if let Some(location) = changes.location {
            self.location = clean_text(location);
        }
        if let Some(phone) = changes.phone {
            self.phone = clean_text(phone);
        }
        if let Some(email) = changes.email {
            self.email = clean_text(email);
        }
        if let Some(logo) = changes.logo {
            self.logo = clean_text(logo);
        }
        if let Some(theme) = clean_text(changes.theme) {
            self.theme = theme;
        }
        self.updated_at = Utc::now();

        self.validate()?;
        Ok(())
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Restaurant with its categories, as listed on the owner's dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
}

/// Restaurant with categories and their dishes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub categories: Vec<CategoryWithDishes>,
}
