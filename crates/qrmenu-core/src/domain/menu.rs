// ============================================================================
// QR Menu Core - Menu Entity
// File: crates/qrmenu-core/src/domain/menu.rs
// ============================================================================

use chrono::{DateTime, Utc};
use qrmenu_shared::constants::MAX_SLUG_LENGTH;
use qrmenu_shared::utils::is_valid_slug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{apply_name, CategoryWithDishes, Restaurant};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Uuid,
    pub restaurant_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Menu name must be between 1 and 200 characters"))]
    pub name: String,

    /// Globally unique, immutable after creation.
    pub slug: String,
    pub is_public: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub restaurant_id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChanges {
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

impl Menu {
    pub fn new(input: NewMenu) -> Result<Self, DomainError> {
        let slug = input.slug.trim().to_string();
        if slug.len() > MAX_SLUG_LENGTH || !is_valid_slug(&slug) {
            return Err(DomainError::ValidationError(
                "Slug may only contain lowercase letters, digits, hyphens and underscores".to_string(),
            ));
        }

        let now = Utc::now();
        let menu = Self {
            id: Uuid::new_v4(),
            restaurant_id: input.restaurant_id,
            name: input.name.trim().to_string(),
            slug,
            is_public: input.is_public.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        menu.validate()?;
        Ok(menu)
    }

    pub fn apply(&mut self, changes: MenuChanges) -> Result<(), DomainError> {
        apply_name(&mut self.name, changes.name);
        if let Some(is_public) = changes.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Utc::now();

        self.validate()?;
        Ok(())
    }
}

/// Restaurant fields exposed on the public page, without owner data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicRestaurant {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub theme: String,
    pub categories: Vec<CategoryWithDishes>,
}

impl PublicRestaurant {
    pub fn new(restaurant: Restaurant, categories: Vec<CategoryWithDishes>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            location: restaurant.location,
            phone: restaurant.phone,
            email: restaurant.email,
            logo: restaurant.logo,
            theme: restaurant.theme,
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMenu {
    #[serde(flatten)]
    pub menu: Menu,
    pub restaurant: PublicRestaurant,
}

/// Shareable public link and the QR image that encodes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    pub url: String,
    pub qr_code_url: String,
}

impl ShareLinks {
    pub fn for_slug(public_base_url: &str, qr_service_url: &str, qr_size: u32, slug: &str) -> Self {
        let url = format!("{}/menu/{}", public_base_url.trim_end_matches('/'), slug);
        let qr_code_url = format!(
            "{}?size={}x{}&data={}",
            qr_service_url,
            qr_size,
            qr_size,
            urlencoding::encode(&url)
        );
        Self { url, qr_code_url }
    }
}
