//! # QR Menu Core - Domain Module
//!
//! Domain entities for the menu application.

pub mod user;
pub mod price;
pub mod restaurant;
pub mod category;
pub mod dish;
pub mod menu;

// Re-export all entities and enums
pub use user::{User, UserRole};
pub use price::Price;
pub use restaurant::{NewRestaurant, Restaurant, RestaurantChanges, RestaurantDetail, RestaurantSummary};
pub use category::{Category, CategoryChanges, CategoryWithDishes, NewCategory};
pub use dish::{Dish, DishChanges, NewDish};
pub use menu::{Menu, MenuChanges, NewMenu, PublicMenu, PublicRestaurant, ShareLinks};

/// Trims optional free text; blank strings become `None`.
pub(crate) fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Applies a rename only when the new name is present and non-blank.
pub(crate) fn apply_name(target: &mut String, name: Option<String>) {
    if let Some(name) = clean_text(name) {
        *target = name;
    }
}
