//! Request payloads.
//!
//! Required fields are `Option` so that a missing field yields the same
//! envelope message as an empty one, instead of a serde error.

use qrmenu_core::domain::{NewCategory, NewDish, NewMenu, NewRestaurant, Price};
use qrmenu_core::services::RegisterInput;
use qrmenu_shared::utils::parse_uuid;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_id(field: &str, value: &str) -> Result<Uuid, ApiError> {
    parse_uuid(value).ok_or_else(|| ApiError::Validation(format!("{} is not a valid id", field)))
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<RegisterRequest> for RegisterInput {
    type Error = ApiError;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        match (present(req.email), req.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok(RegisterInput {
                email,
                password,
                name: req.name,
            }),
            _ => Err(ApiError::Validation("Email and password are required".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn credentials(self) -> Result<(String, String), ApiError> {
        match (present(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ApiError::Validation("Email and password are required".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub theme: Option<String>,
}

impl TryFrom<CreateRestaurantRequest> for NewRestaurant {
    type Error = ApiError;

    fn try_from(req: CreateRestaurantRequest) -> Result<Self, Self::Error> {
        let name = present(req.name)
            .ok_or_else(|| ApiError::Validation("Restaurant name is required".to_string()))?;
        Ok(NewRestaurant {
            name,
            description: req.description,
            location: req.location,
            phone: req.phone,
            email: req.email,
            logo: req.logo,
            theme: req.theme,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub restaurant_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

impl TryFrom<CreateCategoryRequest> for NewCategory {
    type Error = ApiError;

    fn try_from(req: CreateCategoryRequest) -> Result<Self, Self::Error> {
        let (Some(restaurant_id), Some(name)) = (present(req.restaurant_id), present(req.name))
        else {
            return Err(ApiError::Validation(
                "restaurantId and name are required".to_string(),
            ));
        };
        Ok(NewCategory {
            restaurant_id: parse_id("restaurantId", &restaurant_id)?,
            name,
            description: req.description,
            display_order: req.display_order,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// A number or a numeric string.
    pub price: Option<Value>,
    pub image: Option<String>,
    pub available: Option<bool>,
    pub display_order: Option<i32>,
}

fn parse_price(value: &Value) -> Result<Price, ApiError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ApiError::Validation("Price must be a number".to_string()))
            .and_then(|amount| Price::from_decimal(amount).map_err(ApiError::from)),
        Value::String(s) => Price::parse(s).map_err(ApiError::from),
        _ => Err(ApiError::Validation("Price must be a number".to_string())),
    }
}

impl TryFrom<CreateDishRequest> for NewDish {
    type Error = ApiError;

    fn try_from(req: CreateDishRequest) -> Result<Self, Self::Error> {
        let price = req.price.filter(|p| !p.is_null() && p.as_str() != Some(""));
        let (Some(category_id), Some(name), Some(price)) =
            (present(req.category_id), present(req.name), price)
        else {
            return Err(ApiError::Validation(
                "categoryId, name, and price are required".to_string(),
            ));
        };
        Ok(NewDish {
            category_id: parse_id("categoryId", &category_id)?,
            name,
            description: req.description,
            price: parse_price(&price)?,
            image: req.image,
            available: req.available,
            display_order: req.display_order,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuRequest {
    pub restaurant_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub is_public: Option<bool>,
}

impl TryFrom<CreateMenuRequest> for NewMenu {
    type Error = ApiError;

    fn try_from(req: CreateMenuRequest) -> Result<Self, Self::Error> {
        let (Some(restaurant_id), Some(name), Some(slug)) =
            (present(req.restaurant_id), present(req.name), present(req.slug))
        else {
            return Err(ApiError::Validation(
                "restaurantId, name, and slug are required".to_string(),
            ));
        };
        Ok(NewMenu {
            restaurant_id: parse_id("restaurantId", &restaurant_id)?,
            name,
            slug,
            is_public: req.is_public,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantQuery {
    pub restaurant_id: Option<String>,
}

impl RestaurantQuery {
    pub fn restaurant_id(self) -> Result<Uuid, ApiError> {
        let id = present(self.restaurant_id)
            .ok_or_else(|| ApiError::Validation("restaurantId is required".to_string()))?;
        parse_id("restaurantId", &id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuery {
    pub category_id: Option<String>,
}

impl CategoryQuery {
    pub fn category_id(self) -> Result<Uuid, ApiError> {
        let id = present(self.category_id)
            .ok_or_else(|| ApiError::Validation("categoryId is required".to_string()))?;
        parse_id("categoryId", &id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dish_request(body: Value) -> Result<NewDish, ApiError> {
        serde_json::from_value::<CreateDishRequest>(body).unwrap().try_into()
    }

    #[test]
    fn test_dish_price_accepts_number_and_string() {
        let category = Uuid::new_v4().to_string();
        let from_number =
            dish_request(json!({ "categoryId": category, "name": "Tea", "price": 2.5 })).unwrap();
        let from_text =
            dish_request(json!({ "categoryId": category, "name": "Tea", "price": "2.50" })).unwrap();
        assert_eq!(from_number.price.cents(), 250);
        assert_eq!(from_text.price, from_number.price);
    }

    #[test]
    fn test_dish_missing_price() {
        let err = dish_request(json!({ "categoryId": Uuid::new_v4().to_string(), "name": "Tea" }))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == "categoryId, name, and price are required"));
    }

    #[test]
    fn test_dish_price_not_a_number() {
        let err = dish_request(json!({
            "categoryId": Uuid::new_v4().to_string(),
            "name": "Tea",
            "price": "cheap"
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_malformed_restaurant_id() {
        let req = CreateCategoryRequest {
            restaurant_id: Some("not-a-uuid".to_string()),
            name: Some("Drinks".to_string()),
            description: None,
            display_order: None,
        };
        assert!(matches!(NewCategory::try_from(req), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_blank_name_counts_as_missing() {
        let req = CreateRestaurantRequest {
            name: Some("   ".to_string()),
            description: None,
            location: None,
            phone: None,
            email: None,
            logo: None,
            theme: None,
        };
        let err = NewRestaurant::try_from(req).unwrap_err();
        assert!(matches!(err, ApiError::Validation(m) if m == "Restaurant name is required"));
    }
}
