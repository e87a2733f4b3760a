//! Domain errors

use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    EmailAlreadyExists(String),

    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Dish not found")]
    DishNotFound,

    #[error("Menu not found")]
    MenuNotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists(String),

    #[error("You do not have access to this {0}")]
    NotOwner(&'static str),

    #[error("{0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        DomainError::ValidationError(messages.join(", "))
    }
}

impl From<qrmenu_security::PasswordError> for DomainError {
    fn from(e: qrmenu_security::PasswordError) -> Self {
        DomainError::PasswordHashError(e.to_string())
    }
}
