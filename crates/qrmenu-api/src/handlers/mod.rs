//! HTTP handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod dishes;
pub mod health;
pub mod menus;
pub mod public;
pub mod restaurants;
pub mod upload;
