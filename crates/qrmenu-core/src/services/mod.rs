//! Domain services (business logic)

pub mod auth_service;
pub mod ownership;
pub mod restaurant_service;
pub mod category_service;
pub mod dish_service;
pub mod menu_service;

pub use auth_service::{AuthService, LoginResult, RegisterInput};
pub use ownership::OwnershipService;
pub use restaurant_service::RestaurantService;
pub use category_service::CategoryService;
pub use dish_service::DishService;
pub use menu_service::{MenuService, ShareSettings};
