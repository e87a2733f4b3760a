// ============================================================================
// QR Menu Core - Menu Service
// File: crates/qrmenu-core/src/services/menu_service.rs
// ============================================================================
//! Menus, their public view and share links.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::category_service::categories_with_dishes;
use super::OwnershipService;
use crate::domain::{Menu, MenuChanges, NewMenu, PublicMenu, PublicRestaurant, ShareLinks};
use crate::error::DomainError;
use crate::repositories::Repositories;

/// Where public pages live and which QR image service renders them.
#[derive(Debug, Clone)]
pub struct ShareSettings {
    pub public_base_url: String,
    pub qr_service_url: String,
    pub qr_size: u32,
}

impl ShareSettings {
    pub fn links_for(&self, slug: &str) -> ShareLinks {
        ShareLinks::for_slug(&self.public_base_url, &self.qr_service_url, self.qr_size, slug)
    }
}

pub struct MenuService {
    repos: Repositories,
    ownership: Arc<OwnershipService>,
    share: ShareSettings,
}

impl MenuService {
    pub fn new(repos: Repositories, ownership: Arc<OwnershipService>, share: ShareSettings) -> Self {
        Self {
            repos,
            ownership,
            share,
        }
    }

    pub async fn list_for_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Menu>, DomainError> {
        self.repos.menus.list_by_restaurant(&restaurant_id).await
    }

    /// Slug uniqueness is decided by the store on insert.
    pub async fn create(&self, user_id: Uuid, input: NewMenu) -> Result<Menu, DomainError> {
        self.ownership
            .require_restaurant(user_id, input.restaurant_id)
            .await?;

        let menu = Menu::new(input)?;
        let created = self.repos.menus.create(&menu).await?;
        info!("Menu {} created with slug '{}'", created.id, created.slug);
        Ok(created)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        menu_id: Uuid,
        changes: MenuChanges,
    ) -> Result<Menu, DomainError> {
        let mut menu = self.ownership.require_menu(user_id, menu_id).await?;
        menu.apply(changes)?;
        self.repos.menus.update(&menu).await
    }

    pub async fn delete(&self, user_id: Uuid, menu_id: Uuid) -> Result<(), DomainError> {
        self.ownership.require_menu(user_id, menu_id).await?;
        if !self.repos.menus.delete(&menu_id).await? {
            return Err(DomainError::MenuNotFound);
        }
        info!("Menu {} deleted", menu_id);
        Ok(())
    }

    /// Public view by slug. Private menus are indistinguishable from
    /// missing ones, and unavailable dishes are left out.
    pub async fn public_menu(&self, slug: &str) -> Result<PublicMenu, DomainError> {
        let menu = self
            .repos
            .menus
            .find_by_slug(slug)
            .await?
            .filter(|m| m.is_public)
            .ok_or_else(|| {
                debug!("No public menu for slug '{}'", slug);
                DomainError::MenuNotFound
            })?;

        let restaurant = self
            .repos
            .restaurants
            .find_by_id(&menu.restaurant_id)
            .await?
            .ok_or(DomainError::MenuNotFound)?;

        let categories = categories_with_dishes(
            self.repos.categories.as_ref(),
            self.repos.dishes.as_ref(),
            restaurant.id,
            true,
        )
        .await?;

        Ok(PublicMenu {
            menu,
            restaurant: PublicRestaurant::new(restaurant, categories),
        })
    }

    pub async fn share_links(&self, user_id: Uuid, menu_id: Uuid) -> Result<ShareLinks, DomainError> {
        let menu = self.ownership.require_menu(user_id, menu_id).await?;
        Ok(self.share.links_for(&menu.slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Dish, NewCategory, NewDish, NewRestaurant, Price, Restaurant};
    use crate::repositories::category_repository::MockCategoryRepository;
    use crate::repositories::dish_repository::MockDishRepository;
    use crate::repositories::menu_repository::MockMenuRepository;
    use crate::repositories::restaurant_repository::MockRestaurantRepository;
    use crate::repositories::session_repository::MockSessionRepository;
    use crate::repositories::user_repository::MockUserRepository;
    use crate::repositories::MockStoreHealth;

    struct Fixture {
        owner: Uuid,
        restaurant: Restaurant,
        category: Category,
        dishes: Vec<Dish>,
        menu: Menu,
    }

    fn fixture(is_public: bool) -> Fixture {
        let owner = Uuid::new_v4();
        let restaurant = Restaurant::new(
            owner,
            NewRestaurant {
                name: "Luigi's".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        let category = Category::new(NewCategory {
            restaurant_id: restaurant.id,
            name: "Pizza".to_string(),
            description: None,
            display_order: None,
        })
        .unwrap();
        let dish = |name: &str, available: bool| {
            Dish::new(NewDish {
                category_id: category.id,
                name: name.to_string(),
                description: None,
                price: Price::from_cents(1200).unwrap(),
                image: None,
                available: Some(available),
                display_order: None,
            })
            .unwrap()
        };
        let dishes = vec![dish("Margherita", true), dish("Seasonal", false)];
        let menu = Menu::new(NewMenu {
            restaurant_id: restaurant.id,
            name: "Main".to_string(),
            slug: "luigis".to_string(),
            is_public: Some(is_public),
        })
        .unwrap();

        Fixture {
            owner,
            restaurant,
            category,
            dishes,
            menu,
        }
    }

    fn service(f: &Fixture) -> MenuService {
        let mut restaurants = MockRestaurantRepository::new();
        let restaurant = f.restaurant.clone();
        restaurants
            .expect_find_by_id()
            .returning(move |_| Ok(Some(restaurant.clone())));

        let mut categories = MockCategoryRepository::new();
        let category = f.category.clone();
        categories
            .expect_list_by_restaurant()
            .returning(move |_| Ok(vec![category.clone()]));

        let mut dishes = MockDishRepository::new();
        let all = f.dishes.clone();
        dishes
            .expect_list_by_categories()
            .returning(move |_| Ok(all.clone()));

        let mut menus = MockMenuRepository::new();
        let menu = f.menu.clone();
        menus
            .expect_find_by_slug()
            .returning(move |_| Ok(Some(menu.clone())));
        let menu = f.menu.clone();
        menus
            .expect_find_by_id()
            .returning(move |_| Ok(Some(menu.clone())));

        let restaurants: Arc<dyn crate::repositories::RestaurantRepository> = Arc::new(restaurants);
        let categories: Arc<dyn crate::repositories::CategoryRepository> = Arc::new(categories);
        let dishes: Arc<dyn crate::repositories::DishRepository> = Arc::new(dishes);
        let menus: Arc<dyn crate::repositories::MenuRepository> = Arc::new(menus);

        let repos = Repositories {
            users: Arc::new(MockUserRepository::new()),
            sessions: Arc::new(MockSessionRepository::new()),
            restaurants: restaurants.clone(),
            categories: categories.clone(),
            dishes: dishes.clone(),
            menus: menus.clone(),
            health: Arc::new(MockStoreHealth::new()),
        };
        let ownership = Arc::new(OwnershipService::new(restaurants, categories, dishes, menus));
        MenuService::new(
            repos,
            ownership,
            ShareSettings {
                public_base_url: "https://menus.example.com/".to_string(),
                qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
                qr_size: 300,
            },
        )
    }

    #[tokio::test]
    async fn test_public_menu_hides_unavailable_dishes() {
        let f = fixture(true);
        let public = service(&f).public_menu("luigis").await.unwrap();

        assert_eq!(public.restaurant.name, "Luigi's");
        assert_eq!(public.restaurant.categories.len(), 1);
        let names: Vec<_> = public.restaurant.categories[0]
            .dishes
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Margherita"]);
    }

    #[tokio::test]
    async fn test_private_menu_is_not_found() {
        let f = fixture(false);
        let result = service(&f).public_menu("luigis").await;
        assert!(matches!(result, Err(DomainError::MenuNotFound)));
    }

    #[tokio::test]
    async fn test_share_links_for_owner() {
        let f = fixture(true);
        let links = service(&f).share_links(f.owner, f.menu.id).await.unwrap();
        assert_eq!(links.url, "https://menus.example.com/menu/luigis");
        assert!(links.qr_code_url.ends_with(
            "?size=300x300&data=https%3A%2F%2Fmenus.example.com%2Fmenu%2Fluigis"
        ));
    }

    #[tokio::test]
    async fn test_share_links_rejects_other_user() {
        let f = fixture(true);
        let result = service(&f).share_links(Uuid::new_v4(), f.menu.id).await;
        assert!(matches!(result, Err(DomainError::NotOwner(_))));
    }
}
