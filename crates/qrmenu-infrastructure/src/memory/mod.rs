//! In-process store for development and tests.
//!
//! All tables sit behind one `RwLock`, so unique checks and cascade deletes
//! happen under a single write guard. Rows keep insertion order; listings
//! sort by `display_order` with a stable sort.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use qrmenu_core::domain::{Category, Dish, Menu, Restaurant, User};
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::{
    CategoryRepository, DishRepository, MenuRepository, RestaurantRepository, SessionRepository,
    StoreHealth, UserRepository,
};
use qrmenu_security::Session;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<Session>,
    restaurants: Vec<Restaurant>,
    categories: Vec<Category>,
    dishes: Vec<Dish>,
    menus: Vec<Menu>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn replace<T: Clone>(rows: &mut [T], item: &T, same: impl Fn(&T) -> bool) -> Option<T> {
    let slot = rows.iter_mut().find(|row| same(row))?;
    *slot = item.clone();
    Some(item.clone())
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .tables
            .read()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        let mut tables = self.tables.write();
        if tables
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        tables.users.push(user.clone());
        Ok(user.clone())
    }

    async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == *id)
            .ok_or(DomainError::UserNotFound)?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        self.tables.write().sessions.push(session.clone());
        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, DomainError> {
        Ok(self
            .tables
            .read()
            .sessions
            .iter()
            .find(|s| s.token_hash == token_hash)
            .cloned())
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), DomainError> {
        self.tables
            .write()
            .sessions
            .retain(|s| s.token_hash != token_hash);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut tables = self.tables.write();
        let before = tables.sessions.len();
        tables.sessions.retain(|s| !s.is_expired_at(now));
        Ok((before - tables.sessions.len()) as u64)
    }
}

#[async_trait]
impl RestaurantRepository for MemoryStore {
    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Restaurant>, DomainError> {
        Ok(self
            .tables
            .read()
            .restaurants
            .iter()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Restaurant>, DomainError> {
        Ok(self
            .tables
            .read()
            .restaurants
            .iter()
            .find(|r| r.id == *id)
            .cloned())
    }

    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError> {
        let mut tables = self.tables.write();
        if !tables.users.iter().any(|u| u.id == restaurant.user_id) {
            return Err(DomainError::UserNotFound);
        }
        tables.restaurants.push(restaurant.clone());
        Ok(restaurant.clone())
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError> {
        replace(&mut self.tables.write().restaurants, restaurant, |r| {
            r.id == restaurant.id
        })
        .ok_or(DomainError::RestaurantNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write();
        let before = tables.restaurants.len();
        tables.restaurants.retain(|r| r.id != *id);
        if tables.restaurants.len() == before {
            return Ok(false);
        }

        let removed: Vec<Uuid> = tables
            .categories
            .iter()
            .filter(|c| c.restaurant_id == *id)
            .map(|c| c.id)
            .collect();
        tables.categories.retain(|c| c.restaurant_id != *id);
        tables.dishes.retain(|d| !removed.contains(&d.category_id));
        tables.menus.retain(|m| m.restaurant_id != *id);

        debug!("Restaurant {} removed with {} categories", id, removed.len());
        Ok(true)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let mut categories: Vec<Category> = self
            .tables
            .read()
            .categories
            .iter()
            .filter(|c| c.restaurant_id == *restaurant_id)
            .cloned()
            .collect();
        categories.sort_by_key(|c| c.display_order);
        Ok(categories)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self
            .tables
            .read()
            .categories
            .iter()
            .find(|c| c.id == *id)
            .cloned())
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let mut tables = self.tables.write();
        if !tables
            .restaurants
            .iter()
            .any(|r| r.id == category.restaurant_id)
        {
            return Err(DomainError::RestaurantNotFound);
        }
        tables.categories.push(category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        replace(&mut self.tables.write().categories, category, |c| {
            c.id == category.id
        })
        .ok_or(DomainError::CategoryNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != *id);
        if tables.categories.len() == before {
            return Ok(false);
        }
        tables.dishes.retain(|d| d.category_id != *id);
        Ok(true)
    }
}

#[async_trait]
impl DishRepository for MemoryStore {
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Dish>, DomainError> {
        self.list_by_categories(std::slice::from_ref(category_id)).await
    }

    async fn list_by_categories(&self, category_ids: &[Uuid]) -> Result<Vec<Dish>, DomainError> {
        let mut dishes: Vec<Dish> = self
            .tables
            .read()
            .dishes
            .iter()
            .filter(|d| category_ids.contains(&d.category_id))
            .cloned()
            .collect();
        dishes.sort_by_key(|d| d.display_order);
        Ok(dishes)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dish>, DomainError> {
        Ok(self.tables.read().dishes.iter().find(|d| d.id == *id).cloned())
    }

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError> {
        let mut tables = self.tables.write();
        if !tables.categories.iter().any(|c| c.id == dish.category_id) {
            return Err(DomainError::CategoryNotFound);
        }
        tables.dishes.push(dish.clone());
        Ok(dish.clone())
    }

    async fn update(&self, dish: &Dish) -> Result<Dish, DomainError> {
        replace(&mut self.tables.write().dishes, dish, |d| d.id == dish.id)
            .ok_or(DomainError::DishNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write();
        let before = tables.dishes.len();
        tables.dishes.retain(|d| d.id != *id);
        Ok(tables.dishes.len() < before)
    }
}

#[async_trait]
impl MenuRepository for MemoryStore {
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Menu>, DomainError> {
        Ok(self
            .tables
            .read()
            .menus
            .iter()
            .filter(|m| m.restaurant_id == *restaurant_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        Ok(self.tables.read().menus.iter().find(|m| m.id == *id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Menu>, DomainError> {
        Ok(self
            .tables
            .read()
            .menus
            .iter()
            .find(|m| m.slug == slug)
            .cloned())
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let mut tables = self.tables.write();
        if tables.menus.iter().any(|m| m.slug == menu.slug) {
            return Err(DomainError::SlugAlreadyExists(menu.slug.clone()));
        }
        if !tables.restaurants.iter().any(|r| r.id == menu.restaurant_id) {
            return Err(DomainError::RestaurantNotFound);
        }
        tables.menus.push(menu.clone());
        Ok(menu.clone())
    }

    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError> {
        replace(&mut self.tables.write().menus, menu, |m| m.id == menu.id)
            .ok_or(DomainError::MenuNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write();
        let before = tables.menus.len();
        tables.menus.retain(|m| m.id != *id);
        Ok(tables.menus.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use qrmenu_core::domain::{NewCategory, NewDish, NewMenu, NewRestaurant, Price};

    fn owner() -> User {
        User::new("owner@example.com", "hash".to_string(), None).unwrap()
    }

    async fn seeded() -> (MemoryStore, Restaurant, Category) {
        let store = MemoryStore::new();
        let user = UserRepository::create(&store, &owner()).await.unwrap();
        let restaurant = Restaurant::new(
            user.id,
            NewRestaurant {
                name: "Cafe".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
        RestaurantRepository::create(&store, &restaurant).await.unwrap();
        let category = Category::new(NewCategory {
            restaurant_id: restaurant.id,
            name: "Drinks".to_string(),
            description: None,
            display_order: Some(1),
        })
        .unwrap();
        CategoryRepository::create(&store, &category).await.unwrap();
        (store, restaurant, category)
    }

    fn dish(category_id: Uuid, name: &str, display_order: i32) -> Dish {
        Dish::new(NewDish {
            category_id,
            name: name.to_string(),
            description: None,
            price: Price::from_cents(350).unwrap(),
            image: None,
            available: None,
            display_order: Some(display_order),
        })
        .unwrap()
    }

    fn menu(restaurant_id: Uuid, slug: &str) -> Menu {
        Menu::new(NewMenu {
            restaurant_id,
            name: "Main".to_string(),
            slug: slug.to_string(),
            is_public: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        UserRepository::create(&store, &owner()).await.unwrap();
        let again = UserRepository::create(&store, &owner()).await;
        assert!(matches!(again, Err(DomainError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let (store, restaurant, _) = seeded().await;
        MenuRepository::create(&store, &menu(restaurant.id, "cafe")).await.unwrap();
        let again = MenuRepository::create(&store, &menu(restaurant.id, "cafe")).await;
        assert!(matches!(again, Err(DomainError::SlugAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_concurrent_slug_inserts_have_one_winner() {
        let (store, restaurant, _) = seeded().await;
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                let menu = menu(restaurant.id, "race");
                tokio::spawn(async move { MenuRepository::create(store.as_ref(), &menu).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
    }

    #[tokio::test]
    async fn test_restaurant_delete_cascades() {
        let (store, restaurant, category) = seeded().await;
        let dish = dish(category.id, "Tea", 0);
        DishRepository::create(&store, &dish).await.unwrap();
        let menu = menu(restaurant.id, "cafe");
        MenuRepository::create(&store, &menu).await.unwrap();

        assert!(RestaurantRepository::delete(&store, &restaurant.id).await.unwrap());

        assert!(CategoryRepository::find_by_id(&store, &category.id).await.unwrap().is_none());
        assert!(DishRepository::find_by_id(&store, &dish.id).await.unwrap().is_none());
        assert!(MenuRepository::find_by_slug(&store, "cafe").await.unwrap().is_none());
        assert!(!RestaurantRepository::delete(&store, &restaurant.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_category_delete_cascades_to_dishes() {
        let (store, _, category) = seeded().await;
        let dish = dish(category.id, "Tea", 0);
        DishRepository::create(&store, &dish).await.unwrap();

        assert!(CategoryRepository::delete(&store, &category.id).await.unwrap());
        assert!(DishRepository::find_by_id(&store, &dish.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dishes_listed_by_display_order() {
        let (store, _, category) = seeded().await;
        DishRepository::create(&store, &dish(category.id, "Late", 5)).await.unwrap();
        DishRepository::create(&store, &dish(category.id, "Early", 1)).await.unwrap();

        let names: Vec<String> = store
            .list_by_category(&category.id)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn test_dish_requires_existing_category() {
        let store = MemoryStore::new();
        let result = DishRepository::create(&store, &dish(Uuid::new_v4(), "Tea", 0)).await;
        assert!(matches!(result, Err(DomainError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn test_delete_expired_sessions() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();
        SessionRepository::create(&store, &Session::new("old", user_id, -5)).await.unwrap();
        SessionRepository::create(&store, &Session::new("fresh", user_id, 600)).await.unwrap();

        assert_eq!(store.delete_expired(Utc::now()).await.unwrap(), 1);
        let remaining = store
            .find_by_token_hash(&qrmenu_security::hash_session_token("fresh"))
            .await
            .unwrap();
        assert!(remaining.is_some());
    }
}
