// ============================================================================
// QR Menu Infrastructure - PostgreSQL Restaurant Repository
// File: crates/qrmenu-infrastructure/src/database/postgres/restaurant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use qrmenu_core::domain::Restaurant;
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::RestaurantRepository;

use crate::database::{is_foreign_key_violation, map_db_error};

pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RestaurantRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub theme: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            location: row.location,
            phone: row.phone,
            email: row.email,
            logo: row.logo,
            theme: row.theme,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn list_by_owner(&self, user_id: &Uuid) -> Result<Vec<Restaurant>, DomainError> {
        let rows: Vec<RestaurantRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, description, location, phone, email, logo,
                   theme, created_at, updated_at
            FROM restaurants
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing restaurants", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Restaurant>, DomainError> {
        let row: Option<RestaurantRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, name, description, location, phone, email, logo,
                   theme, created_at, updated_at
            FROM restaurants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding restaurant", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError> {
        let row: RestaurantRow = sqlx::query_as(
            r#"
            INSERT INTO restaurants (
                id, user_id, name, description, location, phone, email, logo,
                theme, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, user_id, name, description, location, phone, email, logo,
                      theme, created_at, updated_at
            "#,
        )
        .bind(restaurant.id)
        .bind(restaurant.user_id)
        .bind(&restaurant.name)
        .bind(&restaurant.description)
        .bind(&restaurant.location)
        .bind(&restaurant.phone)
        .bind(&restaurant.email)
        .bind(&restaurant.logo)
        .bind(&restaurant.theme)
        .bind(restaurant.created_at)
        .bind(restaurant.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::UserNotFound
            } else {
                map_db_error("creating restaurant", e)
            }
        })?;

        info!("Restaurant row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<Restaurant, DomainError> {
        let row: Option<RestaurantRow> = sqlx::query_as(
            r#"
            UPDATE restaurants
            SET name = $2,
                description = $3,
                location = $4,
                phone = $5,
                email = $6,
                logo = $7,
                theme = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING id, user_id, name, description, location, phone, email, logo,
                      theme, created_at, updated_at
            "#,
        )
        .bind(restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.description)
        .bind(&restaurant.location)
        .bind(&restaurant.phone)
        .bind(&restaurant.email)
        .bind(&restaurant.logo)
        .bind(&restaurant.theme)
        .bind(restaurant.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating restaurant", e))?;

        row.map(Into::into).ok_or(DomainError::RestaurantNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        // Categories, dishes and menus go with it through ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting restaurant", e))?;

        Ok(result.rows_affected() > 0)
    }
}
