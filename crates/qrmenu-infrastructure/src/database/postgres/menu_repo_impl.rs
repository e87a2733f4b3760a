use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

use qrmenu_core::domain::Menu;
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::MenuRepository;

use crate::database::{is_foreign_key_violation, is_unique_violation, map_db_error};

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            restaurant_id: row.restaurant_id,
            name: row.name,
            slug: row.slug,
            is_public: row.is_public,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Menu>, DomainError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, slug, is_public, created_at, updated_at
            FROM menus
            WHERE restaurant_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing menus", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, slug, is_public, created_at, updated_at
            FROM menus
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, slug, is_public, created_at, updated_at
            FROM menus
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding menu by slug", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO menus (id, restaurant_id, name, slug, is_public, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, restaurant_id, name, slug, is_public, created_at, updated_at
            "#,
        )
        .bind(menu.id)
        .bind(menu.restaurant_id)
        .bind(&menu.name)
        .bind(&menu.slug)
        .bind(menu.is_public)
        .bind(menu.created_at)
        .bind(menu.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                warn!("Slug '{}' already taken", menu.slug);
                DomainError::SlugAlreadyExists(menu.slug.clone())
            } else if is_foreign_key_violation(&e) {
                DomainError::RestaurantNotFound
            } else {
                map_db_error("creating menu", e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, menu: &Menu) -> Result<Menu, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            UPDATE menus
            SET name = $2, is_public = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, restaurant_id, name, slug, is_public, created_at, updated_at
            "#,
        )
        .bind(menu.id)
        .bind(&menu.name)
        .bind(menu.is_public)
        .bind(menu.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating menu", e))?;

        row.map(Into::into).ok_or(DomainError::MenuNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting menu", e))?;

        Ok(result.rows_affected() > 0)
    }
}
