use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use qrmenu_core::domain::Category;
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::CategoryRepository;

use crate::database::{is_foreign_key_violation, map_db_error};

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            restaurant_id: row.restaurant_id,
            name: row.name,
            description: row.description,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_by_restaurant(&self, restaurant_id: &Uuid) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, description, display_order, created_at, updated_at
            FROM categories
            WHERE restaurant_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing categories", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, restaurant_id, name, description, display_order, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding category", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO categories (
                id, restaurant_id, name, description, display_order, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, restaurant_id, name, description, display_order, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(category.restaurant_id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.display_order)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::RestaurantNotFound
            } else {
                map_db_error("creating category", e)
            }
        })?;

        Ok(row.into())
    }

    async fn update(&self, category: &Category) -> Result<Category, DomainError> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            UPDATE categories
            SET name = $2, description = $3, display_order = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, restaurant_id, name, description, display_order, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.display_order)
        .bind(category.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating category", e))?;

        row.map(Into::into).ok_or(DomainError::CategoryNotFound)
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting category", e))?;

        Ok(result.rows_affected() > 0)
    }
}
