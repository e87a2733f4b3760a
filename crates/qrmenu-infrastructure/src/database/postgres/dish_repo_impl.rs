use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use qrmenu_core::domain::{Dish, Price};
use qrmenu_core::error::DomainError;
use qrmenu_core::repositories::DishRepository;

use crate::database::{is_foreign_key_violation, map_db_error};

pub struct PgDishRepository {
    pool: PgPool,
}

impl PgDishRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DishRow {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image: Option<String>,
    pub available: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DishRow> for Dish {
    type Error = DomainError;

    fn try_from(row: DishRow) -> Result<Self, Self::Error> {
        Ok(Dish {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            description: row.description,
            price: Price::from_cents(row.price_cents)?,
            image: row.image,
            available: row.available,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_dishes(rows: Vec<DishRow>) -> Result<Vec<Dish>, DomainError> {
    rows.into_iter().map(Dish::try_from).collect()
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn list_by_category(&self, category_id: &Uuid) -> Result<Vec<Dish>, DomainError> {
        let rows: Vec<DishRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, name, description, price_cents, image, available,
                   display_order, created_at, updated_at
            FROM dishes
            WHERE category_id = $1
            ORDER BY display_order, created_at
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing dishes", e))?;

        into_dishes(rows)
    }

    async fn list_by_categories(&self, category_ids: &[Uuid]) -> Result<Vec<Dish>, DomainError> {
        let rows: Vec<DishRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, name, description, price_cents, image, available,
                   display_order, created_at, updated_at
            FROM dishes
            WHERE category_id = ANY($1)
            ORDER BY display_order, created_at
            "#,
        )
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing dishes for categories", e))?;

        into_dishes(rows)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Dish>, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            SELECT id, category_id, name, description, price_cents, image, available,
                   display_order, created_at, updated_at
            FROM dishes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding dish", e))?;

        row.map(Dish::try_from).transpose()
    }

    async fn create(&self, dish: &Dish) -> Result<Dish, DomainError> {
        let row: DishRow = sqlx::query_as(
            r#"
            INSERT INTO dishes (
                id, category_id, name, description, price_cents, image, available,
                display_order, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, category_id, name, description, price_cents, image, available,
                      display_order, created_at, updated_at
            "#,
        )
        .bind(dish.id)
        .bind(dish.category_id)
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(dish.price.cents())
        .bind(&dish.image)
        .bind(dish.available)
        .bind(dish.display_order)
        .bind(dish.created_at)
        .bind(dish.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::CategoryNotFound
            } else {
                map_db_error("creating dish", e)
            }
        })?;

        row.try_into()
    }

    async fn update(&self, dish: &Dish) -> Result<Dish, DomainError> {
        let row: Option<DishRow> = sqlx::query_as(
            r#"
            UPDATE dishes
            SET name = $2,
                description = $3,
                price_cents = $4,
                image = $5,
                available = $6,
                display_order = $7,
                updated_at = $8
            WHERE id = $1
            RETURNING id, category_id, name, description, price_cents, image, available,
                      display_order, created_at, updated_at
            "#,
        )
        .bind(dish.id)
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(dish.price.cents())
        .bind(&dish.image)
        .bind(dish.available)
        .bind(dish.display_order)
        .bind(dish.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating dish", e))?;

        row.ok_or(DomainError::DishNotFound)?.try_into()
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting dish", e))?;

        Ok(result.rows_affected() > 0)
    }
}
