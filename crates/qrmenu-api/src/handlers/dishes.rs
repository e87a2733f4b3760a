//! Dish handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qrmenu_core::domain::{Dish, DishChanges, NewDish};
use uuid::Uuid;

use crate::dto::{CategoryQuery, CreateDishRequest};
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::response::{created, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/dishes?categoryId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CategoryQuery>,
) -> ApiResult<Vec<Dish>> {
    let category_id = query.category_id()?;
    let dishes = state.dishes.list_for_category(category_id).await?;
    Ok(Json(ApiResponse::success(dishes)))
}

/// POST /api/dishes
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(payload): AppJson<CreateDishRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Dish>>), ApiError> {
    let input = NewDish::try_from(payload)?;
    let dish = state.dishes.create(user.id, input).await?;
    Ok(created(dish, "Dish created successfully"))
}

/// PATCH /api/dishes/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<DishChanges>,
) -> ApiResult<Dish> {
    let dish = state.dishes.update(user.id, id, changes).await?;
    Ok(Json(ApiResponse::success_with_message(
        dish,
        "Dish updated successfully",
    )))
}

/// DELETE /api/dishes/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<()> {
    state.dishes.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Dish deleted successfully",
    )))
}
