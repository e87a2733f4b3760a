//! Category handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qrmenu_core::domain::{Category, CategoryChanges, CategoryWithDishes, NewCategory};
use uuid::Uuid;

use crate::dto::{CreateCategoryRequest, RestaurantQuery};
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::response::{created, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/categories?restaurantId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RestaurantQuery>,
) -> ApiResult<Vec<CategoryWithDishes>> {
    let restaurant_id = query.restaurant_id()?;
    let categories = state.categories.list_for_restaurant(restaurant_id).await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let input = NewCategory::try_from(payload)?;
    let category = state.categories.create(user.id, input).await?;
    Ok(created(category, "Category created successfully"))
}

/// PATCH /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<CategoryChanges>,
) -> ApiResult<Category> {
    let category = state.categories.update(user.id, id, changes).await?;
    Ok(Json(ApiResponse::success_with_message(
        category,
        "Category updated successfully",
    )))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<()> {
    state.categories.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Category deleted successfully",
    )))
}
