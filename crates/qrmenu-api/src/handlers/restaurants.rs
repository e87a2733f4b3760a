//! Restaurant handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qrmenu_core::domain::{
    NewRestaurant, Restaurant, RestaurantChanges, RestaurantDetail, RestaurantSummary,
};
use uuid::Uuid;

use crate::dto::CreateRestaurantRequest;
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, CurrentUser};
use crate::response::{created, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/restaurants
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Vec<RestaurantSummary>> {
    let restaurants = state.restaurants.list_for_owner(user.id).await?;
    Ok(Json(ApiResponse::success(restaurants)))
}

/// POST /api/restaurants
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(payload): AppJson<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Restaurant>>), ApiError> {
    let input = NewRestaurant::try_from(payload)?;
    let restaurant = state.restaurants.create(user.id, input).await?;
    Ok(created(restaurant, "Restaurant created successfully"))
}

/// GET /api/restaurants/{id}
pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<RestaurantDetail> {
    let detail = state.restaurants.get_detail(id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// PATCH /api/restaurants/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<RestaurantChanges>,
) -> ApiResult<Restaurant> {
    let restaurant = state.restaurants.update(user.id, id, changes).await?;
    Ok(Json(ApiResponse::success_with_message(
        restaurant,
        "Restaurant updated successfully",
    )))
}

/// DELETE /api/restaurants/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<()> {
    state.restaurants.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Restaurant deleted successfully",
    )))
}
