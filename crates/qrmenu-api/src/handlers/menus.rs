//! Menu handlers, including share links.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qrmenu_core::domain::{Menu, MenuChanges, NewMenu, ShareLinks};
use uuid::Uuid;

use crate::dto::{CreateMenuRequest, RestaurantQuery};
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::response::{created, ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/menus?restaurantId=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RestaurantQuery>,
) -> ApiResult<Vec<Menu>> {
    let restaurant_id = query.restaurant_id()?;
    let menus = state.menus.list_for_restaurant(restaurant_id).await?;
    Ok(Json(ApiResponse::success(menus)))
}

/// POST /api/menus
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppJson(payload): AppJson<CreateMenuRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Menu>>), ApiError> {
    let input = NewMenu::try_from(payload)?;
    let menu = state.menus.create(user.id, input).await?;
    Ok(created(menu, "Menu created successfully"))
}

/// PATCH /api/menus/{id}
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<MenuChanges>,
) -> ApiResult<Menu> {
    let menu = state.menus.update(user.id, id, changes).await?;
    Ok(Json(ApiResponse::success_with_message(
        menu,
        "Menu updated successfully",
    )))
}

/// DELETE /api/menus/{id}
pub async fn delete(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<()> {
    state.menus.delete(user.id, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Menu deleted successfully",
    )))
}

/// GET /api/menus/{id}/share
pub async fn share(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> ApiResult<ShareLinks> {
    let links = state.menus.share_links(user.id, id).await?;
    Ok(Json(ApiResponse::success(links)))
}
