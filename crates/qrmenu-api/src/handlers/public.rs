//! Unauthenticated menu page data.

use axum::extract::State;
use axum::Json;
use qrmenu_core::domain::PublicMenu;

use crate::extract::AppPath;
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/public/menu/{slug}
pub async fn menu_by_slug(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> ApiResult<PublicMenu> {
    let menu = state.menus.public_menu(&slug).await?;
    Ok(Json(ApiResponse::success(menu)))
}
