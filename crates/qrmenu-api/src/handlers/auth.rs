// ============================================================================
// QR Menu API - Auth Handlers
// File: crates/qrmenu-api/src/handlers/auth.rs
// ============================================================================
//! Registration, login, logout and the current-user probe.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use qrmenu_core::domain::User;
use qrmenu_core::services::RegisterInput;
use qrmenu_shared::config::AppConfig;
use tracing::{error, info, warn};

use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::extract::{AppJson, CurrentUser};
use crate::response::{created, ApiResponse, ApiResult};
use crate::state::AppState;

/// Session cookie carrying the raw token.
fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.auth.cookie_name.clone(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.app.is_production())
        .path("/")
        .max_age(time::Duration::seconds(config.auth.session_ttl_secs))
        .build()
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let input = RegisterInput::try_from(payload)?;
    let user = state.auth.register(input).await?;
    Ok(created(user, "User created successfully"))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<User>>), ApiError> {
    let (email, password) = payload.credentials()?;
    let result = state.auth.login(&email, &password).await?;

    let jar = jar.add(session_cookie(&state.config, result.token));
    Ok((
        jar,
        Json(ApiResponse::success_with_message(result.user, "Login successful")),
    ))
}

/// POST /api/auth/logout
///
/// Always clears the cookie; the session row is removed when the token is known.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    let cookie_name = state.config.auth.cookie_name.clone();
    if let Some(cookie) = jar.get(&cookie_name) {
        match state.auth.logout(cookie.value()).await {
            Ok(()) => info!("Session ended"),
            Err(e) => error!("Failed to delete session on logout: {}", e),
        }
    } else {
        warn!("Logout without a session cookie");
    }

    let jar = jar.remove(Cookie::build(cookie_name).path("/"));
    (
        jar,
        Json(ApiResponse::success_with_message((), "Logged out successfully")),
    )
}

/// GET /api/auth/me
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResult<User> {
    Ok(Json(ApiResponse::success(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let mut config = AppConfig::for_tests().unwrap();
        config.app.env = "production".to_string();

        let cookie = session_cookie(&config, "abc".to_string());
        assert_eq!(cookie.name(), "auth_token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86_400)));
    }

    #[test]
    fn test_cookie_not_secure_outside_production() {
        let config = AppConfig::for_tests().unwrap();
        let cookie = session_cookie(&config, "abc".to_string());
        assert_ne!(cookie.secure(), Some(true));
    }
}
