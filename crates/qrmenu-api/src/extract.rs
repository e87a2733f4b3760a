//! Request extractors that reject with the JSON envelope.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use qrmenu_core::domain::User;
use qrmenu_core::DomainError;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

/// The user bound to the request's session cookie.
///
/// Rejects with 401 when the cookie is missing or its session is unknown or
/// expired, and with 404 when the session outlived its user.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.auth.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(ApiError::not_authenticated)?;

        match state.auth.current_user(&token).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => {
                debug!("Session cookie did not resolve to a live session");
                Err(ApiError::not_authenticated())
            }
            Err(DomainError::UserNotFound) => Err(ApiError::NotFound("User not found".to_string())),
            Err(e) => Err(e.into()),
        }
    }
}
