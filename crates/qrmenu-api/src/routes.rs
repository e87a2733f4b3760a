//! Router assembly

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers::{auth, categories, dishes, health, menus, public, restaurants, upload};
use crate::state::AppState;

/// Room for multipart framing above the image limit, so oversize images are
/// rejected by the handler with an envelope instead of a bare 413.
const UPLOAD_BODY_HEADROOM: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state
        .config
        .upload
        .max_image_bytes
        .saturating_mul(2)
        .saturating_add(UPLOAD_BODY_HEADROOM);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .route("/restaurants", get(restaurants::list).post(restaurants::create))
        .route(
            "/restaurants/{id}",
            get(restaurants::get)
                .patch(restaurants::update)
                .delete(restaurants::delete),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            patch(categories::update).delete(categories::delete),
        )
        .route("/dishes", get(dishes::list).post(dishes::create))
        .route("/dishes/{id}", patch(dishes::update).delete(dishes::delete))
        .route("/menus", get(menus::list).post(menus::create))
        .route("/menus/{id}", patch(menus::update).delete(menus::delete))
        .route("/menus/{id}/share", get(menus::share))
        .route("/public/menu/{slug}", get(public::menu_by_slug))
        .route(
            "/upload",
            post(upload::upload_image).layer(DefaultBodyLimit::max(upload_limit)),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.app.cors_origins))
        .with_state(state)
}

/// Credentialed CORS for the configured origins. Without origins, no
/// cross-origin access is granted.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
