//! Route definitions and router construction.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_bearer;
use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::handlers;
use crate::state::AppState;

/// Prefix all API routes are nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Public path of the course collection, without trailing slash.
pub const COURSES_PATH: &str = "/api/v1/courses";

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api/v1` prefix.
///
/// Every route is registered with and without a trailing slash.
pub(crate) fn api_routes() -> Router<AppState> {
    let collection = get(handlers::courses::list).post(handlers::courses::create);
    let item = get(handlers::courses::get)
        .patch(handlers::courses::update)
        .put(handlers::courses::replace)
        .delete(handlers::courses::remove);

    Router::new()
        .route("/courses", collection.clone())
        .route("/courses/", collection)
        .route("/courses/{id}", item.clone())
        .route("/courses/{id}/", item)
}

/// Create the main Axum router.
///
/// `/health` sits outside the API prefix and is never authenticated.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    let mut api = api_routes();
    if let Some(token) = config.api_token.as_deref() {
        api = require_bearer(api, token);
    }

    Router::new()
        .route("/health", get(health_check))
        .nest(
            API_PREFIX,
            api.with_state(state).layer(build_cors_layer(&config.cors)),
        )
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
