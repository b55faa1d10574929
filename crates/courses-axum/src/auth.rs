//! Bearer token authentication for `/api/*`.
//!
//! Enabled when `ServerConfig::api_token` is set. `/health` is never
//! authenticated.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    http::{StatusCode, header},
    middleware::{self, Next},
    response::Response,
};

/// Wrap `router` so every route requires `Authorization: Bearer {token}`.
pub fn require_bearer<S>(router: Router<S>, token: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Store the full header value so each request is a single comparison
    let expected: Arc<str> = Arc::from(format!("Bearer {token}"));

    router.route_layer(middleware::from_fn(move |req: Request, next: Next| {
        let expected = expected.clone();
        async move { validate_bearer(expected, req, next).await }
    }))
}

/// Auth middleware: validate Bearer token.
///
/// Returns 401 Unauthorized with `WWW-Authenticate: Bearer` on failure.
async fn validate_bearer(expected: Arc<str>, req: Request, next: Next) -> Response {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth {
        Some(h) if h == expected.as_ref() => next.run(req).await,
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                "Unauthorized API request - missing or invalid token"
            );
            let mut res = Response::new(axum::body::Body::empty());
            *res.status_mut() = StatusCode::UNAUTHORIZED;
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
            res
        }
    }
}
