//! HTTP route handlers.
//!
//! Both routes are stateless and marked `Cache-Control: no-store`, since the
//! message value can change between requests. Unknown paths fall through to
//! a plain-text 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod message;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        Uri,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::{handle_panic, AppError};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and headers.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(health::index))
        .route("/api/message", get(message::get_message))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(api_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
