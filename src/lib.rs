//! message-backend: a minimal HTTP backend.
//!
//! Serves a liveness probe at `/` and a JSON message at `/api/message`, whose
//! value is read from `MESSAGE_FROM_CONFIG` on every request.

pub mod config;
pub mod env;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
