//! Message endpoint at `/api/message`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::env::resolve_message;
use crate::state::AppState;

/// JSON body of `/api/message`. Always exactly one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Resolves the message from the environment on every call; nothing is cached.
pub async fn get_message(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = resolve_message(state.env.as_ref());
    tracing::debug!(length = message.len(), "Resolved message");
    Json(MessageResponse { message })
}
