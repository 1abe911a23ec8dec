use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use careline_bots::{message_responder, thread_responder};
use careline_core::models::event::BotEvent;

use crate::error::ApiError;
use crate::state::AppState;

/// Execute a bot by name against a delivered event.
///
/// Responds 200 with the created reply, or 204 when the bot decided not to
/// reply.
pub async fn execute_bot(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(event): Json<BotEvent>,
) -> Result<Response, ApiError> {
    let records = state.records.as_ref();
    let outcome = match name.as_str() {
        "thread-responder" => thread_responder::handler(records, event).await?,
        "message-responder" => message_responder::handler(records, event).await?,
        _ => return Err(ApiError::NotFound(format!("unknown bot: {name}"))),
    };

    Ok(match outcome {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
