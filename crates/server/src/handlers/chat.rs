use crate::{auth::asker_from_session, errors::AppError, state::AppState};
use axum::{extract::State, http::HeaderMap, Json};
use chrono::Local;
use schoolchat::{chat::generate_reply, types::ConversationTurn};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The request body for the chat endpoint. History is client-held and
/// ordered oldest first.
#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub ok: bool,
    pub response: String,
}

/// The handler for `POST /api/chat`.
///
/// Runs the full pipeline: deterministic schedule answer, LLM with assembled
/// context, fallback responder. An unusable LLM call never surfaces as an
/// error here; the response is always `{ ok: true, response }` for a valid
/// request.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("Invalid message".to_string()));
    }
    info!("Received chat message: '{}'", payload.message);

    let asker = asker_from_session(&app_state, &headers).await;
    let today = Local::now().date_naive();

    let response = generate_reply(
        &app_state.store,
        app_state.ai_provider.as_deref(),
        &payload.message,
        &payload.history,
        asker.as_ref(),
        today,
    )
    .await;

    Ok(Json(ChatResponse { ok: true, response }))
}
