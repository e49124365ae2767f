//! # Chat Orchestration
//!
//! The per-request pipeline: deterministic schedule answer first, then the
//! LLM grounded in assembled context, then the rule-based fallback. The LLM
//! call's outcome is a tagged result so the fallback branch is a plain
//! pattern match rather than exception handling used for control flow.

use crate::{
    context::{build_system_context, gather_snapshot},
    fallback::fallback_response,
    providers::{ai::ChatProvider, db::SqliteProvider},
    schedule::answer_schedule_question,
    types::{Asker, ConversationTurn},
};
use chrono::NaiveDate;
use tracing::{info, warn};

/// The completion cap for conversational replies.
const CHAT_MAX_TOKENS: u32 = 1024;

/// The outcome of a chat-completion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmOutcome {
    /// The model produced non-empty text.
    Usable(String),
    /// The call failed, or the model produced nothing usable. Carries the
    /// reason for logging; the caller routes to the fallback responder.
    Unusable(String),
}

/// Performs a single chat-completion attempt and classifies the result.
///
/// Transport failures, API errors, and empty/whitespace-only completions are
/// all `Unusable`; no error from the provider escapes this function.
pub async fn complete_with_context(
    ai: &dyn ChatProvider,
    system_context: &str,
    history: &[ConversationTurn],
    user_message: &str,
) -> LlmOutcome {
    match ai
        .chat(system_context, history, user_message, CHAT_MAX_TOKENS)
        .await
    {
        Ok(text) if !text.trim().is_empty() => LlmOutcome::Usable(text.trim().to_string()),
        Ok(_) => LlmOutcome::Unusable("empty completion".to_string()),
        Err(e) => LlmOutcome::Unusable(e.to_string()),
    }
}

/// Generates the assistant's reply for one user turn.
///
/// `ai` is `None` when no API key is configured; that state routes straight
/// to the fallback responder without attempting a call. Every path returns a
/// non-empty string.
pub async fn generate_reply(
    store: &SqliteProvider,
    ai: Option<&dyn ChatProvider>,
    message: &str,
    history: &[ConversationTurn],
    asker: Option<&Asker>,
    today: NaiveDate,
) -> String {
    // Deterministic schedule answer takes precedence over the LLM.
    if let Some(answer) = answer_schedule_question(store, message, asker, today).await {
        return answer;
    }

    let Some(ai) = ai else {
        info!("Chat provider not configured, using fallback responder");
        return fallback_response(store, message, today).await;
    };

    let snapshot = match gather_snapshot(store).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Failed to gather context snapshot: {e}");
            return fallback_response(store, message, today).await;
        }
    };
    let system_context = build_system_context(&snapshot, asker);

    match complete_with_context(ai, &system_context, history, message).await {
        LlmOutcome::Usable(text) => text,
        LlmOutcome::Unusable(reason) => {
            warn!("Chat completion unusable ({reason}), using fallback responder");
            fallback_response(store, message, today).await
        }
    }
}
