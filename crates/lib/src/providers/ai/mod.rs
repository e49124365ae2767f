pub mod groq;

use crate::{errors::ProviderError, types::ConversationTurn};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a chat-completion provider.
///
/// This defines a common interface for generating a reply from a system
/// context, the client-held conversation history, and the current user
/// message, so the pipeline and tests can swap implementations.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug + DynClone {
    /// Generates a reply. Implementations perform a single attempt; the
    /// caller absorbs availability risk by falling back, not by retrying.
    /// `max_tokens` caps the completion length per call: extraction needs
    /// more room than chat.
    async fn chat(
        &self,
        system_prompt: &str,
        history: &[ConversationTurn],
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError>;
}

dyn_clone::clone_trait_object!(ChatProvider);
