use crate::{
    errors::ProviderError,
    providers::ai::ChatProvider,
    types::{ConversationTurn, Role},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// How many history turns are forwarded to the model on each request.
const HISTORY_WINDOW: usize = 12;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- Groq Provider implementation ---

/// A provider for the Groq chat-completion API (or any OpenAI-compatible
/// endpoint).
#[derive(Clone, Debug)]
pub struct GroqProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl GroqProvider {
    /// Creates a new `GroqProvider` with the pipeline's fixed sampling
    /// temperature (0.7). The token cap is supplied per call.
    pub fn new(api_url: String, api_key: String, model: String) -> Result<Self, ProviderError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ProviderError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            temperature: 0.7,
        })
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    /// Sends the system context, the last [`HISTORY_WINDOW`] history turns,
    /// and the current user message, and returns the completion text.
    async fn chat(
        &self,
        system_prompt: &str,
        history: &[ConversationTurn],
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let mut messages = Vec::with_capacity(history.len().min(HISTORY_WINDOW) + 2);
        messages.push(ChatMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[start..] {
            messages.push(ChatMessage {
                role: match turn.role {
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: turn.content.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: user_message.to_string(),
        });

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(ProviderError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::AiApi(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(ProviderError::AiDeserialization)?;

        let raw_response = completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(raw_response)
    }
}
