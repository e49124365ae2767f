//! Shared test scaffolding: an isolated in-memory record store and a mock
//! chat provider with pre-programmed responses.

use anyhow::Result;
use async_trait::async_trait;
use schoolchat::errors::ProviderError;
use schoolchat::providers::{ai::ChatProvider, db::SqliteProvider};
use schoolchat::types::ConversationTurn;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Test Setup ---

/// A helper struct to manage database creation for each test.
pub struct TestSetup {
    pub store: SqliteProvider,
}

impl TestSetup {
    /// Creates a new, isolated in-memory database and initializes the schema.
    pub async fn new() -> Result<Self> {
        let store = SqliteProvider::new(":memory:").await?;
        store.initialize_schema().await?;
        Ok(Self { store })
    }
}

// --- Mock Chat Provider ---

/// A `ChatProvider` that replays canned responses, keyed by a unique
/// substring of the system prompt, and records every call for assertions.
#[derive(Clone, Debug, Default)]
pub struct MockChatProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(String, String, u32)>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockChatProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs a response for system prompts containing `key`.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Makes every subsequent call fail with an API error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Retrieves the recorded (system_prompt, user_message, max_tokens) calls.
    pub fn get_calls(&self) -> Vec<(String, String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn chat(
        &self,
        system_prompt: &str,
        _history: &[ConversationTurn],
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push((
            system_prompt.to_string(),
            user_message.to_string(),
            max_tokens,
        ));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(ProviderError::AiApi(message));
        }

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if system_prompt.contains(key) {
                return Ok(response.clone());
            }
        }
        Err(ProviderError::AiApi(format!(
            "MockChatProvider has no response for system prompt: {system_prompt}"
        )))
    }
}
