//! # Application State
//!
//! The shared application state holds the record store and, when an API key
//! is configured, the chat-completion provider. Handlers receive it from the
//! router; cloning is cheap since everything is behind `Arc`.

use crate::config::Config;
use schoolchat::providers::{
    ai::{groq::GroqProvider, ChatProvider},
    db::SqliteProvider,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<Config>,
    /// The record store for announcements, events, schedules, and knowledge.
    pub store: Arc<SqliteProvider>,
    /// The chat-completion provider. `None` when no API key is configured;
    /// that state routes every chat through the fallback responder.
    pub ai_provider: Option<Arc<dyn ChatProvider>>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: Config) -> anyhow::Result<AppState> {
    let store = SqliteProvider::new(&config.db_url).await?;
    store.initialize_schema().await?;
    info!(db_path = %config.db_url, "Initialized record store (SQLite).");

    let ai_provider: Option<Arc<dyn ChatProvider>> = match &config.groq_api_key {
        Some(api_key) => {
            let provider = GroqProvider::new(
                config.groq_api_url.clone(),
                api_key.clone(),
                config.groq_model.clone(),
            )?;
            info!(model = %config.groq_model, "Chat-completion provider configured.");
            Some(Arc::new(provider))
        }
        None => {
            info!("No GROQ_API_KEY set; chat requests will use the fallback responder.");
            None
        }
    };

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        ai_provider,
    })
}
