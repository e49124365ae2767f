//! # Application Configuration
//!
//! Environment-driven configuration for the assistant server. Values come
//! from the process environment (with `.env` support via `dotenvy` in the
//! entry point). The chat-completion API key is optional: its absence is a
//! valid "not configured" state that routes every chat through the fallback
//! responder.

use anyhow::{Context, Result};
use std::env;

/// Default Groq endpoint; any OpenAI-compatible chat-completions URL works.
const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// The server's runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The port for the server to listen on. `PORT` env var.
    pub port: u16,
    /// The path to the SQLite database file. `DB_URL` env var.
    pub db_url: String,
    /// Bearer token for the chat-completion API. `GROQ_API_KEY` env var.
    pub groq_api_key: Option<String>,
    /// The chat-completion endpoint. `GROQ_API_URL` env var.
    pub groq_api_url: String,
    /// The fixed model identifier. `GROQ_MODEL` env var.
    pub groq_model: String,
}

/// Loads the configuration from environment variables.
pub fn get_config() -> Result<Config> {
    let port = match env::var("PORT") {
        Ok(val) => val.parse::<u16>().context("PORT must be a valid port number")?,
        Err(_) => 9090,
    };

    let db_url = env::var("DB_URL").unwrap_or_else(|_| "db/schoolchat.db".to_string());

    // Treat an empty or placeholder key as unconfigured.
    let groq_api_key = env::var("GROQ_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty() && key != "YOUR_GROQ_API_KEY_HERE");

    let groq_api_url = env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let groq_model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    Ok(Config {
        port,
        db_url,
        groq_api_key,
        groq_api_url,
        groq_model,
    })
}
