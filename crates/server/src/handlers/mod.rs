//! # Route Handlers
//!
//! Thin request handlers over the `schoolchat` core: the chat endpoint, the
//! admin knowledge CRUD, and the Smart Import pipeline.

pub mod chat;
pub mod knowledge;

pub use chat::chat_handler;
pub use knowledge::{
    create_knowledge_handler, delete_knowledge_handler, list_knowledge_handler,
    smart_import_handler, update_knowledge_handler,
};

/// The root handler.
pub async fn root() -> &'static str {
    "schoolchat server is running."
}

/// The health check handler.
pub async fn health_check() -> &'static str {
    "OK"
}
