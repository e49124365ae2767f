//! # Application Router
//!
//! Wires the route table to the handlers and attaches the shared state and
//! the HTTP trace layer.

use crate::{
    handlers::{
        chat_handler, create_knowledge_handler, delete_knowledge_handler, health_check,
        list_knowledge_handler, root, smart_import_handler, update_knowledge_handler,
    },
    state::AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/chat", post(chat_handler))
        .route(
            "/api/admin/knowledge",
            get(list_knowledge_handler)
                .post(create_knowledge_handler)
                .put(update_knowledge_handler)
                .delete(delete_knowledge_handler),
        )
        .route("/api/admin/knowledge/smart-import", post(smart_import_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
