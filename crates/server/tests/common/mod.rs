//! # Common Test Utilities
//!
//! A full application harness that spawns the real server on a random port
//! with a temporary SQLite database and a mock chat-completion endpoint.

#![allow(dead_code)]

use anyhow::Result;
use httpmock::MockServer;
use reqwest::Client;
use schoolchat::providers::{ai::groq::GroqProvider, db::SqliteProvider};
use schoolchat_server::{config::Config, router::create_router, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
///
/// The chat-completion provider is pointed at an `httpmock::MockServer`, so
/// each test scripts the upstream LLM behavior it needs.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub store: Arc<SqliteProvider>,
    _db_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let db_file = NamedTempFile::new()?;
        let db_path = db_file
            .path()
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp db path is not valid UTF-8"))?
            .to_string();

        let config = Config {
            port: 0,
            db_url: db_path.clone(),
            groq_api_key: Some("test-key".to_string()),
            groq_api_url: mock_server.url("/v1/chat/completions"),
            groq_model: "test-model".to_string(),
        };

        let store = Arc::new(SqliteProvider::new(&db_path).await?);
        store.initialize_schema().await?;

        let ai_provider = GroqProvider::new(
            config.groq_api_url.clone(),
            "test-key".to_string(),
            config.groq_model.clone(),
        )?;

        let app_state = AppState {
            config: Arc::new(config),
            store: store.clone(),
            ai_provider: Some(Arc::new(ai_provider)),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        // Give the server a moment to start up.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            store,
            _db_file: db_file,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked.
            let _ = tx.send(());
        }
    }
}
