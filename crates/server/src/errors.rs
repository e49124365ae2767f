use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schoolchat::ProviderError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the kinds of errors that can occur within the
/// server, allowing them to be converted into appropriate HTTP responses.
/// Every response body carries `{ ok: false, error }` so clients have a
/// single failure shape.
pub enum AppError {
    /// A malformed or incomplete request from the client.
    BadRequest(String),
    /// The caller lacks a staff session for an admin route.
    Unauthorized,
    /// Errors originating from the `schoolchat` core.
    Provider(ProviderError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Provider(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Provider(err) => {
                error!("ProviderError: {:?}", err);
                match err {
                    ProviderError::AiRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to chat-completion API failed: {e}"),
                    ),
                    ProviderError::AiDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize chat-completion response: {e}"),
                    ),
                    ProviderError::AiApi(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Chat-completion API error: {e}"),
                    ),
                    ProviderError::MissingApiKey => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    ProviderError::StorageConnection(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Storage provider connection error: {e}"),
                    ),
                    ProviderError::StorageOperationFailed(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Storage operation failed: {e}"),
                    ),
                    ProviderError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                    ProviderError::JsonSerialization(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to serialize result: {e}"),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
