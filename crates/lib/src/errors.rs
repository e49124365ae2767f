use thiserror::Error;

/// Custom error types for the assistant core.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to chat-completion API: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize chat-completion response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("Chat-completion API returned an error: {0}")]
    AiApi(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Storage provider connection error: {0}")]
    StorageConnection(String),
    #[error("Storage operation failed: {0}")]
    StorageOperationFailed(String),
    #[error("Failed to serialize result: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl From<turso::Error> for ProviderError {
    fn from(err: turso::Error) -> Self {
        ProviderError::StorageOperationFailed(err.to_string())
    }
}
