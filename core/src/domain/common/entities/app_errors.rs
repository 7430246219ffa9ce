use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found")]
    UserNotFound,

    #[error("LLM provider error: {0}")]
    ProviderError(String),

    #[error("Malformed provider response: {0}")]
    MalformedProviderResponse(String),

    #[error("Invalid analysis JSON: {reason}")]
    InvalidAnalysisJson { raw: String, reason: String },

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal server error")]
    InternalServerError,
}
