use thiserror::Error;

use crate::model::attendance::ClockState;

/// Failures at the key-value storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed on key `{key}`: {source}")]
    Backend {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("document under key `{key}` is not in stored form at record {index}")]
    NonCanonical { key: String, index: usize },
    #[error("malformed document under key `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode document for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid session")]
    InvalidSession,
    #[error("User not found")]
    UserNotFound,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("{0}")]
    InvalidInput(String),
    #[error("Leave request not found or already processed")]
    LeaveNotPending,
    #[error("Already clocked {from}")]
    ClockTransition { from: ClockState },
    #[error("No free id left in `{collection}`")]
    IdsExhausted { collection: &'static str },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Stable machine-readable code, used by the CLI envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidCredentials => "INVALID_CREDENTIALS",
            ServiceError::InvalidSession => "INVALID_SESSION",
            ServiceError::UserNotFound => "NOT_FOUND",
            ServiceError::UsernameTaken => "CONFLICT",
            ServiceError::InvalidInput(_) => "INVALID_INPUT",
            ServiceError::LeaveNotPending => "INVALID_TRANSITION",
            ServiceError::ClockTransition { .. } => "INVALID_TRANSITION",
            ServiceError::IdsExhausted { .. } => "CONFLICT",
            ServiceError::Store(_) => "STORAGE",
        }
    }
}
