use logopt_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("Invalid trace format: {0} (expected: text|json|journald)")]
    InvalidFormat(String),

    #[error("Invalid trace filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid option detail: {0}")]
    InvalidDetail(#[from] ModelError),

    #[error("Journald is not supported on this platform")]
    JournaldNotSupported,

    #[error("Failed to initialize journald: {0}")]
    JournaldInitFailed(String),

    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

pub type ObserveResult<T> = Result<T, ObserveError>;
