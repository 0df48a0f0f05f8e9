use thiserror::Error;

/// Main error type for name screening
#[derive(Error, Debug)]
pub enum ScreenError {
    /// Caller passed a limit or threshold outside the accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Candidate file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dedicated worker pool could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Background ranking task failed to complete
    #[error("Ranking task failed: {0}")]
    Task(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for ScreenError {
    fn from(s: String) -> Self {
        ScreenError::Other(s)
    }
}

impl From<&str> for ScreenError {
    fn from(s: &str) -> Self {
        ScreenError::Other(s.to_string())
    }
}

impl From<tokio::task::JoinError> for ScreenError {
    fn from(e: tokio::task::JoinError) -> Self {
        ScreenError::Task(e.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ScreenError>;
