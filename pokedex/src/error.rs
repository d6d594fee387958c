use std::io;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("io operation failed: {0}")]
    Io(Arc<io::Error>),
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("invalid json: {0}")]
    Json(Arc<serde_json::Error>),
    #[error("defaults store failed: {0}")]
    Defaults(String),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(Arc::new(error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(Arc::new(error))
    }
}

impl From<ron::Error> for Error {
    fn from(error: ron::Error) -> Self {
        Self::Defaults(error.to_string())
    }
}

impl From<ron::error::SpannedError> for Error {
    fn from(error: ron::error::SpannedError) -> Self {
        Self::Defaults(error.to_string())
    }
}
