use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoticeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// The release endpoint answered with a non-success status
    #[error("Failed to fetch latest version (HTTP {status})")]
    FetchError { status: u16 },

    /// Transport-level failure (DNS, TLS, timeout, ...)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The host version accessor reported a failure
    #[error("Version lookup failed: {0}")]
    HostAccessorError(String),

    /// Key-value store could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Lock acquisition failed
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    /// Path resolution or validation error
    #[error("Path error: {0}")]
    PathError(String),

    #[error("Could not open '{url}': {reason}")]
    OpenLinkError { url: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for NoticeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => NoticeError::FetchError {
                status: status.as_u16(),
            },
            _ => NoticeError::NetworkError(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoticeError>;
