//! Error types for waitlist-client

use thiserror::Error;

/// Result type alias for waitlist-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in waitlist-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from waitlist-core
    #[error("{0}")]
    Core(#[from] waitlist_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A second submission was attempted while one was outstanding
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// I/O error against the backup list file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backup list serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
