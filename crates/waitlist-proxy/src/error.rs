//! Error types for waitlist-proxy

use thiserror::Error;

/// Result type alias for waitlist-proxy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in waitlist-proxy
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from waitlist-core
    #[error("{0}")]
    Core(#[from] waitlist_core::Error),

    /// The sheet store answered with a non-success HTTP status
    #[error("sheet store returned HTTP {status}")]
    UpstreamStatus {
        /// The HTTP status code the store answered with
        status: u16,
        /// The raw response body, for server-side logs only
        body: String,
    },

    /// The sheet store answered HTTP success but the body did not match
    /// the expected envelope
    #[error("sheet store response did not match the expected contract")]
    UpstreamContract {
        /// The raw response body, for server-side logs only
        body: String,
    },

    /// Network-level failure during the forward call
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
