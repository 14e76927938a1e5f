//! Error types for waitlist-sheet

use thiserror::Error;

/// Result type alias for waitlist-sheet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in waitlist-sheet
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from waitlist-core (duplicate registration, validation)
    #[error("{0}")]
    Core(#[from] waitlist_core::Error),

    /// CSV read/write error against the table file
    #[error("Sheet file error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error against the table file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
