//! Error types for the waitlist pipeline.

/// Errors that can occur while processing a registration.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input failed validation (bad or missing email, wrong HTTP verb).
    ///
    /// The message is safe to show to the submitting user as-is.
    #[error("{message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// The email is already present in the sheet.
    ///
    /// The display string is the exact message the sheet store puts on
    /// the wire; callers pass it through verbatim.
    #[error("Email already registered")]
    Duplicate {
        /// The email that was already registered
        email: String,
    },

    /// Required configuration could not be resolved.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// The sheet store answered with something other than the expected
    /// contract (non-success HTTP status or an unparseable body).
    #[error("Upstream error: {message}")]
    Upstream {
        /// Description of the unexpected response
        message: String,
    },

    /// Network-level failure reaching the next hop.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// I/O error (table file operations, backup list, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for waitlist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error's message may be shown to the end
    /// user verbatim.
    ///
    /// Validation and duplicate errors are terminal and user-facing;
    /// everything else is logged server-side and surfaced only as a
    /// generic message.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::Duplicate { .. } => true,
            Error::Config { .. } => false,
            Error::Upstream { .. } => false,
            Error::Transport { .. } => false,
            Error::Io(_) => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new duplicate-registration error.
    pub fn duplicate<S: Into<String>>(email: S) -> Self {
        Error::Duplicate {
            email: email.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new upstream error.
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Error::Upstream {
            message: message.into(),
        }
    }

    /// Creates a new transport error.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport {
            message: message.into(),
        }
    }
}
