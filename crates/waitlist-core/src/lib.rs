#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Waitlist Core Library
//!
//! Shared types for the email registration pipeline: the wire contract
//! between client, proxy, and sheet store, email validation, and the
//! error taxonomy used across the workspace.

pub mod email;
pub mod error;
pub mod record;

mod proptests;

// Re-exports for convenience
pub use email::EmailAddress;
pub use error::{Error, Result};
pub use record::{
    HealthResponse, ListResponse, RegistrationRecord, Status, SubmitRequest, SubmitResponse,
};
