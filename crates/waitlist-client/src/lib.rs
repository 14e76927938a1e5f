#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # waitlist-client
//!
//! The submitting side of the registration pipeline. Validates an email
//! locally, posts it to the proxy, keeps a best-effort local backup
//! list of successful submissions, and surfaces transient status
//! messages with a fixed display lifetime.
//!
//! The client never talks to the sheet store directly and never learns
//! its location.

pub mod backup;
pub mod client;
pub mod error;
pub mod status;

pub use backup::BackupList;
pub use client::{Outcome, OutcomeKind, SubmitClient};
pub use error::{Error, Result};
pub use status::{StatusKind, StatusMessage, TransientStatus};
