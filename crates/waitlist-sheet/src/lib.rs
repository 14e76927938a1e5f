#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # waitlist-sheet
//!
//! The storage endpoint of the registration pipeline: an append-only
//! tabular store with exact-match email deduplication, exposed over a
//! small HTTP surface.
//!
//! The write path appends one `(email, timestamp, user agent)` row per
//! previously-unseen email; the read path returns the whole table for
//! inspection. There is no update, delete, or batch operation.

pub mod error;
pub mod routes;
pub mod table;

pub use error::{Error, Result};
pub use routes::{SheetState, router};
pub use table::{HEADER, SheetTable};
