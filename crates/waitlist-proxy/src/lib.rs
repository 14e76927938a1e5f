#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # waitlist-proxy
//!
//! The trust boundary of the registration pipeline. The proxy is the
//! only component that knows the sheet store's location; it re-validates
//! incoming submissions, forwards them upstream, and normalizes every
//! upstream outcome or failure into the stable client-facing contract.
//!
//! Nothing the proxy sends back to a client ever contains the sheet
//! URL, configuration key names, or raw upstream errors — those are
//! confined to server-side logs.

pub mod config;
pub mod error;
pub mod forward;
pub mod routes;

pub use config::ProxyConfig;
pub use error::{Error, Result};
pub use routes::{ProxyState, router};
