//! Proxy configuration.
//!
//! The sheet store's URL is a capability: whoever holds it can write to
//! the table directly. It is resolved once at startup from one of two
//! environment keys and injected into the router state; request
//! handling never does ad hoc environment lookups.

/// Server-only configuration key. Takes precedence.
pub const SHEET_URL_ENV: &str = "WAITLIST_SHEET_URL";

/// Client-visible configuration key, supported as a fallback for
/// deployments that only define the public variant.
pub const PUBLIC_SHEET_URL_ENV: &str = "PUBLIC_WAITLIST_SHEET_URL";

/// Resolved proxy configuration.
///
/// An unresolved URL is representable on purpose: the proxy still
/// starts, and every submission then fails with the not-configured
/// response without the sheet store ever being contacted.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    sheet_url: Option<String>,
}

impl ProxyConfig {
    /// Creates a configuration with a known sheet URL.
    pub fn new<S: Into<String>>(sheet_url: S) -> Self {
        Self {
            sheet_url: Some(sheet_url.into()),
        }
    }

    /// Creates a configuration with no sheet URL.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Applies the documented precedence: the server-only value wins
    /// over the client-visible one; empty strings count as unset.
    pub fn resolve(server_only: Option<String>, public: Option<String>) -> Self {
        let sheet_url = server_only
            .filter(|url| !url.is_empty())
            .or_else(|| public.filter(|url| !url.is_empty()));
        Self { sheet_url }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var(SHEET_URL_ENV).ok(),
            std::env::var(PUBLIC_SHEET_URL_ENV).ok(),
        )
    }

    /// The sheet store URL, if resolved.
    pub fn sheet_url(&self) -> Option<&str> {
        self.sheet_url.as_deref()
    }
}
