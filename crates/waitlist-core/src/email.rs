//! Email address validation.

use crate::error::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Syntactic shape a submitted address must have: one or more
/// non-space/non-`@` characters, `@`, one or more, `.`, one or more.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// A syntactically valid email address.
///
/// Construction goes through [`EmailAddress::parse`], so holding a value
/// of this type means the address already passed the submission check.
/// Comparison is exact and case-sensitive; no trimming or case folding
/// is applied anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates `input` against the submission pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use waitlist_core::EmailAddress;
    ///
    /// let email = EmailAddress::parse("a@b.com").unwrap();
    /// assert_eq!(email.as_str(), "a@b.com");
    /// assert!(EmailAddress::parse("not-an-email").is_err());
    /// ```
    pub fn parse<S: Into<String>>(input: S) -> Result<Self> {
        let input = input.into();
        if EMAIL_PATTERN.is_match(&input) {
            Ok(Self(input))
        } else {
            Err(Error::validation_field(
                "email",
                "Please enter a valid email address.",
            ))
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
