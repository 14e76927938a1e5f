//! The submitting client.

use crate::backup::BackupList;
use crate::error::{Error, Result};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use waitlist_core::{EmailAddress, SubmitRequest, SubmitResponse};

/// Message shown when local validation rejects the input.
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Fallback message when the proxy rejected without saying why.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

/// Message shown when the proxy could not be reached or answered
/// something other than the contract.
pub const TRY_AGAIN_LATER: &str = "Unable to register email. Please try again later.";

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The email was registered
    Success,
    /// Local validation rejected the input; nothing was sent
    Invalid,
    /// The proxy answered with an error envelope
    Rejected,
    /// The proxy was unreachable or its response was unusable
    Unavailable,
}

/// Terminal outcome of one submission, always carrying a readable
/// message; the caller is never left in an indefinite submitting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// How the submission ended
    pub kind: OutcomeKind,
    /// User-facing message describing the outcome
    pub message: String,
}

impl Outcome {
    fn new<S: Into<String>>(kind: OutcomeKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if the email was registered.
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Releases the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::SubmissionInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Client for submitting emails through the proxy.
///
/// Holds at most one submission in flight at a time: a second `submit`
/// while one is outstanding fails fast with
/// [`Error::SubmissionInFlight`] instead of issuing a duplicate
/// request.
pub struct SubmitClient {
    http: reqwest::Client,
    submit_url: String,
    user_agent: String,
    backup: Mutex<BackupList>,
    in_flight: AtomicBool,
}

impl SubmitClient {
    /// Creates a client that submits to `submit_url` and records
    /// successes into `backup`.
    pub fn new<S: Into<String>>(submit_url: S, backup: BackupList) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            submit_url: submit_url.into(),
            user_agent: concat!("waitlist-client/", env!("CARGO_PKG_VERSION")).to_string(),
            backup: Mutex::new(backup),
            in_flight: AtomicBool::new(false),
        })
    }

    /// Overrides the client identifier sent with each submission.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Submits one email.
    ///
    /// Validation happens before anything touches the network; an input
    /// that fails the syntactic check produces an
    /// [`OutcomeKind::Invalid`] outcome without a request being issued.
    /// Every other path issues exactly one request and maps the result:
    ///
    /// - proxy success envelope → [`OutcomeKind::Success`], the email
    ///   is recorded into the backup list
    /// - proxy error envelope → [`OutcomeKind::Rejected`] with the
    ///   proxy's message verbatim, backup list untouched
    /// - transport failure or a non-envelope response →
    ///   [`OutcomeKind::Unavailable`] with the generic retry message
    pub async fn submit(&self, raw_email: &str) -> Result<Outcome> {
        let email = match EmailAddress::parse(raw_email) {
            Ok(email) => email,
            Err(err) => {
                return Ok(Outcome::new(OutcomeKind::Invalid, err.to_string()));
            }
        };

        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let request = SubmitRequest {
            email: email.as_str().to_string(),
            timestamp: Some(Utc::now().to_rfc3339()),
            user_agent: Some(self.user_agent.clone()),
        };

        tracing::debug!(email = %email, "submitting registration");

        let response = match self
            .http
            .post(&self.submit_url)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "proxy unreachable");
                return Ok(Outcome::new(OutcomeKind::Unavailable, TRY_AGAIN_LATER));
            }
        };

        // The proxy reports outcomes in the body envelope on every
        // status code; a body outside the contract is a transport-level
        // failure from the caller's point of view.
        let envelope = match response.json::<SubmitResponse>().await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(error = %err, "unusable proxy response");
                return Ok(Outcome::new(OutcomeKind::Unavailable, TRY_AGAIN_LATER));
            }
        };

        if envelope.is_success() {
            // Best-effort: a backup list failure never turns a
            // registered email into a reported error.
            if let Err(err) = self.backup.lock().await.record(email.as_str()) {
                tracing::warn!(error = %err, "failed to record backup entry");
            }
            Ok(Outcome::new(OutcomeKind::Success, envelope.message))
        } else {
            let message = if envelope.message.is_empty() {
                SOMETHING_WENT_WRONG.to_string()
            } else {
                envelope.message
            };
            Ok(Outcome::new(OutcomeKind::Rejected, message))
        }
    }

    /// Emails recorded in the backup list so far.
    pub async fn backed_up_emails(&self) -> Vec<String> {
        self.backup.lock().await.emails().to_vec()
    }
}
