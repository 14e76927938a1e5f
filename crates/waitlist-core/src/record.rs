//! Registration record and wire contract types.
//!
//! Field names on the wire are camelCase (`userAgent`, `sheetName`).

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fallback client identifier when a hop finds none supplied.
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// One stored registration: an email plus its submission metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    /// The registered email, unique within the sheet
    pub email: String,
    /// ISO-8601 submission time, set by the earliest hop that had one
    pub timestamp: String,
    /// Opaque client identifier, informational only
    pub user_agent: String,
}

impl RegistrationRecord {
    /// Builds a record from possibly-partial submission data.
    ///
    /// The timestamp defaults to now and the user agent to
    /// [`UNKNOWN_USER_AGENT`]; a value supplied by an earlier hop is
    /// never overwritten.
    pub fn from_parts(
        email: String,
        timestamp: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            email,
            timestamp: timestamp.unwrap_or_else(|| Utc::now().to_rfc3339()),
            user_agent: user_agent.unwrap_or_else(|| UNKNOWN_USER_AGENT.to_string()),
        }
    }
}

/// Body of a submission request, as sent by the client to the proxy and
/// by the proxy to the sheet store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// The email to register
    pub email: String,
    /// ISO-8601 submission time, if the sender produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Client identifier, if the sender produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl SubmitRequest {
    /// Creates a request carrying only the email.
    pub fn new<S: Into<String>>(email: S) -> Self {
        Self {
            email: email.into(),
            timestamp: None,
            user_agent: None,
        }
    }

    /// Resolves the request into a full record, applying defaults for
    /// anything the sender omitted.
    pub fn into_record(self) -> RegistrationRecord {
        RegistrationRecord::from_parts(self.email, self.timestamp, self.user_agent)
    }
}

/// Outcome marker carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation succeeded
    Success,
    /// The operation was rejected or failed
    Error,
}

/// Response envelope for the submission path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Whether the submission was accepted
    pub status: Status,
    /// Human-readable outcome message; empty when the sender omitted one
    #[serde(default)]
    pub message: String,
    /// The registered email, echoed on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SubmitResponse {
    /// Builds a success envelope echoing the registered email.
    pub fn success<M, E>(message: M, email: E) -> Self
    where
        M: Into<String>,
        E: Into<String>,
    {
        Self {
            status: Status::Success,
            message: message.into(),
            email: Some(email.into()),
        }
    }

    /// Builds an error envelope.
    pub fn error<M: Into<String>>(message: M) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            email: None,
        }
    }

    /// Returns `true` if the envelope reports success.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Response envelope for the sheet store's read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Whether the read succeeded
    pub status: Status,
    /// Number of data rows (the header row is not counted)
    pub count: usize,
    /// Every row including the header, in arrival order
    pub data: Vec<Vec<String>>,
    /// Name of the sheet the rows came from
    pub sheet_name: String,
}

/// Response body of the `/healthz` probe both servers expose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy")
    pub status: String,
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Builds a healthy probe response for the named server.
    pub fn healthy<N, V>(name: N, version: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            status: "healthy".to_string(),
            name: name.into(),
            version: version.into(),
        }
    }
}
