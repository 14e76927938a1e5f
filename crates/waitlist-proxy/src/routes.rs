//! Submission handling and response normalization.
//!
//! Every upstream outcome is collapsed into the small client-facing
//! message set below. Specific messages (validation, duplicate) pass
//! through verbatim; everything else is generic, with the detail logged
//! server-side only.

use crate::config::{PUBLIC_SHEET_URL_ENV, SHEET_URL_ENV, ProxyConfig};
use crate::error::Error;
use crate::forward::{forward, http_client};
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Json;
use waitlist_core::{HealthResponse, SubmitRequest, SubmitResponse};

/// Client-facing message when the submission body carries no email.
pub const EMAIL_REQUIRED: &str = "Email is required";

/// Client-facing message for non-POST requests.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Client-facing message when the sheet URL is unresolved.
pub const NOT_CONFIGURED: &str =
    "Email registration is not configured. Please contact support.";

/// Client-facing message when the store answers a non-success status.
pub const SUBMIT_FAILED: &str = "Failed to submit email. Please try again.";

/// Client-facing message when the store's body breaks the contract.
pub const INVALID_UPSTREAM: &str = "Invalid response from registration service";

/// Client-facing message for transport-level failures.
pub const UNABLE_TO_PROCESS: &str = "Unable to process request. Please try again later.";

/// Fallback success message when the store omitted one.
pub const REGISTERED: &str = "Email successfully registered";

/// Fallback rejection message when the store omitted one.
pub const REGISTRATION_FAILED: &str = "Failed to register email";

/// Shared handler state: resolved configuration plus the one HTTP
/// client reused across forward calls.
#[derive(Clone)]
pub struct ProxyState {
    config: ProxyConfig,
    http: reqwest::Client,
}

impl ProxyState {
    /// Creates the proxy state from a resolved configuration.
    pub fn new(config: ProxyConfig) -> crate::error::Result<Self> {
        Ok(Self {
            config,
            http: http_client()?,
        })
    }
}

/// Builds the proxy router.
///
/// `/api/submit` accepts POST only; other verbs answer 405 without
/// anything being forwarded.
pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/submit", post(submit).fallback(method_not_allowed))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn submit(
    State(state): State<ProxyState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> (StatusCode, Json<SubmitResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "submission body unusable");
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse::error(EMAIL_REQUIRED)),
            );
        }
    };

    if request.email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmitResponse::error(EMAIL_REQUIRED)),
        );
    }

    let Some(sheet_url) = state.config.sheet_url() else {
        // Key names go to the server log, never to the caller.
        tracing::error!(
            expected_keys = ?[SHEET_URL_ENV, PUBLIC_SHEET_URL_ENV],
            "sheet store URL not configured"
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SubmitResponse::error(NOT_CONFIGURED)),
        );
    };

    let record = request.into_record();
    let submitted_email = record.email.clone();

    match forward(&state.http, sheet_url, &record).await {
        Ok(envelope) if envelope.is_success() => {
            tracing::info!(email = %submitted_email, "registration accepted");
            let message = if envelope.message.is_empty() {
                REGISTERED.to_string()
            } else {
                envelope.message
            };
            (
                StatusCode::OK,
                Json(SubmitResponse::success(message, submitted_email)),
            )
        }
        Ok(envelope) => {
            // The store rejected it; its message (duplicate included)
            // passes through verbatim.
            tracing::info!(email = %submitted_email, message = %envelope.message, "registration rejected");
            let message = if envelope.message.is_empty() {
                REGISTRATION_FAILED.to_string()
            } else {
                envelope.message
            };
            (StatusCode::BAD_REQUEST, Json(SubmitResponse::error(message)))
        }
        Err(Error::UpstreamStatus { status, body }) => {
            tracing::error!(status, body = %body, "sheet store returned non-success");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::error(SUBMIT_FAILED)),
            )
        }
        Err(Error::UpstreamContract { body }) => {
            tracing::error!(body = %body, "unparseable sheet store response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::error(INVALID_UPSTREAM)),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "forward call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::error(UNABLE_TO_PROCESS)),
            )
        }
    }
}

async fn method_not_allowed() -> (StatusCode, Json<SubmitResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(SubmitResponse::error(METHOD_NOT_ALLOWED)),
    )
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}
