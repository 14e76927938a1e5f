//! The single forward hop to the sheet store.

use crate::error::{Error, Result};
use waitlist_core::{RegistrationRecord, SubmitResponse};

/// Builds the shared HTTP client used for all forward calls.
///
/// Redirects are followed: the sheet store answers deployment-style
/// URLs with a redirect to the serving host, and the registration must
/// survive that hop.
pub fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?)
}

/// Forwards one registration to the sheet store.
///
/// One request, one response, no retry. Distinguishes the three ways
/// the hop can go wrong so the handler can answer with the right
/// generic message:
///
/// - transport failure → [`Error::Http`]
/// - non-success HTTP status → [`Error::UpstreamStatus`]
/// - HTTP success but a body outside the envelope contract →
///   [`Error::UpstreamContract`]
pub async fn forward(
    http: &reqwest::Client,
    sheet_url: &str,
    record: &RegistrationRecord,
) -> Result<SubmitResponse> {
    let response = http.post(sheet_url).json(record).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice::<SubmitResponse>(&bytes).map_err(|_| Error::UpstreamContract {
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}
