//! HTTP surface of the sheet store.
//!
//! Mirrors the store's two operations: `POST /` appends a registration
//! and `GET /` returns the whole table. Both always answer HTTP 200
//! with the outcome carried in the body envelope; callers branch on the
//! `status` field, not on the HTTP status.

use crate::table::SheetTable;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::get;
use axum::Json;
use std::sync::Arc;
use tokio::sync::Mutex;
use waitlist_core::{HealthResponse, ListResponse, Status, SubmitRequest, SubmitResponse};

/// Shared handler state: the table behind a mutex.
///
/// The mutex serializes the scan-then-write sequence within this
/// process; the duplicate check and the append are atomic with respect
/// to other requests served by the same endpoint.
pub type SheetState = Arc<Mutex<SheetTable>>;

/// Builds the sheet store router.
pub fn router(state: SheetState) -> Router {
    Router::new()
        .route("/", get(list_rows).post(append_registration))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// `POST /` — append one registration.
///
/// Any fault (unparseable body, missing email, duplicate, table I/O) is
/// reported as an error envelope carrying the fault's description; the
/// endpoint never crashes a request and never drops a write silently.
async fn append_registration(
    State(state): State<SheetState>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Json<SubmitResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "unparseable append request");
            return Json(SubmitResponse::error(rejection.body_text()));
        }
    };

    if request.email.is_empty() {
        return Json(SubmitResponse::error("Email is required"));
    }

    let mut table = state.lock().await;
    match table.append(request.into_record()) {
        Ok(email) => Json(SubmitResponse::success("Email successfully registered", email)),
        Err(err) => {
            tracing::warn!(error = %err, "append rejected");
            Json(SubmitResponse::error(err.to_string()))
        }
    }
}

/// `GET /` — every row including the header, for inspection.
async fn list_rows(State(state): State<SheetState>) -> Json<ListResponse> {
    let table = state.lock().await;
    Json(ListResponse {
        status: Status::Success,
        count: table.data_row_count(),
        data: table.rows().to_vec(),
        sheet_name: table.sheet_name(),
    })
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}
