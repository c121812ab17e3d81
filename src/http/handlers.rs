//! HTTP request handlers for the service routes.
//!
//! Handlers are thin: the `Json` extractor decodes the body (rejecting
//! malformed payloads with a 4xx status before the endpoint runs), the
//! endpoint produces the response value, and `Json` encodes it back with
//! a `application/json` content type.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::endpoint;
use crate::endpoint::{CountRequest, CountResponse, UppercaseRequest, UppercaseResponse};
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;

/// `POST /uppercase`
pub async fn uppercase(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<UppercaseRequest>,
) -> Json<UppercaseResponse> {
    let request_id = headers.request_id().unwrap_or("unknown");
    tracing::debug!(
        request_id = %request_id,
        input_chars = req.s.chars().count(),
        "uppercase request"
    );

    Json(endpoint::uppercase(&state.service, req))
}

/// `POST /count`
pub async fn count(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CountRequest>,
) -> Json<CountResponse> {
    let request_id = headers.request_id().unwrap_or("unknown");
    tracing::debug!(
        request_id = %request_id,
        input_chars = req.s.chars().count(),
        "count request"
    );

    Json(endpoint::count(&state.service, req))
}
