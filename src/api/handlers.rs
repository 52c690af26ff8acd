use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::logic::{execute_query, resolve_params};
use crate::model::{
    DatasetCounts, MasterDataset, QueryStringParams, RequestBody, ResourceKind, ResultEnvelope,
};

/// Read-only state shared by every request
#[derive(Debug, Default)]
pub struct AppState {
    pub dataset: MasterDataset,
}

impl AppState {
    pub fn new(dataset: MasterDataset) -> Self {
        Self { dataset }
    }
}

pub type SharedState = Arc<AppState>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub counts: DatasetCounts,
}

pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        counts: state.dataset.counts(),
    })
}

/// Answer a paged query for `kind`.
///
/// Paging comes from the `offset`/`limit` query string and from the optional
/// JSON body, the body taking precedence. A body that is not valid JSON is
/// logged and ignored. A repeated query key uses its first value. Error
/// envelopes are sent with status 500.
pub async fn query_resource(
    kind: ResourceKind,
    State(state): State<SharedState>,
    Query(raw_query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Response {
    let query = QueryStringParams::from_pairs(&raw_query);
    let request_body = parse_request_body(&body);

    log::info!(
        "Route: {} offset: {:?} limit: {:?} body: {:?}",
        kind,
        query.offset,
        query.limit,
        request_body
    );

    let params = resolve_params(&query, &request_body);
    let envelope = execute_query(&state.dataset, &kind, &params);

    if let ResultEnvelope::Failure { error } = &envelope {
        log::error!(
            "Failed to process {} request: {} (code {})",
            kind,
            error.message,
            error.code
        );
    }

    let status = if envelope.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(envelope)).into_response()
}

/// Decode the optional request body, falling back to defaults
pub fn parse_request_body(body: &[u8]) -> RequestBody {
    if body.iter().all(u8::is_ascii_whitespace) {
        log::debug!("Empty request body, using default parameters");
        return RequestBody::default();
    }

    match serde_json::from_slice::<Option<RequestBody>>(body) {
        Ok(parsed) => parsed.unwrap_or_default(),
        Err(e) => {
            log::warn!(
                "Error parsing JSON request body, using default parameters: {} (body: {})",
                e,
                String::from_utf8_lossy(body)
            );
            RequestBody::default()
        }
    }
}
