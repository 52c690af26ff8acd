use crate::model::Record;
use serde::Serialize;

/// The single response shape produced per query.
///
/// Serialized untagged, so a failure renders as `{"error": {...}}` and a
/// success as `{"metadata": {...}, "data": [...]}` with no null placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultEnvelope<'a> {
    Failure {
        error: ErrorBody,
    },
    Success {
        metadata: Metadata,
        data: Vec<Record<'a>>,
    },
}

impl ResultEnvelope<'_> {
    pub fn is_error(&self) -> bool {
        matches!(self, ResultEnvelope::Failure { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_count: usize,
    pub offset: i64,
    pub limit: i64,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}
