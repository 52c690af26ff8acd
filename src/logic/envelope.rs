use crate::logic::paginate::{paginate, PaginationError};
use crate::model::{ErrorBody, Metadata, QueryParams, Record, ResourceKind, ResultEnvelope};

/// Page `items` and wrap the outcome in a response envelope.
///
/// `totalCount` is the length of `items` as given, so callers pass the
/// filtered sequence when a search ran. Offset and limit are echoed as
/// requested, not as clamped.
pub fn assemble<'a>(
    kind: &ResourceKind,
    params: &QueryParams,
    items: &[Record<'a>],
) -> ResultEnvelope<'a> {
    match paginate(items, params.offset, params.limit) {
        Ok(window) => ResultEnvelope::Success {
            metadata: Metadata {
                total_count: items.len(),
                offset: params.offset,
                limit: params.limit,
                kind: kind.as_str().to_string(),
                keyword: (!params.keyword.is_empty()).then(|| params.keyword.clone()),
            },
            data: window.to_vec(),
        },
        Err(err) => failure(&err),
    }
}

pub fn failure(err: &PaginationError) -> ResultEnvelope<'static> {
    ResultEnvelope::Failure {
        error: ErrorBody {
            message: err.to_string(),
            code: err.code(),
        },
    }
}
