use crate::model::{QueryParams, QueryStringParams, RequestBody};

const DEFAULT_LIMIT: i64 = 10;
const DEFAULT_OFFSET: i64 = 1;
/// Offset used after an unparsable query string value; always rejected later
const FALLBACK_OFFSET: i64 = 0;

/// Merge query string and body parameters into one resolved set.
///
/// Query string values override the defaults, and body values override both.
/// If either query string number fails to parse, `limit` falls back to 10 and
/// `offset` to 0 before body values are applied. The keyword only ever comes
/// from the body.
pub fn resolve_params(query: &QueryStringParams, body: &RequestBody) -> QueryParams {
    let (mut limit, mut offset) = match parse_query_numbers(query) {
        Some(parsed) => parsed,
        None => (DEFAULT_LIMIT, FALLBACK_OFFSET),
    };

    if let Some(body_limit) = body.limit {
        limit = body_limit;
    }
    if let Some(body_offset) = body.offset {
        offset = body_offset;
    }

    QueryParams {
        offset,
        limit,
        keyword: body.keyword.clone(),
    }
}

/// Returns `(limit, offset)` or `None` when a non-empty value is not an integer
fn parse_query_numbers(query: &QueryStringParams) -> Option<(i64, i64)> {
    let limit = parse_non_empty(query.limit.as_deref(), DEFAULT_LIMIT)?;
    let offset = parse_non_empty(query.offset.as_deref(), DEFAULT_OFFSET)?;
    Some((limit, offset))
}

fn parse_non_empty(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw {
        None | Some("") => Some(default),
        Some(value) => value.parse().ok(),
    }
}
