use thiserror::Error;

/// Application code reported for every paging failure.
///
/// This lives inside the error body and is independent of the HTTP status.
pub const PAGINATION_ERROR_CODE: u16 = 402;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Either offset is <= 0 or limit is less than one")]
    InvalidRange { offset: i64, limit: i64 },
    #[error("Offset cannot be greater than length of data i.e., {total}")]
    OffsetOutOfBounds { total: usize },
}

impl PaginationError {
    pub fn code(&self) -> u16 {
        PAGINATION_ERROR_CODE
    }
}

/// Window of `items` starting at the 1-based `offset`, at most `limit` long.
///
/// The window is clamped to the items remaining after `offset`. An offset past
/// the end is an error, which includes every offset on an empty slice.
pub fn paginate<T>(items: &[T], offset: i64, limit: i64) -> Result<&[T], PaginationError> {
    if offset <= 0 || limit < 1 {
        return Err(PaginationError::InvalidRange { offset, limit });
    }

    let total = items.len();
    let start = match usize::try_from(offset - 1) {
        Ok(start) if start < total => start,
        _ => return Err(PaginationError::OffsetOutOfBounds { total }),
    };

    let remaining = total - start;
    let len = usize::try_from(limit).map_or(remaining, |limit| limit.min(remaining));
    Ok(&items[start..start + len])
}
