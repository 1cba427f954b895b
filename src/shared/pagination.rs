//! Pagination primitives shared between the HTTP layer and repositories.

use thiserror::Error;

/// Raised when `page` or `limit` is present but not a base-10 integer.
///
/// Malformed input must never be silently defaulted; the HTTP layer turns
/// this into a 400 response before any store query is issued.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid pagination parameters")]
pub struct InvalidPagination;

/// Normalized pagination request: 1-based page, page size of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: &'static str = "1";
    pub const DEFAULT_LIMIT: &'static str = "10";

    /// Parse raw query-string values into a normalized request.
    ///
    /// Absent values fall back to `"1"` / `"10"` before parsing, so a missing
    /// parameter never fails. Non-positive values are clamped up to 1 after a
    /// successful parse; valid-but-small numbers are never an error.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Result<Self, InvalidPagination> {
        let page = parse_positive(page.unwrap_or(Self::DEFAULT_PAGE))?;
        let limit = parse_positive(limit.unwrap_or(Self::DEFAULT_LIMIT))?;
        Ok(Self { page, limit })
    }

    /// Rows to skip before the requested page. Computed after clamping only.
    /// Saturates instead of overflowing; a saturated offset lands past the
    /// end of the table and yields an empty page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: &str) -> Result<u64, InvalidPagination> {
    let value: i64 = raw.trim().parse().map_err(|_| InvalidPagination)?;
    Ok(value.max(1) as u64)
}

/// One page of results plus the derived pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: page.page,
            limit: page.limit,
            total_pages: total.div_ceil(page.limit),
        }
    }
}
