//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::config::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET, MAX_PAGE_LIMIT, MAX_PAGE_OFFSET};

/// Offset/limit query parameters
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of books to skip
    #[serde(default = "default_offset")]
    #[validate(range(max = MAX_PAGE_OFFSET, message = "offset is out of range"))]
    #[param(example = 0)]
    pub offset: u64,
    /// Maximum number of books to return (values above 100 are clamped)
    #[serde(default = "default_limit")]
    #[param(example = 100, maximum = 100)]
    pub limit: u64,
}

fn default_offset() -> u64 {
    DEFAULT_PAGE_OFFSET
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl PageParams {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_LIMIT)
    }

    /// Rows to skip
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_PAGE_OFFSET,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
