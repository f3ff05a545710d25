//! Pagination metadata and the `X-Pagination` response header.
//!
//! Collection handlers page their result sets and advertise the paging
//! state through the `X-Pagination` header; the response body itself is
//! produced by the shaping subsystem and never carries paging metadata.

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;

/// Name of the pagination metadata header.
pub const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Paging state for one collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// 1-based page number of this response.
    pub current_page: usize,
    /// Total number of pages at the current page size.
    pub total_pages: usize,
    /// Page size used for slicing.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_count: usize,
}

impl PageMetadata {
    /// Computes metadata for a collection of `total_count` items.
    pub fn new(total_count: usize, current_page: usize, page_size: usize) -> Self {
        Self {
            current_page,
            total_pages: total_count.div_ceil(page_size),
            page_size,
            total_count,
        }
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Serializes the metadata into the `X-Pagination` header value.
    pub fn to_header_value(&self) -> HeaderValue {
        let json = serde_json::to_string(self).unwrap_or_default();
        HeaderValue::from_str(&json).unwrap_or_else(|_| HeaderValue::from_static("{}"))
    }
}

/// Slices one page out of an already filtered and sorted collection.
///
/// `page_number` is 1-based; pages past the end yield an empty slice with
/// metadata still describing the full collection.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> (Vec<T>, PageMetadata) {
    let metadata = PageMetadata::new(items.len(), page_number, page_size);
    let start = (page_number - 1).saturating_mul(page_size);
    let page = items
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();
    (page, metadata)
}
