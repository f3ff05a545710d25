//! Response utilities for the Roster REST API.
//!
//! - [`pagination`] - paging metadata and the `X-Pagination` header

pub mod pagination;

pub use pagination::{paginate, PageMetadata, X_PAGINATION};
