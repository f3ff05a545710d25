//! Axum extractors for Roster-specific request data.
//!
//! - [`CompanyParameters`] / [`EmployeeParameters`] - collection query
//!   parameters (paging, filtering, field selection)
//! - [`NegotiatedMedia`] - media type negotiated from the `Accept` header

mod media_type;
mod params;

pub use media_type::NegotiatedMedia;
pub use params::{CompanyParameters, EmployeeParameters};
