//! Collection query-parameter extractors.
//!
//! Extracts paging, filtering, and field-selection parameters from
//! collection requests. Page sizes are resolved against configured limits
//! by the handler; the extractor keeps the raw caller values.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::RestError;

/// Query parameters for the company collection endpoint.
#[derive(Debug, Clone, Default)]
pub struct CompanyParameters {
    page_number: Option<usize>,
    page_size: Option<usize>,
    /// Raw field-selection specification.
    pub fields: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyQuery {
    page_number: Option<usize>,
    page_size: Option<usize>,
    fields: Option<String>,
}

impl CompanyParameters {
    /// Resolves the page number and size against configured defaults and
    /// limits. Page numbers are 1-based; zero is coerced to the first
    /// page.
    pub fn page(&self, default_size: usize, max_size: usize) -> (usize, usize) {
        let number = self.page_number.unwrap_or(1).max(1);
        let size = self.page_size.unwrap_or(default_size).min(max_size).max(1);
        (number, size)
    }
}

impl<S> FromRequestParts<S> for CompanyParameters
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<CompanyQuery>::from_request_parts(parts, state)
            .await
            .map_err(|err| RestError::BadRequest {
                message: format!("invalid query parameters: {}", err),
            })?;

        Ok(Self {
            page_number: query.page_number,
            page_size: query.page_size,
            fields: query.fields,
        })
    }
}

/// Query parameters for the employee collection endpoint.
#[derive(Debug, Clone)]
pub struct EmployeeParameters {
    page_number: Option<usize>,
    page_size: Option<usize>,
    /// Minimum age filter (inclusive).
    pub min_age: u32,
    /// Maximum age filter (inclusive).
    pub max_age: u32,
    /// Case-insensitive name substring filter.
    pub search_term: Option<String>,
    /// Sort specification, e.g. `name` or `age desc`.
    pub order_by: Option<String>,
    /// Raw field-selection specification.
    pub fields: Option<String>,
}

impl Default for EmployeeParameters {
    fn default() -> Self {
        Self {
            page_number: None,
            page_size: None,
            min_age: 0,
            max_age: u32::MAX,
            search_term: None,
            order_by: None,
            fields: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmployeeQuery {
    page_number: Option<usize>,
    page_size: Option<usize>,
    min_age: Option<u32>,
    max_age: Option<u32>,
    search_term: Option<String>,
    order_by: Option<String>,
    fields: Option<String>,
}

impl EmployeeParameters {
    /// Resolves the page number and size against configured defaults and
    /// limits.
    pub fn page(&self, default_size: usize, max_size: usize) -> (usize, usize) {
        let number = self.page_number.unwrap_or(1).max(1);
        let size = self.page_size.unwrap_or(default_size).min(max_size).max(1);
        (number, size)
    }

    /// Whether the requested age window is satisfiable.
    pub fn valid_age_range(&self) -> bool {
        self.max_age >= self.min_age
    }
}

impl<S> FromRequestParts<S> for EmployeeParameters
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<EmployeeQuery>::from_request_parts(parts, state)
            .await
            .map_err(|err| RestError::BadRequest {
                message: format!("invalid query parameters: {}", err),
            })?;

        let params = Self {
            page_number: query.page_number,
            page_size: query.page_size,
            min_age: query.min_age.unwrap_or(0),
            max_age: query.max_age.unwrap_or(u32::MAX),
            search_term: query.search_term,
            order_by: query.order_by,
            fields: query.fields,
        };

        if !params.valid_age_range() {
            return Err(RestError::BadRequest {
                message: "max_age can't be less than min_age".to_string(),
            });
        }

        Ok(params)
    }
}
