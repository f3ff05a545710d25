//! Company request handlers.
//!
//! CRUD over the company aggregate. The collection endpoint runs the
//! shaping pipeline: field selection via `fields`, hypermedia links when
//! the caller negotiated a `...hateoas+...` media type, and the
//! `X-Pagination` header describing the page that was sliced.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use roster_store::RosterStore;

use crate::error::{RestError, RestResult};
use crate::extractors::{CompanyParameters, NegotiatedMedia};
use crate::model::{CompanyDto, CompanyForManipulation};
use crate::responses::{paginate, X_PAGINATION};
use crate::shaping::{assemble, RouteContext};
use crate::state::AppState;

/// Handler for `GET /api/companies`.
///
/// Returns a page of companies, shaped to the requested fields and
/// decorated with hypermedia links when negotiated.
pub async fn list_companies_handler<S>(
    State(state): State<AppState<S>>,
    params: CompanyParameters,
    media: NegotiatedMedia,
) -> RestResult<Response>
where
    S: RosterStore + Send + Sync,
{
    debug!(fields = ?params.fields, "Processing company list request");

    let companies = state.store().list_companies().await?;
    let (page_number, page_size) = params.page(state.default_page_size(), state.max_page_size());
    let (page, metadata) = paginate(&companies, page_number, page_size);
    let dtos: Vec<CompanyDto> = page.iter().map(CompanyDto::from).collect();

    let ctx = RouteContext::new(state.base_url()).with_fields(params.fields.as_deref());
    let envelope = assemble(
        &dtos,
        params.fields.as_deref(),
        media.mime(),
        &state.links().companies,
        &ctx,
    );

    let mut headers = HeaderMap::new();
    headers.insert(X_PAGINATION, metadata.to_header_value());
    Ok((StatusCode::OK, headers, Json(envelope)).into_response())
}

/// Handler for `GET /api/companies/{company_id}`.
pub async fn get_company_handler<S>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<Uuid>,
) -> RestResult<Json<CompanyDto>>
where
    S: RosterStore + Send + Sync,
{
    debug!(company_id = %company_id, "Processing company read request");

    let company = state
        .store()
        .get_company(company_id)
        .await?
        .ok_or(RestError::CompanyNotFound { id: company_id })?;
    Ok(Json(CompanyDto::from(&company)))
}

/// Handler for `POST /api/companies`.
///
/// Validates the body, creates the company, and returns 201 with a
/// `Location` header resolved through the operation registry.
pub async fn create_company_handler<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<CompanyForManipulation>,
) -> RestResult<Response>
where
    S: RosterStore + Send + Sync,
{
    body.validate()
        .map_err(|errors| RestError::UnprocessableEntity { errors })?;

    let company = state.store().create_company(body.into_new()).await?;
    debug!(company_id = %company.id, "Created company");

    let ctx = RouteContext::new(state.base_url());
    let location = state.links().companies.item_href(&ctx, company.id);

    let mut headers = HeaderMap::new();
    if let Ok(value) = location.parse() {
        headers.insert(header::LOCATION, value);
    }
    Ok((StatusCode::CREATED, headers, Json(CompanyDto::from(&company))).into_response())
}

/// Handler for `PUT /api/companies/{company_id}`.
pub async fn update_company_handler<S>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<Uuid>,
    Json(body): Json<CompanyForManipulation>,
) -> RestResult<StatusCode>
where
    S: RosterStore + Send + Sync,
{
    body.validate()
        .map_err(|errors| RestError::UnprocessableEntity { errors })?;

    state
        .store()
        .update_company(company_id, body.into_new())
        .await?;
    debug!(company_id = %company_id, "Updated company");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `DELETE /api/companies/{company_id}`.
///
/// Deletes the company together with its employees.
pub async fn delete_company_handler<S>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<Uuid>,
) -> RestResult<StatusCode>
where
    S: RosterStore + Send + Sync,
{
    state.store().delete_company(company_id).await?;
    debug!(company_id = %company_id, "Deleted company");
    Ok(StatusCode::NO_CONTENT)
}
