//! Employee request handlers.
//!
//! CRUD over employees nested under their owning company. The collection
//! endpoint filters (age window, name search), sorts, pages, and then runs
//! the shaping pipeline; PATCH applies an RFC 6902 document to the
//! update-shaped representation and re-validates before persisting.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use roster_store::{Employee, RosterStore};

use crate::error::{RestError, RestResult};
use crate::extractors::{EmployeeParameters, NegotiatedMedia};
use crate::model::{EmployeeDto, EmployeeForManipulation};
use crate::responses::{paginate, X_PAGINATION};
use crate::shaping::{assemble, RouteContext};
use crate::state::AppState;

/// Handler for `GET /api/companies/{company_id}/employees`.
///
/// Returns a page of the company's employees after filtering and sorting,
/// shaped to the requested fields and decorated with hypermedia links when
/// negotiated.
pub async fn list_employees_handler<S>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<Uuid>,
    params: EmployeeParameters,
    media: NegotiatedMedia,
) -> RestResult<Response>
where
    S: RosterStore + Send + Sync,
{
    debug!(
        company_id = %company_id,
        fields = ?params.fields,
        "Processing employee list request"
    );

    let mut employees = state.store().list_employees(company_id).await?;
    apply_filters(&mut employees, &params);
    apply_order(&mut employees, params.order_by.as_deref());

    let (page_number, page_size) = params.page(state.default_page_size(), state.max_page_size());
    let (page, metadata) = paginate(&employees, page_number, page_size);
    let dtos: Vec<EmployeeDto> = page.iter().map(EmployeeDto::from).collect();

    let ctx = RouteContext::new(state.base_url())
        .with_param("company_id", company_id)
        .with_fields(params.fields.as_deref());
    let envelope = assemble(
        &dtos,
        params.fields.as_deref(),
        media.mime(),
        &state.links().employees,
        &ctx,
    );

    let mut headers = HeaderMap::new();
    headers.insert(X_PAGINATION, metadata.to_header_value());
    Ok((StatusCode::OK, headers, Json(envelope)).into_response())
}

/// Handler for `GET /api/companies/{company_id}/employees/{employee_id}`.
pub async fn get_employee_handler<S>(
    State(state): State<AppState<S>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
) -> RestResult<Json<EmployeeDto>>
where
    S: RosterStore + Send + Sync,
{
    debug!(
        company_id = %company_id,
        employee_id = %employee_id,
        "Processing employee read request"
    );

    let employee = state
        .store()
        .get_employee(company_id, employee_id)
        .await?
        .ok_or(RestError::EmployeeNotFound {
            company_id,
            id: employee_id,
        })?;
    Ok(Json(EmployeeDto::from(&employee)))
}

/// Handler for `POST /api/companies/{company_id}/employees`.
pub async fn create_employee_handler<S>(
    State(state): State<AppState<S>>,
    Path(company_id): Path<Uuid>,
    Json(body): Json<EmployeeForManipulation>,
) -> RestResult<Response>
where
    S: RosterStore + Send + Sync,
{
    body.validate()
        .map_err(|errors| RestError::UnprocessableEntity { errors })?;

    let employee = state
        .store()
        .create_employee(company_id, body.into_new())
        .await?;
    debug!(
        company_id = %company_id,
        employee_id = %employee.id,
        "Created employee"
    );

    let ctx = RouteContext::new(state.base_url()).with_param("company_id", company_id);
    let location = state.links().employees.item_href(&ctx, employee.id);

    let mut headers = HeaderMap::new();
    if let Ok(value) = location.parse() {
        headers.insert(header::LOCATION, value);
    }
    Ok((
        StatusCode::CREATED,
        headers,
        Json(EmployeeDto::from(&employee)),
    )
        .into_response())
}

/// Handler for `PUT /api/companies/{company_id}/employees/{employee_id}`.
pub async fn update_employee_handler<S>(
    State(state): State<AppState<S>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<EmployeeForManipulation>,
) -> RestResult<StatusCode>
where
    S: RosterStore + Send + Sync,
{
    body.validate()
        .map_err(|errors| RestError::UnprocessableEntity { errors })?;

    state
        .store()
        .update_employee(company_id, employee_id, body.into_new())
        .await?;
    debug!(
        company_id = %company_id,
        employee_id = %employee_id,
        "Updated employee"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `PATCH /api/companies/{company_id}/employees/{employee_id}`.
///
/// Applies an RFC 6902 JSON Patch document to the employee's
/// update-shaped representation, re-validates the result, and persists it.
pub async fn partially_update_employee_handler<S>(
    State(state): State<AppState<S>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<json_patch::Patch>,
) -> RestResult<StatusCode>
where
    S: RosterStore + Send + Sync,
{
    let employee = state
        .store()
        .get_employee(company_id, employee_id)
        .await?
        .ok_or(RestError::EmployeeNotFound {
            company_id,
            id: employee_id,
        })?;

    let mut doc = serde_json::to_value(EmployeeForManipulation::from(&employee)).map_err(|err| {
        RestError::InternalError {
            message: err.to_string(),
        }
    })?;
    json_patch::patch(&mut doc, &patch).map_err(|err| RestError::BadRequest {
        message: format!("invalid patch document: {}", err),
    })?;

    let patched: EmployeeForManipulation =
        serde_json::from_value(doc).map_err(|err| RestError::UnprocessableEntity {
            errors: vec![format!("patched employee is not valid: {}", err)],
        })?;
    patched
        .validate()
        .map_err(|errors| RestError::UnprocessableEntity { errors })?;

    state
        .store()
        .update_employee(company_id, employee_id, patched.into_new())
        .await?;
    debug!(
        company_id = %company_id,
        employee_id = %employee_id,
        "Patched employee"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `DELETE /api/companies/{company_id}/employees/{employee_id}`.
pub async fn delete_employee_handler<S>(
    State(state): State<AppState<S>>,
    Path((company_id, employee_id)): Path<(Uuid, Uuid)>,
) -> RestResult<StatusCode>
where
    S: RosterStore + Send + Sync,
{
    state
        .store()
        .delete_employee(company_id, employee_id)
        .await?;
    debug!(
        company_id = %company_id,
        employee_id = %employee_id,
        "Deleted employee"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Applies the age window and name search filters in place.
fn apply_filters(employees: &mut Vec<Employee>, params: &EmployeeParameters) {
    employees.retain(|e| e.age >= params.min_age && e.age <= params.max_age);

    if let Some(term) = params
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        let term = term.to_lowercase();
        employees.retain(|e| e.name.to_lowercase().contains(&term));
    }
}

/// Sorts in place by the `order_by` specification: a field name
/// (`name`, `age`, `position`) with an optional trailing `desc`. Unknown
/// fields fall back to the default `name` ordering.
fn apply_order(employees: &mut [Employee], order_by: Option<&str>) {
    let spec = order_by.unwrap_or("name");
    let mut parts = spec.split_whitespace();
    let field = parts.next().unwrap_or("name").to_ascii_lowercase();
    let descending = parts.next().is_some_and(|d| d.eq_ignore_ascii_case("desc"));

    match field.as_str() {
        "age" => employees.sort_by_key(|e| e.age),
        "position" => employees.sort_by(|a, b| a.position.cmp(&b.position)),
        _ => employees.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    if descending {
        employees.reverse();
    }
}
