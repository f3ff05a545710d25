//! Route configuration for the Roster REST API.
//!
//! The operation registry declared here is the single source of truth for
//! operation names, methods, and route templates: the router and the
//! hypermedia link factories are both derived from it, and the link
//! catalog is validated against it at startup.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use roster_store::RosterStore;

use crate::handlers;
use crate::shaping::OperationRegistry;
use crate::state::AppState;

/// Route template for the company collection.
pub const COMPANIES: &str = "/api/companies";
/// Route template for a single company.
pub const COMPANY: &str = "/api/companies/{company_id}";
/// Route template for a company's employee collection.
pub const EMPLOYEES: &str = "/api/companies/{company_id}/employees";
/// Route template for a single employee.
pub const EMPLOYEE: &str = "/api/companies/{company_id}/employees/{employee_id}";

/// Builds the registry of named operations the API exposes.
///
/// Every routed operation is registered here; the link catalog resolves
/// its link sets against this registry when the application starts.
pub fn operation_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();

    registry.register("get_companies", "GET", COMPANIES);
    registry.register("create_company", "POST", COMPANIES);
    registry.register("get_company", "GET", COMPANY);
    registry.register("update_company", "PUT", COMPANY);
    registry.register("delete_company", "DELETE", COMPANY);

    registry.register("get_employees_for_company", "GET", EMPLOYEES);
    registry.register("create_employee_for_company", "POST", EMPLOYEES);
    registry.register("get_employee_for_company", "GET", EMPLOYEE);
    registry.register("update_employee_for_company", "PUT", EMPLOYEE);
    registry.register("partially_update_employee_for_company", "PATCH", EMPLOYEE);
    registry.register("delete_employee_for_company", "DELETE", EMPLOYEE);

    registry
}

/// Creates all Roster REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Companies
/// - `GET /api/companies` - List companies
/// - `POST /api/companies` - Create a company
/// - `GET /api/companies/{company_id}` - Read a company
/// - `PUT /api/companies/{company_id}` - Replace a company
/// - `DELETE /api/companies/{company_id}` - Delete a company (cascades)
///
/// ## Employees
/// - `GET /api/companies/{company_id}/employees` - List employees
/// - `POST /api/companies/{company_id}/employees` - Create an employee
/// - `GET /api/companies/{company_id}/employees/{employee_id}` - Read
/// - `PUT /api/companies/{company_id}/employees/{employee_id}` - Replace
/// - `PATCH /api/companies/{company_id}/employees/{employee_id}` - Patch
/// - `DELETE /api/companies/{company_id}/employees/{employee_id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: RosterStore + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        // Company routes
        .route(COMPANIES, get(handlers::list_companies_handler::<S>))
        .route(COMPANIES, post(handlers::create_company_handler::<S>))
        .route(COMPANY, get(handlers::get_company_handler::<S>))
        .route(COMPANY, put(handlers::update_company_handler::<S>))
        .route(COMPANY, delete(handlers::delete_company_handler::<S>))
        // Employee routes
        .route(EMPLOYEES, get(handlers::list_employees_handler::<S>))
        .route(EMPLOYEES, post(handlers::create_employee_handler::<S>))
        .route(EMPLOYEE, get(handlers::get_employee_handler::<S>))
        .route(EMPLOYEE, put(handlers::update_employee_handler::<S>))
        .route(
            EMPLOYEE,
            patch(handlers::partially_update_employee_handler::<S>),
        )
        .route(EMPLOYEE, delete(handlers::delete_employee_handler::<S>))
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_operations() {
        let registry = operation_registry();
        assert_eq!(registry.len(), 11);

        for name in [
            "get_companies",
            "create_company",
            "get_company",
            "update_company",
            "delete_company",
            "get_employees_for_company",
            "create_employee_for_company",
            "get_employee_for_company",
            "update_employee_for_company",
            "partially_update_employee_for_company",
            "delete_employee_for_company",
        ] {
            assert!(registry.get(name).is_some(), "missing operation {}", name);
        }
    }

    #[test]
    fn test_registry_templates_match_routes() {
        let registry = operation_registry();
        let op = registry.get("get_employee_for_company").unwrap();
        assert_eq!(op.template, EMPLOYEE);
        assert_eq!(op.method, "GET");

        let op = registry.get("create_company").unwrap();
        assert_eq!(op.template, COMPANIES);
        assert_eq!(op.method, "POST");
    }
}
