//! HTTP request handlers for the Roster REST API.
//!
//! - [`companies`] - CRUD over companies
//! - [`employees`] - CRUD over employees nested under a company
//! - [`health`] - Health check endpoint

pub mod companies;
pub mod employees;
pub mod health;

pub use companies::{
    create_company_handler, delete_company_handler, get_company_handler, list_companies_handler,
    update_company_handler,
};
pub use employees::{
    create_employee_handler, delete_employee_handler, get_employee_handler,
    list_employees_handler, partially_update_employee_handler, update_employee_handler,
};
pub use health::health_handler;
