//! # roster-store - Storage layer for the Roster API server
//!
//! This crate defines the entity types and storage interface used by the
//! Roster REST API, plus an in-memory backend implementation.
//!
//! The REST layer depends only on the [`RosterStore`] trait; backends are
//! free to implement it over any medium. The bundled [`MemoryStore`] keeps
//! everything in process memory and is the default for development and
//! testing.
//!
//! ## Architecture
//!
//! - [`types`] - Entity types (`Company`, `Employee`) and their
//!   creation/update attribute bundles
//! - [`error`] - Storage error hierarchy
//! - [`memory`] - In-memory backend

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod memory;
pub mod types;

pub use error::{BackendError, ResourceError, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use types::{Company, CompanyUpdate, Employee, EmployeeUpdate, NewCompany, NewEmployee};

use async_trait::async_trait;
use uuid::Uuid;

/// Storage interface for companies and their employees.
///
/// All operations are id-addressed. Employee operations are
/// scoped to an owning company: a lookup through the wrong company behaves
/// as if the employee did not exist.
#[async_trait]
pub trait RosterStore {
    /// Returns a short name identifying the backend (for logs and health).
    fn backend_name(&self) -> &'static str;

    /// Lists all companies in a stable order.
    async fn list_companies(&self) -> StoreResult<Vec<Company>>;

    /// Reads a single company.
    async fn get_company(&self, id: Uuid) -> StoreResult<Option<Company>>;

    /// Creates a company, assigning its identifier.
    async fn create_company(&self, new: NewCompany) -> StoreResult<Company>;

    /// Replaces a company's mutable attributes.
    async fn update_company(&self, id: Uuid, update: CompanyUpdate) -> StoreResult<Company>;

    /// Deletes a company and all of its employees.
    async fn delete_company(&self, id: Uuid) -> StoreResult<()>;

    /// Lists a company's employees in a stable order.
    ///
    /// Fails with `CompanyNotFound` when the company does not exist.
    async fn list_employees(&self, company_id: Uuid) -> StoreResult<Vec<Employee>>;

    /// Reads a single employee owned by the given company.
    async fn get_employee(&self, company_id: Uuid, id: Uuid) -> StoreResult<Option<Employee>>;

    /// Creates an employee under the given company.
    async fn create_employee(&self, company_id: Uuid, new: NewEmployee) -> StoreResult<Employee>;

    /// Replaces an employee's mutable attributes.
    async fn update_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        update: EmployeeUpdate,
    ) -> StoreResult<Employee>;

    /// Deletes an employee.
    async fn delete_employee(&self, company_id: Uuid, id: Uuid) -> StoreResult<()>;
}
