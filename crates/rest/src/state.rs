//! Application state for the Roster REST API.
//!
//! This module defines the shared application state available to all
//! request handlers: the storage backend, the server configuration, and
//! the link catalog validated at startup.

use std::sync::Arc;

use roster_store::RosterStore;

use crate::config::ServerConfig;
use crate::shaping::{LinkError, OperationRegistry, ResourceLinks};

/// Per-resource-type link factories, validated once at startup.
///
/// Employees expose the full four-operation link set; companies have no
/// PATCH endpoint and expose a reduced set.
#[derive(Debug, Clone)]
pub struct LinkCatalog {
    /// Link factory for company resources.
    pub companies: ResourceLinks,
    /// Link factory for employee resources.
    pub employees: ResourceLinks,
}

impl LinkCatalog {
    /// Builds and validates the catalog against the operation registry.
    ///
    /// Fails when an operation is missing or a route template references a
    /// parameter the link context cannot bind; callers surface this as a
    /// startup error.
    pub fn build(registry: &OperationRegistry) -> Result<Self, LinkError> {
        let companies = ResourceLinks::builder("company", "company_id")
            .item_self("get_company")
            .delete("delete_company")
            .update("update_company")
            .collection("get_companies")
            .build(registry)?;

        let employees = ResourceLinks::builder("employee", "employee_id")
            .parent_params(&["company_id"])
            .item_self("get_employee_for_company")
            .delete("delete_employee_for_company")
            .update("update_employee_for_company")
            .partial_update("partially_update_employee_for_company")
            .collection("get_employees_for_company")
            .build(registry)?;

        Ok(Self {
            companies,
            employees,
        })
    }
}

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`RosterStore`])
pub struct AppState<S> {
    /// The storage backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Startup-validated link factories.
    links: Arc<LinkCatalog>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to
// be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
            links: Arc::clone(&self.links),
        }
    }
}

impl<S: RosterStore> AppState<S> {
    /// Creates a new AppState with the given store, configuration, and
    /// link catalog.
    pub fn new(store: Arc<S>, config: ServerConfig, links: LinkCatalog) -> Self {
        Self {
            store,
            config: Arc::new(config),
            links: Arc::new(links),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the link catalog.
    pub fn links(&self) -> &LinkCatalog {
        &self.links
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the default page size for collection results.
    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Returns the maximum page size for collection results.
    pub fn max_page_size(&self) -> usize {
        self.config.max_page_size
    }
}
