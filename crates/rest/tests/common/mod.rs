//! REST API test harness.
//!
//! Provides a configured in-memory test server plus seeding helpers for
//! the integration suites.

use std::sync::Arc;

use axum_test::{TestResponse, TestServer};
use serde_json::Value;
use uuid::Uuid;

use roster_rest::routing::{create_routes, operation_registry};
use roster_rest::{AppState, LinkCatalog, ServerConfig};
use roster_store::{Company, Employee, MemoryStore, NewCompany, NewEmployee, RosterStore};

/// Media type that negotiates hypermedia-decorated collection responses.
pub const HATEOAS_JSON: &str = "application/vnd.roster.hateoas+json";

/// Test harness wrapping a [`TestServer`] over the in-memory backend.
///
/// The backend is shared with the server, so data seeded through the
/// harness is visible to requests.
pub struct RosterTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub store: Arc<MemoryStore>,
}

impl RosterTestHarness {
    /// Creates a harness over a fresh in-memory store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let config = ServerConfig::for_testing();
        let links =
            LinkCatalog::build(&operation_registry()).expect("link catalog must validate");
        let state = AppState::new(Arc::clone(&store), config, links);
        let server =
            TestServer::new(create_routes(state)).expect("Failed to create test server");

        Self { server, store }
    }

    /// Seeds a company directly through the backend.
    pub async fn seed_company(&self, name: &str, address: &str, country: &str) -> Company {
        self.store
            .create_company(NewCompany {
                name: name.to_string(),
                address: address.to_string(),
                country: country.to_string(),
            })
            .await
            .expect("Failed to seed company")
    }

    /// Seeds an employee under the given company.
    pub async fn seed_employee(
        &self,
        company_id: Uuid,
        name: &str,
        age: u32,
        position: &str,
    ) -> Employee {
        self.store
            .create_employee(
                company_id,
                NewEmployee {
                    name: name.to_string(),
                    age,
                    position: position.to_string(),
                },
            )
            .await
            .expect("Failed to seed employee")
    }

    /// Seeds the demo company with its three employees and returns the
    /// company.
    pub async fn seed_demo(&self) -> Company {
        let company = self
            .seed_company("IT_Solutions Ltd", "583 Wall Dr. Gwynn Oak, MD 21207", "USA")
            .await;
        self.seed_employee(company.id, "Sam Raiden", 26, "Software developer")
            .await;
        self.seed_employee(company.id, "Jana McLeaf", 30, "Software developer")
            .await;
        self.seed_employee(company.id, "Kane Miller", 35, "Administrator")
            .await;
        company
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a GET request with an explicit `Accept` header.
    pub async fn get_with_accept(&self, path: &str, accept: &str) -> TestResponse {
        self.server
            .get(path)
            .add_header("accept", accept.to_string())
            .await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a PATCH request with a JSON Patch body.
    pub async fn patch(&self, path: &str, body: Value) -> TestResponse {
        self.server.patch(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }
}

impl Default for RosterTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
