//! # roster-rest - Company/Employee REST API
//!
//! This crate implements the HTTP surface of the Roster server: a REST API
//! over companies and the employees nested under them, with dynamic
//! response shaping. Collection responses can be narrowed to
//! caller-selected fields (`?fields=`) and decorated with hypermedia links
//! when the caller negotiates a HATEOAS media type through the `Accept`
//! header.
//!
//! ## Features
//!
//! - **CRUD**: Create, read, update, patch, and delete for companies and
//!   their employees
//! - **Data shaping**: `?fields=name,age` narrows collection items to the
//!   requested fields; the entity identity is always retained
//! - **Hypermedia links**: an `Accept` subtype ending in `hateoas` wraps
//!   the collection in `{value, links}` with per-item operation links
//! - **Filtering and paging**: age windows, name search, ordering, and an
//!   `X-Pagination` metadata header on collection responses
//! - **JSON Patch**: RFC 6902 partial updates for employees
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_rest::{create_app, ServerConfig};
//! use roster_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     let app = create_app(store)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list companies | GET | `/api/companies` |
//! | create company | POST | `/api/companies` |
//! | read company | GET | `/api/companies/{company_id}` |
//! | update company | PUT | `/api/companies/{company_id}` |
//! | delete company | DELETE | `/api/companies/{company_id}` |
//! | list employees | GET | `/api/companies/{company_id}/employees` |
//! | create employee | POST | `/api/companies/{company_id}/employees` |
//! | read employee | GET | `/api/companies/{company_id}/employees/{employee_id}` |
//! | update employee | PUT | `/api/companies/{company_id}/employees/{employee_id}` |
//! | patch employee | PATCH | `/api/companies/{company_id}/employees/{employee_id}` |
//! | delete employee | DELETE | `/api/companies/{company_id}/employees/{employee_id}` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! All errors are returned as a JSON body with `statusCode` and `message`
//! fields:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Bad request (malformed query, inverted age range, bad patch) |
//! | 404 | Company or employee not found |
//! | 422 | Validation failure (an `errors` array lists the violations) |
//! | 500 | Internal server error |
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_SERVER_PORT` | 8080 | Server port |
//! | `ROSTER_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ROSTER_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `ROSTER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROSTER_ENABLE_CORS` | true | Enable CORS |
//! | `ROSTER_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `ROSTER_BASE_URL` | http://localhost:8080 | Base URL used in links |
//! | `ROSTER_DEFAULT_PAGE_SIZE` | 10 | Default collection page size |
//! | `ROSTER_MAX_PAGE_SIZE` | 50 | Maximum collection page size |
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration, link catalog)
//! - [`model`] - Wire DTOs and their shaping schemas
//! - [`shaping`] - Field selection, projection, negotiation, links
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for query parameters and media types
//! - [`responses`] - Pagination metadata and headers
//! - [`routing`] - Route configuration and the operation registry

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod responses;
pub mod routing;
pub mod shaping;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use shaping::LinkError;
pub use state::{AppState, LinkCatalog};

use std::sync::Arc;

use axum::Router;
use roster_store::RosterStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
///
/// # Errors
///
/// Fails when the hypermedia link catalog cannot be validated against the
/// operation registry; this indicates a configuration bug and should abort
/// startup.
pub fn create_app<S>(storage: S) -> Result<Router, LinkError>
where
    S: RosterStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete REST API with all handlers,
/// middleware, and the startup-validated link catalog.
///
/// # Example
///
/// ```rust,ignore
/// use roster_rest::{create_app_with_config, ServerConfig};
/// use roster_store::MemoryStore;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryStore::new(), config)?;
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Result<Router, LinkError>
where
    S: RosterStore + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    // Validate the link catalog against the operation registry before
    // serving anything; a mismatch is fatal.
    let registry = routing::operation_registry();
    let links = LinkCatalog::build(&registry)?;

    // Create application state
    let state = AppState::new(Arc::new(storage), config.clone(), links);

    // Build the router with all routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    Ok(router.layer(service_builder))
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
