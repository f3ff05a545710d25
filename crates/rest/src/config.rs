//! Server configuration for the Roster REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_SERVER_PORT` | 8080 | Server port |
//! | `ROSTER_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ROSTER_LOG_LEVEL` | info | Log level |
//! | `ROSTER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROSTER_ENABLE_CORS` | true | Enable CORS |
//! | `ROSTER_CORS_ORIGINS` | * | Allowed origins |
//! | `ROSTER_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `ROSTER_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `ROSTER_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `ROSTER_DEFAULT_PAGE_SIZE` | 10 | Default collection page size |
//! | `ROSTER_MAX_PAGE_SIZE` | 50 | Maximum collection page size |
//! | `ROSTER_SEED_DEMO_DATA` | true | Seed demo companies on startup |
//!
//! # Example
//!
//! ```rust
//! use roster_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the Roster REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster company/employee REST API Server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ROSTER_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ROSTER_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "ROSTER_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "ROSTER_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers and hypermedia
    /// links).
    #[arg(long, env = "ROSTER_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Default page size for collection results.
    #[arg(long, env = "ROSTER_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: usize,

    /// Maximum page size for collection results.
    #[arg(long, env = "ROSTER_MAX_PAGE_SIZE", default_value = "50")]
    pub max_page_size: usize,

    /// Seed demo companies and employees on startup.
    #[arg(long, env = "ROSTER_SEED_DEMO_DATA", default_value = "true")]
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            default_page_size: 10,
            max_page_size: 50,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if let Err(err) = url::Url::parse(&self.base_url) {
            errors.push(format!("Base URL is not a valid URL: {}", err));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost:8080".to_string(),
            default_page_size: 10,
            max_page_size: 50,
            seed_demo_data: false,
        }
    }
}
