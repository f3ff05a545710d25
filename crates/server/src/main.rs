//! Roster server.
//!
//! A REST API over companies and their employees, with dynamic response
//! shaping and hypermedia links.

use clap::Parser;
use roster_rest::{create_app_with_config, init_logging, ServerConfig};
use roster_store::{MemoryStore, NewCompany, NewEmployee, RosterStore};
use tracing::info;

/// Seeds the demo companies and employees into a fresh store.
async fn seed_demo_data(store: &MemoryStore) -> anyhow::Result<()> {
    let it_solutions = store
        .create_company(NewCompany {
            name: "IT_Solutions Ltd".to_string(),
            address: "583 Wall Dr. Gwynn Oak, MD 21207".to_string(),
            country: "USA".to_string(),
        })
        .await?;
    let admin_solutions = store
        .create_company(NewCompany {
            name: "Admin_Solutions Ltd".to_string(),
            address: "312 Forest Avenue, BF 923".to_string(),
            country: "USA".to_string(),
        })
        .await?;

    for (name, age, position) in [
        ("Sam Raiden", 26, "Software developer"),
        ("Jana McLeaf", 30, "Software developer"),
    ] {
        store
            .create_employee(
                it_solutions.id,
                NewEmployee {
                    name: name.to_string(),
                    age,
                    position: position.to_string(),
                },
            )
            .await?;
    }
    store
        .create_employee(
            admin_solutions.id,
            NewEmployee {
                name: "Kane Miller".to_string(),
                age: 35,
                position: "Administrator".to_string(),
            },
        )
        .await?;

    info!("Seeded demo companies and employees");
    Ok(())
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Roster server"
    );

    let store = MemoryStore::new();
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
    }

    let app = create_app_with_config(store, config.clone())
        .map_err(|e| anyhow::anyhow!("Invalid link configuration: {}", e))?;
    serve(app, &config).await
}
