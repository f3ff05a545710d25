//! Health check handler.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use roster_store::RosterStore;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// `GET /health` - returns 200 with the backend name while the process is
/// able to serve requests.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Json<Value>
where
    S: RosterStore + Send + Sync,
{
    Json(json!({
        "status": "ok",
        "backend": state.store().backend_name(),
    }))
}
