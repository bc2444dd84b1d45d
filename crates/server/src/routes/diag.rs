use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{error::truncate, state::AppState};

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "name": "Sahara", "status": "ok" }))
}

#[derive(Debug, Serialize)]
pub struct TestReport {
    pub backend: String,
    pub store: String,
    pub store_url: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Connectivity report for the document store.
/// GET /test
///
/// Always answers 200; a broken store shows up as a degraded report, never
/// as a crash. Store error text is truncated before it reaches the client.
pub async fn test_store(State(state): State<AppState>) -> Json<TestReport> {
    let mut report = TestReport {
        backend: "running".to_string(),
        store: "not available".to_string(),
        store_url: if std::env::var("DATABASE_URL").is_ok() {
            "set".to_string()
        } else {
            "not set".to_string()
        },
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        match store.collection_names().await {
            Ok(collections) => {
                report.store = "connected".to_string();
                report.connection_status = "connected".to_string();
                report.collections = collections;
            }
            Err(e) => {
                report.store = format!("connected but error: {}", truncate(&e.to_string(), 60));
            }
        }
    }

    Json(report)
}
