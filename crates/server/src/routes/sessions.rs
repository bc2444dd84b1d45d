//! Counselor session booking.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use shared::schemas::Session;
use shared::Validate;

use super::{Created, LIST_LIMIT};
use crate::{error::AppError, state::AppState};

/// POST /sessions
pub async fn book_session(
    State(state): State<AppState>,
    Json(session): Json<Session>,
) -> Result<Json<Created>, AppError> {
    session.validate()?;
    let doc = serde_json::to_value(&session).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = state.store()?.insert("session", doc).await?;
    tracing::debug!(
        "Booked session {} for user {} with counselor {}",
        id,
        session.user_id,
        session.counselor_id
    );
    Ok(Json(Created { id }))
}

#[derive(Debug, Deserialize)]
pub struct SessionListQuery {
    pub user_id: Option<String>,
    pub counselor_id: Option<String>,
}

/// GET /sessions?user_id=...&counselor_id=...
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<SessionListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    // Empty values count as "no filter", like absent parameters
    let mut filter = Vec::new();
    if let Some(user_id) = query.user_id.filter(|u| !u.is_empty()) {
        filter.push(("user_id".to_string(), user_id));
    }
    if let Some(counselor_id) = query.counselor_id.filter(|c| !c.is_empty()) {
        filter.push(("counselor_id".to_string(), counselor_id));
    }
    let items = state.store()?.find("session", &filter, LIST_LIMIT).await?;
    Ok(Json(items))
}
