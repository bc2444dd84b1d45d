//! Direct and room messaging.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use shared::schemas::Message;
use shared::Validate;

use super::{Created, LIST_LIMIT};
use crate::{error::AppError, state::AppState};

/// POST /messages
pub async fn send_message(
    State(state): State<AppState>,
    Json(message): Json<Message>,
) -> Result<Json<Created>, AppError> {
    message.validate()?;
    let doc = serde_json::to_value(&message).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = state.store()?.insert("message", doc).await?;
    Ok(Json(Created { id }))
}

#[derive(Debug, Deserialize)]
pub struct MessageListQuery {
    pub to_user_id: Option<String>,
    pub room: Option<String>,
}

/// GET /messages?to_user_id=...&room=...
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    // Empty values count as "no filter", like absent parameters
    let mut filter = Vec::new();
    if let Some(to_user_id) = query.to_user_id.filter(|u| !u.is_empty()) {
        filter.push(("to_user_id".to_string(), to_user_id));
    }
    if let Some(room) = query.room.filter(|r| !r.is_empty()) {
        filter.push(("room".to_string(), room));
    }
    let items = state.store()?.find("message", &filter, LIST_LIMIT).await?;
    Ok(Json(items))
}
