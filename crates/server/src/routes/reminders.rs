use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use shared::schemas::Reminder;
use shared::{Validate, ValidationError};

use super::{Created, LIST_LIMIT};
use crate::{error::AppError, state::AppState};

/// POST /reminders
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(reminder): Json<Reminder>,
) -> Result<Json<Created>, AppError> {
    reminder.validate()?;
    let doc = serde_json::to_value(&reminder).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = state.store()?.insert("reminder", doc).await?;
    Ok(Json(Created { id }))
}

#[derive(Debug, Deserialize)]
pub struct ReminderListQuery {
    pub user_id: Option<String>,
}

/// List reminders for one user. Unlike the other list endpoints the filter
/// is mandatory: reminders are always scoped to their owner.
/// GET /reminders?user_id=...
pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<ReminderListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| ValidationError::new("user_id", "required query parameter"))?;

    let filter = vec![("user_id".to_string(), user_id)];
    let items = state.store()?.find("reminder", &filter, LIST_LIMIT).await?;
    Ok(Json(items))
}
