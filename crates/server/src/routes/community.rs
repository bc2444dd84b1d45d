//! Community posts and their comments.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use shared::schemas::{Comment, Post};
use shared::Validate;

use super::{Created, LIST_LIMIT};
use crate::{error::AppError, state::AppState};

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    Json(post): Json<Post>,
) -> Result<Json<Created>, AppError> {
    post.validate()?;
    let doc = serde_json::to_value(&post).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = state.store()?.insert("post", doc).await?;
    tracing::debug!("Created post {} by {}", id, post.user_id);
    Ok(Json(Created { id }))
}

#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub audience: Option<String>,
}

/// List posts, optionally narrowed to one audience bracket. An empty query
/// value counts as "no filter", like an absent one.
/// GET /posts?audience=teen
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let mut filter = Vec::new();
    if let Some(audience) = query.audience.filter(|a| !a.is_empty()) {
        filter.push(("audience".to_string(), audience));
    }
    let items = state.store()?.find("post", &filter, LIST_LIMIT).await?;
    Ok(Json(items))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    Json(comment): Json<Comment>,
) -> Result<Json<Created>, AppError> {
    comment.validate()?;
    let doc = serde_json::to_value(&comment).map_err(|e| AppError::Internal(e.to_string()))?;
    let id = state.store()?.insert("comment", doc).await?;
    Ok(Json(Created { id }))
}

#[derive(Debug, Deserialize)]
pub struct CommentListQuery {
    pub post_id: Option<String>,
}

/// GET /comments?post_id=...
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentListQuery>,
) -> Result<Json<Vec<Value>>, AppError> {
    let mut filter = Vec::new();
    if let Some(post_id) = query.post_id.filter(|p| !p.is_empty()) {
        filter.push(("post_id".to_string(), post_id));
    }
    let items = state.store()?.find("comment", &filter, LIST_LIMIT).await?;
    Ok(Json(items))
}
