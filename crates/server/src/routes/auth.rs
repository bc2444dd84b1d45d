use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    /// Accepted but not verified; see the limitation note on [`login`].
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub email: String,
}

/// Check user existence by email and hand back a placeholder token.
/// POST /auth/login
///
/// Known limitation, kept on purpose: no password hash verification and no
/// real token issuance. Changing either would change the public contract.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let filter = vec![("email".to_string(), req.email.clone())];
    let users = state.store()?.find("user", &filter, 1).await?;

    if users.is_empty() {
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    tracing::info!("Login for {}", req.email);

    Ok(Json(LoginResponse {
        token: "demo-token".to_string(),
        user: LoginUser { email: req.email },
    }))
}
