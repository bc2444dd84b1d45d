use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Fixed result cap for every list endpoint.
pub(crate) const LIST_LIMIT: u32 = 100;

/// Response body for every create endpoint.
#[derive(Debug, serde::Serialize)]
pub(crate) struct Created {
    pub id: String,
}

mod analyze;
mod auth;
mod community;
mod diag;
mod messages;
mod reminders;
mod sessions;

pub fn create_router(state: AppState) -> Router {
    // Permissive by design: the mobile and web clients are served from
    // arbitrary origins during the pilot.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Diagnostics
        .route("/", get(diag::root))
        .route("/test", get(diag::test_store))
        // Auth routes
        .route("/auth/login", post(auth::login))
        // Community posts and comments
        .route("/posts", post(community::create_post).get(community::list_posts))
        .route(
            "/comments",
            post(community::create_comment).get(community::list_comments),
        )
        // Counselor sessions
        .route(
            "/sessions",
            post(sessions::book_session).get(sessions::list_sessions),
        )
        // Reminders
        .route(
            "/reminders",
            post(reminders::create_reminder).get(reminders::list_reminders),
        )
        // Direct and room messaging
        .route(
            "/messages",
            post(messages::send_message).get(messages::list_messages),
        )
        // Emotion analysis
        .route("/analyze", post(analyze::analyze_emotion))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
