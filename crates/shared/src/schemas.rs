//! Entity schemas shared between the server and its clients.
//!
//! Each struct maps to one document-store collection; the collection name is
//! the lowercase of the type name (e.g. `Post` -> "post"). Enum membership is
//! enforced by serde at deserialization; numeric ranges and required strings
//! are checked by [`Validate`] before any store call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request body failed a schema constraint.
#[derive(Debug, Clone, Error, Serialize)]
#[error("invalid field `{field}`: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Field-level checks that serde cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

// ============================================================================
// Core user and auth
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Counselor,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Teen,
    YoungAdult,
    Adult,
    Senior,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Unique email; uniqueness is left to the store.
    pub email: String,
    /// Server-side only, never echoed to clients.
    pub password_hash: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub verified: bool,
}

fn default_language() -> String {
    "en".to_string()
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ValidationError::new("email", "must be an email address"));
        }
        require("password_hash", &self.password_hash)?;
        if let Some(age) = self.age {
            if age > 120 {
                return Err(ValidationError::new("age", "must be between 0 and 120"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counselor {
    /// Reference to a user id (opaque string).
    pub user_id: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub license_id: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

impl Validate for Counselor {
    fn validate(&self) -> Result<(), ValidationError> {
        require("user_id", &self.user_id)?;
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ValidationError::new("rating", "must be between 0 and 5"));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Social / community
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    All,
    Teen,
    YoungAdult,
    Adult,
    Senior,
}

impl Default for Audience {
    fn default() -> Self {
        Audience::All
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub audience: Audience,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Validate for Post {
    fn validate(&self) -> Result<(), ValidationError> {
        require("user_id", &self.user_id)?;
        require("content", &self.content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

impl Validate for Comment {
    fn validate(&self) -> Result<(), ValidationError> {
        require("post_id", &self.post_id)?;
        require("user_id", &self.user_id)?;
        require("content", &self.content)
    }
}

// ============================================================================
// Counselor sessions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    Chat,
    Audio,
    Video,
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::Chat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub counselor_id: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub mode: SessionMode,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Validate for Session {
    fn validate(&self) -> Result<(), ValidationError> {
        require("user_id", &self.user_id)?;
        require("counselor_id", &self.counselor_id)
    }
}

// ============================================================================
// Reminders
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Push,
    Email,
    Sms,
}

impl Default for ReminderChannel {
    fn default() -> Self {
        ReminderChannel::Push
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub user_id: String,
    pub title: String,
    /// ISO 8601 or cron-like string; not parsed by the server.
    pub schedule: String,
    #[serde(default)]
    pub channel: ReminderChannel,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl Validate for Reminder {
    fn validate(&self) -> Result<(), ValidationError> {
        require("user_id", &self.user_id)?;
        require("title", &self.title)?;
        require("schedule", &self.schedule)
    }
}

// ============================================================================
// Messaging (direct or room)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub from_user_id: String,
    #[serde(default)]
    pub to_user_id: Option<String>,
    /// Room channel id, e.g. "age:teen" or "language:en".
    #[serde(default)]
    pub room: Option<String>,
    pub text: String,
}

impl Validate for Message {
    // to_user_id and room may both be unset; the contract is deliberately
    // permissive about the destination.
    fn validate(&self) -> Result<(), ValidationError> {
        require("from_user_id", &self.from_user_id)?;
        require("text", &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_defaults_apply() {
        let post: Post =
            serde_json::from_str(r#"{"user_id":"u1","content":"hello"}"#).unwrap();
        assert_eq!(post.audience, Audience::All);
        assert!(post.tags.is_empty());
        assert!(post.validate().is_ok());
    }

    #[test]
    fn audience_uses_kebab_case() {
        let post: Post = serde_json::from_str(
            r#"{"user_id":"u1","content":"hi","audience":"young-adult"}"#,
        )
        .unwrap();
        assert_eq!(post.audience, Audience::YoungAdult);
        assert!(serde_json::from_str::<Post>(
            r#"{"user_id":"u1","content":"hi","audience":"toddler"}"#
        )
        .is_err());
    }

    #[test]
    fn counselor_rating_range() {
        let mut counselor = Counselor {
            user_id: "u1".to_string(),
            specialties: vec![],
            languages: default_languages(),
            years_experience: Some(3),
            license_id: None,
            bio: None,
            rating: Some(4.5),
        };
        assert!(counselor.validate().is_ok());
        counselor.rating = Some(5.1);
        let err = counselor.validate().unwrap_err();
        assert_eq!(err.field, "rating");
    }

    #[test]
    fn user_age_range() {
        let user: User = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","password_hash":"x","age":121}"#,
        )
        .unwrap();
        let err = user.validate().unwrap_err();
        assert_eq!(err.field, "age");
    }

    #[test]
    fn user_defaults() {
        let user: User =
            serde_json::from_str(r#"{"name":"A","email":"a@b.co","password_hash":"x"}"#)
                .unwrap();
        assert_eq!(user.language, "en");
        assert_eq!(user.role, Role::User);
        assert!(!user.verified);
    }

    #[test]
    fn message_allows_no_destination() {
        let msg: Message =
            serde_json::from_str(r#"{"from_user_id":"u1","text":"hey"}"#).unwrap();
        assert!(msg.to_user_id.is_none());
        assert!(msg.room.is_none());
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn empty_content_rejected() {
        let post = Post {
            user_id: "u1".to_string(),
            content: "   ".to_string(),
            audience: Audience::All,
            tags: vec![],
        };
        assert_eq!(post.validate().unwrap_err().field, "content");
    }
}
