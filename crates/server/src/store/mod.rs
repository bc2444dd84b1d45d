//! Document store seam.
//!
//! Handlers talk to [`DocumentStore`] only, so the persistence backend stays
//! swappable and routes can be tested against an in-memory SQLite database.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

mod sqlite;

pub use sqlite::SqliteStore;

/// Equality-only filter; the HTTP surface never filters on more than two
/// fields per query.
pub type Filter = Vec<(String, String)>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store not connected")]
    NotConnected,

    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("invalid filter field `{0}`")]
    InvalidField(String),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Schema-flexible records grouped into named collections, queried by
/// equality filters. Identifiers are opaque strings minted at insert.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its store-generated id.
    async fn insert(&self, collection: &str, doc: Value) -> Result<String, StoreError>;

    /// Fetch up to `limit` documents matching every filter field exactly,
    /// in store-default (insertion) order. Each returned document carries
    /// its id under `_id` as a plain string.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: u32,
    ) -> Result<Vec<Value>, StoreError>;

    /// Names of collections that currently hold documents.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Cheap connectivity probe for the diagnostic endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
