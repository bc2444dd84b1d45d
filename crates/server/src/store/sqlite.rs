use async_trait::async_trait;
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use uuid::Uuid;

use super::{DocumentStore, Filter, StoreError};

/// SQLite-backed document store. Every collection lives in one `documents`
/// table; bodies are stored as JSON text and filtered with `json_extract`.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let url = match url.strip_prefix("sqlite:") {
            Some(path) if path != ":memory:" && !path.contains('?') => {
                // Ensure the directory exists
                if let Some(parent) = Path::new(path).parent() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StoreError::Query(sqlx::Error::Io(e))
                    })?;
                }
                format!("sqlite:{}?mode=rwc", path)
            }
            _ => url.to_string(),
        };

        // An in-memory database is per-connection; keep the pool at one
        // connection so every query sees the same data.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.bootstrap().await?;
        Ok(store)
    }

    async fn bootstrap(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)",
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Document store ready");
        Ok(())
    }
}

/// Filter fields are spliced into a `json_extract` path, so only plain
/// snake_case identifiers are accepted; values always go through binds.
fn check_field(field: &str) -> Result<(), StoreError> {
    let ok = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidField(field.to_string()))
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn insert(&self, collection: &str, doc: Value) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(&doc)?;

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(collection)
            .bind(&body)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: u32,
    ) -> Result<Vec<Value>, StoreError> {
        let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?");
        for (field, _) in filter {
            check_field(field)?;
            sql.push_str(&format!(" AND json_extract(body, '$.{}') = ?", field));
        }
        sql.push_str(" ORDER BY rowid LIMIT ?");

        let mut query = sqlx::query_as::<_, (String, String)>(&sql).bind(collection);
        for (_, value) in filter {
            query = query.bind(value);
        }
        let rows = query.bind(limit as i64).fetch_all(&self.pool).await?;

        let mut docs = Vec::with_capacity(rows.len());
        for (id, body) in rows {
            let mut doc: Value = serde_json::from_str(&body)?;
            if let Some(obj) = doc.as_object_mut() {
                obj.insert("_id".to_string(), Value::String(id));
            }
            docs.push(doc);
        }
        Ok(docs)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let store = memory_store().await;
        let id = store
            .insert("post", json!({"user_id": "u1", "content": "hi", "audience": "teen"}))
            .await
            .unwrap();

        let filter = vec![("audience".to_string(), "teen".to_string())];
        let docs = store.find("post", &filter, 100).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["_id"], json!(id));
        assert_eq!(docs[0]["content"], json!("hi"));
    }

    #[tokio::test]
    async fn find_applies_every_filter_field() {
        let store = memory_store().await;
        store
            .insert("session", json!({"user_id": "u1", "counselor_id": "c1"}))
            .await
            .unwrap();
        store
            .insert("session", json!({"user_id": "u1", "counselor_id": "c2"}))
            .await
            .unwrap();

        let filter = vec![
            ("user_id".to_string(), "u1".to_string()),
            ("counselor_id".to_string(), "c2".to_string()),
        ];
        let docs = store.find("session", &filter, 100).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["counselor_id"], json!("c2"));
    }

    #[tokio::test]
    async fn find_caps_results_at_limit() {
        let store = memory_store().await;
        for i in 0..5 {
            store
                .insert("reminder", json!({"user_id": "u1", "title": format!("r{i}")}))
                .await
                .unwrap();
        }
        let docs = store.find("reminder", &vec![], 3).await.unwrap();
        assert_eq!(docs.len(), 3);
        // Insertion order
        assert_eq!(docs[0]["title"], json!("r0"));
    }

    #[tokio::test]
    async fn bad_filter_field_is_rejected() {
        let store = memory_store().await;
        let filter = vec![("x') OR 1=1 --".to_string(), "v".to_string())];
        let err = store.find("post", &filter, 100).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidField(_)));
    }

    #[tokio::test]
    async fn collection_names_lists_populated_collections() {
        let store = memory_store().await;
        assert!(store.collection_names().await.unwrap().is_empty());
        store.insert("post", json!({"a": 1})).await.unwrap();
        store.insert("message", json!({"b": 2})).await.unwrap();
        assert_eq!(
            store.collection_names().await.unwrap(),
            vec!["message".to_string(), "post".to_string()]
        );
    }
}
