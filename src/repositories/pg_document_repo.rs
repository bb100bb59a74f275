use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::{types::Json, PgPool};
use tokio::sync::OnceCell;
use uuid::Uuid;

use super::document_repo::{DocumentStore, StorageError};

const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        id UUID PRIMARY KEY,
        collection TEXT NOT NULL,
        data JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)";

/// PostgreSQL-backed document store. All collections share one `documents`
/// table keyed by collection name; the table is created on first use.
pub struct PgDocumentStore {
    pool: PgPool,
    table_ready: OnceCell<()>,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            table_ready: OnceCell::new(),
        }
    }

    /// Runs at most once successfully per process; a failure is retried on the
    /// next write.
    async fn ensure_table(&self) -> Result<(), sqlx::Error> {
        self.table_ready
            .get_or_try_init(|| async {
                sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&self.pool).await?;
                sqlx::query(CREATE_COLLECTION_INDEX).execute(&self.pool).await?;
                tracing::info!("documents table ready");
                Ok::<(), sqlx::Error>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_document(
        &self,
        collection: &str,
        document: Map<String, Value>,
    ) -> Result<String, StorageError> {
        self.ensure_table().await?;

        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, data, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            "#,
        )
        .bind(id)
        .bind(collection)
        .bind(Json(Value::Object(document)))
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id.to_string())
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}
