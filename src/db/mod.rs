pub mod memory;
pub mod postgres;

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::config::DbConfig;
use crate::error::AppError;
use crate::models::TodoRecord;

/// Storage client handed to the handlers through [`crate::state::AppState`].
/// Update and delete report rows affected rather than failing on unknown
/// identifiers; zero is a successful no-op.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;
    async fn fetch_all(&self) -> Result<Vec<TodoRecord>, AppError>;
    async fn insert(&self, title: &str, completed: bool) -> Result<TodoRecord, AppError>;
    async fn update(&self, id: Uuid, title: &str, completed: bool) -> Result<u64, AppError>;
    async fn delete(&self, id: Uuid) -> Result<u64, AppError>;
}

pub async fn connect(config: &DbConfig) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.connect_options())
        .await
        .map_err(AppError::Connection)
}

/// Idempotent schema setup, run once at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id UUID PRIMARY KEY,
            title TEXT NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL,
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
