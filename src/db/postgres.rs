use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::TodoRecord;

use super::TodoStore;

pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<TodoRecord>, AppError> {
        let records = sqlx::query_as::<_, TodoRecord>(
            "SELECT id, title, completed, created_at, updated_at, deleted_at \
             FROM todos WHERE deleted_at IS NULL ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn insert(&self, title: &str, completed: bool) -> Result<TodoRecord, AppError> {
        let record = TodoRecord::new(title.to_string(), completed);

        sqlx::query(
            "INSERT INTO todos (id, title, completed, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(record.completed)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    async fn update(&self, id: Uuid, title: &str, completed: bool) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE todos SET title = $1, completed = $2, updated_at = $3 \
             WHERE id = $4 AND deleted_at IS NULL",
        )
        .bind(title)
        .bind(completed)
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE todos SET deleted_at = $1, updated_at = $1 \
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
