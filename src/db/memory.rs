use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::TodoRecord;

use super::TodoStore;

/// In-memory store with the same observable semantics as
/// [`super::PgTodoStore`], including soft deletion. Used by the tests; the
/// server binary always runs against PostgreSQL.
#[derive(Default)]
pub struct MemoryTodoStore {
    records: Mutex<Vec<TodoRecord>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<TodoRecord>, AppError> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|r| r.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn insert(&self, title: &str, completed: bool) -> Result<TodoRecord, AppError> {
        let record = TodoRecord::new(title.to_string(), completed);
        self.records.lock().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, title: &str, completed: bool) -> Result<u64, AppError> {
        let mut records = self.records.lock().await;
        match records
            .iter_mut()
            .find(|r| r.id == id && r.deleted_at.is_none())
        {
            Some(record) => {
                record.title = title.to_string();
                record.completed = completed;
                record.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let mut records = self.records.lock().await;
        match records
            .iter_mut()
            .find(|r| r.id == id && r.deleted_at.is_none())
        {
            Some(record) => {
                let now = Utc::now();
                record.deleted_at = Some(now);
                record.updated_at = now;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
