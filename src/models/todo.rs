use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Storage representation of a todo. Soft-deleted rows keep their data and
/// carry a `deleted_at` timestamp; they are excluded from every read path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TodoRecord {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TodoRecord {
    /// Builds a record ready for insertion. The identifier is assigned here
    /// and is immutable afterwards.
    pub fn new(title: String, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            completed,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Wire representation sent to clients: the identifier in text form plus the
/// user-visible fields, audit columns stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDto {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<&TodoRecord> for TodoDto {
    fn from(record: &TodoRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title.clone(),
            completed: record.completed,
        }
    }
}

/// Request body for create and update. Both fields default so a partial body
/// decodes and falls through to validation instead of failing the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}
