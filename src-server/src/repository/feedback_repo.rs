//! Feedback Repository
//!
//! Handles all feedback-related database operations.

use async_trait::async_trait;
use rusqlite::params;

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{now_timestamp, DomainError, DomainResult, Feedback, NewFeedback};

pub struct FeedbackRepository {
    conn: SharedConnection,
}

impl FeedbackRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

#[async_trait]
impl Repository<Feedback> for FeedbackRepository {
    type Draft = NewFeedback;

    async fn create(&self, draft: NewFeedback) -> DomainResult<Feedback> {
        let conn = self.conn.lock().await;
        let timestamp = now_timestamp();

        conn.execute(
            "INSERT INTO feedback (timestamp, name, topic, message) VALUES (?1, ?2, ?3, ?4)",
            params![timestamp, draft.name, draft.topic, draft.message],
        )
        .map_err(internal)?;

        let id = conn.last_insert_rowid();
        Ok(draft.into_feedback(id, timestamp))
    }

    async fn list(&self) -> DomainResult<Vec<Feedback>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare("SELECT id, timestamp, name, topic, message FROM feedback ORDER BY id")
            .map_err(internal)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Feedback {
                    id: row.get(0)?,
                    timestamp: row.get(1)?,
                    name: row.get(2)?,
                    topic: row.get(3)?,
                    message: row.get(4)?,
                })
            })
            .map_err(internal)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(internal)
    }

    async fn count(&self) -> DomainResult<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM feedback", [], |row| row.get(0))
            .map_err(internal)?;
        usize::try_from(count).map_err(|e| DomainError::Internal(e.to_string()))
    }
}
