//! Repository Integration Tests
//!
//! Tests for FeedbackRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{NewFeedback, NAME_PLACEHOLDER, TOPIC_PLACEHOLDER};
    use crate::repository::{open_db, FeedbackRepository, Repository};
    use std::path::Path;

    fn setup_test_db() -> FeedbackRepository {
        // Use in-memory database for tests
        let conn = open_db(Path::new(":memory:")).expect("Failed to init test DB");
        FeedbackRepository::new(conn)
    }

    fn draft(name: &str, topic: &str, message: &str) -> NewFeedback {
        NewFeedback::from_submission(name, topic, message).expect("valid draft")
    }

    #[tokio::test]
    async fn test_create_feedback() {
        let repo = setup_test_db();

        let created = repo.create(draft("Ana", "food", "Great adobo")).await.expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Ana");
        assert_eq!(created.topic, "food");
        assert_eq!(created.message, "Great adobo");
        assert_eq!(created.timestamp.len(), 19);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = setup_test_db();

        repo.create(draft("", "", "first")).await.unwrap();
        repo.create(draft("Ben", "service", "second")).await.unwrap();

        let rows = repo.list().await.expect("List failed");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].message, "first");
        assert_eq!(rows[0].name, NAME_PLACEHOLDER);
        assert_eq!(rows[0].topic, TOPIC_PLACEHOLDER);
        assert_eq!(rows[1].message, "second");
        assert!(rows[0].id < rows[1].id);
    }

    #[tokio::test]
    async fn test_count() {
        let repo = setup_test_db();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.create(draft("", "", "one")).await.unwrap();
        repo.create(draft("", "", "two")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_rowid_beyond_u32_keeps_full_id() {
        let conn = open_db(Path::new(":memory:")).expect("Failed to init test DB");
        conn.lock()
            .await
            .execute(
                "INSERT INTO feedback (id, timestamp, name, topic, message) VALUES (5000000000, '', '', '', 'seed')",
                [],
            )
            .unwrap();
        let repo = FeedbackRepository::new(conn);

        let created = repo.create(draft("", "", "next")).await.unwrap();
        assert_eq!(created.id, 5_000_000_001);

        let rows = repo.list().await.unwrap();
        assert_eq!(rows[1].id, created.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_empty_database() {
        let repo = setup_test_db();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
