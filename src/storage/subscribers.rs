use anyhow::Result;

use super::schema::Database;
use super::types::{Subscriber, SubscriberRow};

impl Database {
    // ========================================================================
    // Subscriber Operations
    // ========================================================================

    /// Insert a subscriber, or refresh name and interests if the email is
    /// already registered. Returns the subscriber id.
    ///
    /// Validation happens before this call (see [`crate::subscribe`]); the
    /// storage layer only serializes the interests list.
    pub async fn upsert_subscriber(
        &self,
        email: &str,
        name: &str,
        interests: &[String],
    ) -> Result<i64> {
        let interests_json = serde_json::to_string(interests)?;
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO subscribers (email, name, interests, subscribed_at)
            VALUES (?, ?, ?, datetime('now'))
            ON CONFLICT(email) DO UPDATE SET name = excluded.name, interests = excluded.interests
            RETURNING id
        "#,
        )
        .bind(email)
        .bind(name)
        .bind(&interests_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }

    /// Look up a subscriber by email.
    pub async fn get_subscriber(&self, email: &str) -> Result<Option<Subscriber>> {
        let row: Option<SubscriberRow> = sqlx::query_as(
            "SELECT id, email, name, interests, subscribed_at FROM subscribers WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SubscriberRow::into_subscriber))
    }

    /// All subscribers, oldest first.
    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        let rows: Vec<SubscriberRow> = sqlx::query_as(
            "SELECT id, email, name, interests, subscribed_at FROM subscribers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubscriberRow::into_subscriber).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::Database;

    async fn test_db() -> Database {
        Database::open(":memory:").await.unwrap()
    }

    fn interests(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn insert_and_get_subscriber() {
        let db = test_db().await;
        let id = db
            .upsert_subscriber("ada@example.com", "Ada", &interests(&["technology"]))
            .await
            .unwrap();
        assert!(id > 0);

        let sub = db.get_subscriber("ada@example.com").await.unwrap().unwrap();
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.interests, vec!["technology"]);
        assert!(!sub.subscribed_at.is_empty());
    }

    #[tokio::test]
    async fn get_unknown_subscriber_is_none() {
        let db = test_db().await;
        assert!(db.get_subscriber("ghost@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_refreshes_interests() {
        let db = test_db().await;
        let first = db
            .upsert_subscriber("ada@example.com", "Ada", &interests(&["technology"]))
            .await
            .unwrap();
        let second = db
            .upsert_subscriber(
                "ada@example.com",
                "Ada L.",
                &interests(&["science", "music"]),
            )
            .await
            .unwrap();
        assert_eq!(first, second);

        let sub = db.get_subscriber("ada@example.com").await.unwrap().unwrap();
        assert_eq!(sub.name, "Ada L.");
        assert_eq!(sub.interests, vec!["science", "music"]);

        let all = db.list_subscribers().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn list_subscribers_oldest_first() {
        let db = test_db().await;
        db.upsert_subscriber("a@example.com", "A", &interests(&["gaming"]))
            .await
            .unwrap();
        db.upsert_subscriber("b@example.com", "B", &interests(&["music"]))
            .await
            .unwrap();

        let all = db.list_subscribers().await.unwrap();
        let emails: Vec<&str> = all.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
    }

    #[tokio::test]
    async fn corrupt_interests_json_degrades_to_empty() {
        let db = test_db().await;
        sqlx::query(
            "INSERT INTO subscribers (email, name, interests, subscribed_at) VALUES (?, ?, ?, datetime('now'))",
        )
        .bind("bad@example.com")
        .bind("Bad")
        .bind("not json {{")
        .execute(db.pool())
        .await
        .unwrap();

        let sub = db.get_subscriber("bad@example.com").await.unwrap().unwrap();
        assert!(sub.interests.is_empty());
    }
}
