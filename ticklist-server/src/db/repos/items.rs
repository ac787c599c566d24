//! Home collection repository
//!
//! The home collection is the unnamed item set shown on the root page. It
//! has no list record; seeding must be safe against concurrent first loads,
//! so the empty-check and the insert happen in one guarded statement.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use ticklist_core::{ItemContent, DEFAULT_ITEMS};

/// Item record, used for both home items and embedded list items
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Home collection repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All home items in insertion order.
    pub async fn list(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, content, created_at
            FROM items
            ORDER BY position ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
    }

    /// Seed the default items into an empty home collection.
    ///
    /// The emptiness guard and the insert are a single statement, so two
    /// concurrent first loads cannot both observe an empty table across
    /// separate round trips. Returns the number of rows inserted (0 when
    /// the collection was already seeded).
    pub async fn seed_defaults(&self) -> Result<u64, sqlx::Error> {
        let defaults: Vec<String> = DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect();

        let result = sqlx::query(
            r#"
            INSERT INTO items (content)
            SELECT d.content
            FROM unnest($1::text[]) WITH ORDINALITY AS d(content, ord)
            WHERE NOT EXISTS (SELECT 1 FROM items)
            ORDER BY d.ord
            "#,
        )
        .bind(&defaults)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Append one item to the home collection.
    pub async fn insert(&self, content: &ItemContent) -> Result<Item, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO items (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content.as_str())
        .fetch_one(self.pool)
        .await
    }

    /// Remove an item by id. Unknown ids are a no-op, reported as `false`.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p ticklist-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_is_idempotent() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let first = repo.seed_defaults().await.unwrap();
        let second = repo.seed_defaults().await.unwrap();

        // Either this run seeded all three, or an earlier run already had;
        // a second call never inserts.
        assert!(first == DEFAULT_ITEMS.len() as u64 || first == 0);
        assert_eq!(second, 0);

        let items = repo.list().await.unwrap();
        assert!(!items.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete_round_trip() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        let before = repo.list().await.unwrap().len();
        let content = ItemContent::new("integration test item").unwrap();
        let item = repo.insert(&content).await.unwrap();
        assert_eq!(item.content, "integration test item");

        assert!(repo.delete(item.id).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_unknown_id_is_noop() {
        let pool = test_pool().await;
        let repo = ItemRepo::new(&pool);

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }
}
