//! Named-list repository
//!
//! Lists embed their own copies of items in `list_items`; rows there are
//! owned by exactly one list and are independent of the home collection.
//! Creation is an ON CONFLICT upsert so concurrent first visits to the same
//! name cannot double-create or double-seed.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use ticklist_core::{ItemContent, DEFAULT_ITEMS};

use super::Item;

/// List record
#[derive(Debug, Clone, FromRow)]
pub struct List {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// List with its embedded items in insertion order
#[derive(Debug, Clone)]
pub struct ListWithItems {
    pub list: List,
    pub items: Vec<Item>,
}

/// Named-list repository
pub struct ListRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a list and its embedded items by canonical name.
    pub async fn find_with_items(&self, name: &str) -> Result<Option<ListWithItems>, sqlx::Error> {
        let list: Option<List> = sqlx::query_as(
            r#"
            SELECT id, name, created_at
            FROM lists
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        let Some(list) = list else {
            return Ok(None);
        };

        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, content, created_at
            FROM list_items
            WHERE list_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(list.id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(ListWithItems { list, items }))
    }

    /// Create a list seeded with the default items.
    ///
    /// The insert is `ON CONFLICT DO NOTHING`; the defaults are embedded in
    /// the same transaction only when this call actually created the row,
    /// so a lost race neither errors nor seeds twice. Returns whether the
    /// list was created by this call.
    pub async fn create_with_defaults(&self, name: &str) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let created: Option<(Uuid,)> = sqlx::query_as(
            r#"
            INSERT INTO lists (name)
            VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some((list_id,)) = created {
            let defaults: Vec<String> = DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect();

            sqlx::query(
                r#"
                INSERT INTO list_items (list_id, content)
                SELECT $1, d.content
                FROM unnest($2::text[]) WITH ORDINALITY AS d(content, ord)
                ORDER BY d.ord
                "#,
            )
            .bind(list_id)
            .bind(&defaults)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(created.is_some())
    }

    /// Append an item to a list's embedded sequence.
    ///
    /// A single INSERT..SELECT resolves the list id by name; when the list
    /// does not exist nothing is inserted and `false` is returned.
    pub async fn append_item(
        &self,
        name: &str,
        content: &ItemContent,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO list_items (list_id, content)
            SELECT id, $2
            FROM lists
            WHERE name = $1
            "#,
        )
        .bind(name)
        .bind(content.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove an embedded item from a list. Unknown lists and ids are a
    /// no-op, reported as `false`.
    pub async fn remove_item(&self, name: &str, item_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM list_items
            USING lists
            WHERE list_items.list_id = lists.id
              AND lists.name = $1
              AND list_items.id = $2
            "#,
        )
        .bind(name)
        .bind(item_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
