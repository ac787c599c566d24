//! Database migrations for the item and list tables

use sqlx::PgPool;

use crate::Result;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running migrations...");

    // Home collection: items shown on the root page, ordered by insertion
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            content TEXT NOT NULL CHECK (content <> ''),
            position BIGSERIAL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Named lists, unique under canonical capitalization
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Embedded item copies: owned by exactly one list, never shared with
    // the home collection
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS list_items (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            list_id UUID NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
            content TEXT NOT NULL CHECK (content <> ''),
            position BIGSERIAL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_position ON items(position)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_lists_name ON lists(name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_list_items_list ON list_items(list_id)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_list_items_position ON list_items(list_id, position)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
