//! # Item Repository
//!
//! Read-only access to the seeded menu.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use burger_core::{Catalog, Item};

/// Repository for menu item queries.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Lists every item, by id ascending.
    pub async fn list(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price_cents, category
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Loads the whole menu into an in-memory [`Catalog`].
    ///
    /// Called once at startup; the snapshot is shared by every request.
    ///
    /// ## Errors
    /// `DbError::Internal` when a stored row breaks a catalog rule
    /// (blank name, negative price, repeated id).
    pub async fn load_catalog(&self) -> DbResult<Catalog> {
        let items = self.list().await?;
        let count = items.len();

        let catalog = Catalog::new(items)
            .map_err(|e| DbError::Internal(format!("invalid catalog row: {e}")))?;

        debug!(count, "Catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use burger_core::{seed_items, Catalog};

    async fn setup() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_seeded_items_match_core_seed() {
        let db = setup().await;

        let items = db.items().list().await.unwrap();
        assert_eq!(items, seed_items());
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let db = setup().await;

        let catalog = db.items().load_catalog().await.unwrap();
        assert_eq!(catalog, Catalog::seeded());
    }

    #[tokio::test]
    async fn test_empty_table_lists_nothing() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT, price_cents INTEGER, category TEXT)",
        )
        .execute(db.pool())
        .await
        .unwrap();

        assert!(db.items().list().await.unwrap().is_empty());
        assert!(db.items().load_catalog().await.unwrap().is_empty());
    }
}
