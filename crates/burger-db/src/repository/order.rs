//! # Order Repository
//!
//! Database operations for priced orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. COMPOSE (burger-core, no I/O)                                      │
//! │     └── OrderComposer::compose() → Order { id: None }                  │
//! │                                                                         │
//! │  2. INSERT                                                             │
//! │     └── insert(&order) → Order { id: Some(n) }                         │
//! │                                                                         │
//! │  3. (OPTIONAL) RE-PRICE                                                │
//! │     └── compose() the new selection, then replace(n, &order)           │
//! │         every slot and total is overwritten, nothing is merged         │
//! │                                                                         │
//! │  4. (OPTIONAL) DELETE                                                  │
//! │     └── delete(n) → row gone, items untouched                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows store only item ids. Reads hydrate the slots from the `items` table,
//! which never changes after seeding.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use burger_core::{DiscountTier, Item, Order};

/// One `orders` row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    sandwich_id: Option<i64>,
    extra_id: Option<i64>,
    drink_id: Option<i64>,
    subtotal_cents: i64,
    discount_cents: i64,
    total_cents: i64,
    discount_tier: DiscountTier,
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Stores a composed order and returns it with its new id.
    ///
    /// Any id already on `order` is ignored.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - a slot holds an item missing from `items`
    pub async fn insert(&self, order: &Order) -> DbResult<Order> {
        let now = Utc::now();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (
                sandwich_id, extra_id, drink_id,
                subtotal_cents, discount_cents, total_cents, discount_tier,
                created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            RETURNING id
            "#,
        )
        .bind(order.sandwich.as_ref().map(|i| i.id))
        .bind(order.extra.as_ref().map(|i| i.id))
        .bind(order.drink.as_ref().map(|i| i.id))
        .bind(order.subtotal_cents)
        .bind(order.discount_cents)
        .bind(order.total_cents)
        .bind(order.discount_tier)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        debug!(order_id = id, total_cents = order.total_cents, "Order inserted");
        Ok(order.clone().with_id(id))
    }

    /// Gets an order by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Order))` - Order found, slots hydrated
    /// * `Ok(None)` - No such order
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                id, sandwich_id, extra_id, drink_id,
                subtotal_cents, discount_cents, total_cents, discount_tier
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let items = self.items_by_id().await?;
                Ok(Some(hydrate(row, &items)?))
            }
            None => Ok(None),
        }
    }

    /// Lists all orders, by id ascending.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                id, sandwich_id, extra_id, drink_id,
                subtotal_cents, discount_cents, total_cents, discount_tier
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed orders");

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let items = self.items_by_id().await?;
        rows.into_iter().map(|row| hydrate(row, &items)).collect()
    }

    /// Overwrites every slot and total of an existing order.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with that id
    pub async fn replace(&self, id: i64, order: &Order) -> DbResult<Order> {
        debug!(order_id = id, "Replacing order");

        let result = sqlx::query(
            r#"
            UPDATE orders SET
                sandwich_id = ?2,
                extra_id = ?3,
                drink_id = ?4,
                subtotal_cents = ?5,
                discount_cents = ?6,
                total_cents = ?7,
                discount_tier = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(order.sandwich.as_ref().map(|i| i.id))
        .bind(order.extra.as_ref().map(|i| i.id))
        .bind(order.drink.as_ref().map(|i| i.id))
        .bind(order.subtotal_cents)
        .bind(order.discount_cents)
        .bind(order.total_cents)
        .bind(order.discount_tier)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(order.clone().with_id(id))
    }

    /// Removes an order. Items are never touched.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no order with that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(order_id = id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", id));
        }

        Ok(())
    }

    /// Counts stored orders.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn items_by_id(&self) -> DbResult<HashMap<i64, Item>> {
        let items = sqlx::query_as::<_, Item>("SELECT id, name, price_cents, category FROM items")
            .fetch_all(&self.pool)
            .await?;

        Ok(items.into_iter().map(|item| (item.id, item)).collect())
    }
}

/// Rebuilds a domain [`Order`] from its row and the menu.
fn hydrate(row: OrderRow, items: &HashMap<i64, Item>) -> DbResult<Order> {
    let slot = |item_id: Option<i64>| -> DbResult<Option<Item>> {
        item_id
            .map(|item_id| {
                items.get(&item_id).cloned().ok_or_else(|| {
                    DbError::Internal(format!("order {} references missing item {item_id}", row.id))
                })
            })
            .transpose()
    };

    Ok(Order {
        id: Some(row.id),
        sandwich: slot(row.sandwich_id)?,
        extra: slot(row.extra_id)?,
        drink: slot(row.drink_id)?,
        subtotal_cents: row.subtotal_cents,
        discount_cents: row.discount_cents,
        total_cents: row.total_cents,
        discount_tier: row.discount_tier,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
