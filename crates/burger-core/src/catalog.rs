//! # Item Catalog
//!
//! The read-only menu that orders are composed from.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Lifecycle                               │
//! │                                                                         │
//! │  Startup                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  items table (seeded by migration)  ──►  Catalog::new(rows)            │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                              Arc<Catalog> shared by every request       │
//! │                                              │                          │
//! │                     ┌────────────────────────┼───────────────────┐     │
//! │                     ▼                        ▼                   ▼     │
//! │            list_by_category()        find_by_id()        OrderComposer │
//! │                                                                         │
//! │  Never mutated after construction: safe to read from any thread.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Category, Item};
use crate::validation::{validate_item_id, validate_item_name, validate_price_cents};

// =============================================================================
// Lookup Seam
// =============================================================================

/// Resolves item identifiers for the pricing engine.
///
/// Absence is a normal answer, not an error. The engine decides what a
/// missing item means.
pub trait ItemLookup {
    /// Returns the item with that identifier, if any.
    fn find_item(&self, id: i64) -> Option<&Item>;
}

// =============================================================================
// Seed Data
// =============================================================================

/// The fixed menu the system starts with.
///
/// | id | name       | price | category |
/// |----|------------|-------|----------|
/// | 1  | X Burger   | 5.00  | Sandwich |
/// | 2  | X Egg      | 4.50  | Sandwich |
/// | 3  | X Bacon    | 7.00  | Sandwich |
/// | 4  | Fries      | 2.00  | Extra    |
/// | 5  | Soft drink | 2.50  | Drink    |
///
/// `migrations/sqlite/002_seed_items.sql` inserts the same rows.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "X Burger", Money::from_major_minor(5, 0), Category::Sandwich),
        Item::new(2, "X Egg", Money::from_major_minor(4, 50), Category::Sandwich),
        Item::new(3, "X Bacon", Money::from_major_minor(7, 0), Category::Sandwich),
        Item::new(4, "Fries", Money::from_major_minor(2, 0), Category::Extra),
        Item::new(5, "Soft drink", Money::from_major_minor(2, 50), Category::Drink),
    ]
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable, id-ordered set of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: BTreeMap<i64, Item>,
}

impl Catalog {
    /// Builds a catalog from items loaded elsewhere (usually the database).
    ///
    /// ## Errors
    /// Rejects non-positive ids, blank names, negative prices and repeated ids.
    pub fn new(items: impl IntoIterator<Item = Item>) -> CoreResult<Self> {
        let mut by_id = BTreeMap::new();

        for item in items {
            validate_item_id(item.id)?;
            validate_item_name(&item.name)?;
            validate_price_cents(item.price_cents)?;

            if by_id.contains_key(&item.id) {
                return Err(ValidationError::Duplicate {
                    field: "itemId".to_string(),
                    value: item.id.to_string(),
                }
                .into());
            }
            by_id.insert(item.id, item);
        }

        Ok(Catalog { items: by_id })
    }

    /// The catalog holding [`seed_items`].
    pub fn seeded() -> Self {
        Catalog {
            items: seed_items().into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    /// Returns the item with that identifier, or `None`.
    pub fn find_by_id(&self, id: i64) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Returns all items, optionally restricted to one category, by id ascending.
    ///
    /// ## Example
    /// ```rust
    /// use burger_core::{Catalog, Category};
    ///
    /// let catalog = Catalog::seeded();
    /// let sandwiches = catalog.list_by_category(Some(Category::Sandwich));
    /// let ids: Vec<i64> = sandwiches.iter().map(|i| i.id).collect();
    /// assert_eq!(ids, vec![1, 2, 3]);
    /// ```
    pub fn list_by_category(&self, category: Option<Category>) -> Vec<&Item> {
        self.items
            .values()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    /// Returns the items belonging to any of the given categories, by id ascending.
    pub fn list_by_categories(&self, categories: &[Category]) -> Vec<&Item> {
        self.items
            .values()
            .filter(|item| categories.contains(&item.category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemLookup for Catalog {
    fn find_item(&self, id: i64) -> Option<&Item> {
        self.find_by_id(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
