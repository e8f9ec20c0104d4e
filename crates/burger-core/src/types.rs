//! # Domain Types
//!
//! Core domain types used throughout GoodBurger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │      Item       │   │        Order        │   │    Category     │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  id (i64)       │   │  id (assigned by db)│   │  Sandwich       │   │
//! │  │  name           │◄──│  sandwich slot      │   │  Extra          │   │
//! │  │  price_cents    │◄──│  extra slot         │   │  Drink          │   │
//! │  │  category       │◄──│  drink slot         │   └─────────────────┘   │
//! │  └─────────────────┘   │  subtotal/discount  │                         │
//! │                        │  total              │   ┌─────────────────┐   │
//! │                        └─────────────────────┘   │  DiscountTier   │   │
//! │                                                  │  FullCombo 20%  │   │
//! │  ┌─────────────────┐   ┌─────────────────┐       │  Sand+Drink 15% │   │
//! │  │  DiscountRate   │   │      Slot       │       │  Sand+Extra 10% │   │
//! │  │  bps (u32)      │   │  position in an │       │  None        0% │   │
//! │  │  1500 = 15%     │   │  order          │       └─────────────────┘   │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 2000 bps = 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Category
// =============================================================================

/// Closed classification of a menu item.
///
/// The category decides which slot of an order the item may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sandwich,
    Extra,
    Drink,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 3] = [Category::Sandwich, Category::Extra, Category::Drink];

    /// Lowercase wire name (`"sandwich"`, `"extra"`, `"drink"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Sandwich => "sandwich",
            Category::Extra => "extra",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the wire name, case-insensitively.
///
/// ## Example
/// ```rust
/// use burger_core::Category;
///
/// assert_eq!("Drink".parse::<Category>().unwrap(), Category::Drink);
/// assert!("dessert".parse::<Category>().is_err());
/// ```
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Slot
// =============================================================================

/// One of the three positions of an order.
///
/// Each slot holds at most one item and expects items of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Sandwich,
    Extra,
    Drink,
}

impl Slot {
    /// The category an item must have to sit in this slot.
    pub const fn expected_category(&self) -> Category {
        match self {
            Slot::Sandwich => Category::Sandwich,
            Slot::Extra => Category::Extra,
            Slot::Drink => Category::Drink,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expected_category().as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchasable menu item.
///
/// Items are read-only reference data: seeded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable identifier assigned by the catalog.
    pub id: i64,

    /// Display name shown on the menu.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Which slot this item may occupy.
    pub category: Category,
}

impl Item {
    /// Creates an item from its parts.
    pub fn new(id: i64, name: impl Into<String>, price: Money, category: Category) -> Self {
        Item {
            id,
            name: name.into(),
            price_cents: price.cents(),
            category,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// Which bundle discount an order qualified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Sandwich + extra + drink.
    FullCombo,
    /// Sandwich + drink, no extra.
    SandwichAndDrink,
    /// Sandwich + extra, no drink.
    SandwichAndExtra,
    /// Any other combination.
    None,
}

impl Default for DiscountTier {
    fn default() -> Self {
        DiscountTier::None
    }
}

// =============================================================================
// Order
// =============================================================================

/// A priced order.
///
/// Built by [`OrderComposer`](crate::pricing::OrderComposer) with `id: None`;
/// the persistence layer assigns the id on insert.
///
/// ## Invariants
/// - at least one slot is filled
/// - no two filled slots share a category
/// - `total_cents = subtotal_cents - discount_cents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Assigned by the persistence layer; `None` until stored.
    pub id: Option<i64>,

    pub sandwich: Option<Item>,
    pub extra: Option<Item>,
    pub drink: Option<Item>,

    /// Sum of the filled slots' prices.
    pub subtotal_cents: i64,

    /// Bundle discount taken off the subtotal.
    pub discount_cents: i64,

    /// Amount the customer pays.
    pub total_cents: i64,

    pub discount_tier: DiscountTier,
}

impl Order {
    /// Returns a copy of this order carrying the given identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Iterates over the filled slots, in slot order.
    pub fn items(&self) -> impl Iterator<Item = (Slot, &Item)> {
        [
            (Slot::Sandwich, self.sandwich.as_ref()),
            (Slot::Extra, self.extra.as_ref()),
            (Slot::Drink, self.drink.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, item)| item.map(|i| (slot, i)))
    }

    /// Returns the item in a given slot, if any.
    pub fn slot(&self, slot: Slot) -> Option<&Item> {
        match slot {
            Slot::Sandwich => self.sandwich.as_ref(),
            Slot::Extra => self.extra.as_ref(),
            Slot::Drink => self.drink.as_ref(),
        }
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fries() -> Item {
        Item::new(4, "Fries", Money::from_cents(200), Category::Extra)
    }

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(1500);
        assert_eq!(rate.bps(), 1500);
        assert!(DiscountRate::default().is_zero());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("sandwich".parse::<Category>().unwrap(), Category::Sandwich);
        assert_eq!(" EXTRA ".parse::<Category>().unwrap(), Category::Extra);

        let err = "dessert".parse::<Category>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"category must be one of: ["sandwich", "extra", "drink"]"#
        );
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Drink).unwrap();
        assert_eq!(json, "\"drink\"");
    }

    #[test]
    fn test_slot_expected_category() {
        assert_eq!(Slot::Sandwich.expected_category(), Category::Sandwich);
        assert_eq!(Slot::Extra.expected_category(), Category::Extra);
        assert_eq!(Slot::Drink.expected_category(), Category::Drink);
        assert_eq!(Slot::Extra.to_string(), "extra");
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let json = serde_json::to_value(fries()).unwrap();
        assert_eq!(json["priceCents"], 200);
        assert_eq!(json["category"], "extra");
    }

    #[test]
    fn test_order_items_and_slots() {
        let order = Order {
            id: None,
            sandwich: None,
            extra: Some(fries()),
            drink: None,
            subtotal_cents: 200,
            discount_cents: 0,
            total_cents: 200,
            discount_tier: DiscountTier::None,
        };

        let filled: Vec<Slot> = order.items().map(|(slot, _)| slot).collect();
        assert_eq!(filled, vec![Slot::Extra]);
        assert_eq!(order.slot(Slot::Extra).map(|i| i.id), Some(4));
        assert!(order.slot(Slot::Drink).is_none());

        let stored = order.with_id(9);
        assert_eq!(stored.id, Some(9));
        assert_eq!(stored.total(), Money::from_cents(200));
    }

    #[test]
    fn test_discount_tier_default() {
        assert_eq!(DiscountTier::default(), DiscountTier::None);
    }
}
