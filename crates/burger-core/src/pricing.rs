//! # Order Pricing & Composition
//!
//! Turns a candidate selection `{sandwichId?, extraId?, drinkId?}` into a
//! priced [`Order`], or rejects it.
//!
//! ## Composition Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     OrderComposer::compose                              │
//! │                                                                         │
//! │  Selection { sandwich_id, extra_id, drink_id }                          │
//! │       │                                                                 │
//! │       ├── all None? ──────────────────────────► EmptySelection          │
//! │       ▼                                                                 │
//! │  Resolve each id via ItemLookup                                         │
//! │       ├── Strict:  unknown id ────────────────► ItemNotFound            │
//! │       └── Lenient: unknown id → slot left empty                         │
//! │       ▼                                                                 │
//! │  Two slots share a category? ─────────────────► DuplicateCategory       │
//! │       ▼                                                                 │
//! │  (Strict) item in the wrong slot? ────────────► CategoryMismatch        │
//! │       ▼                                                                 │
//! │  subtotal = Σ filled slot prices                                        │
//! │       ▼                                                                 │
//! │  BUNDLE_RULES (first match wins)                                        │
//! │     sandwich + extra + drink  → 20%                                     │
//! │     sandwich + drink          → 15%                                     │
//! │     sandwich + extra          → 10%                                     │
//! │     anything else             →  0%                                     │
//! │       ▼                                                                 │
//! │  total = round_half_away(subtotal × (1 - rate))                         │
//! │       ▼                                                                 │
//! │  Order { id: None, slots, subtotal, discount, total, tier }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine holds no state besides its [`ResolutionMode`], performs no I/O
//! and never logs. Updates run the same `compose` against the new selection;
//! nothing is diffed against the previous order.
//!
//! ## Example
//! ```rust
//! use burger_core::{Catalog, OrderComposer, Selection};
//!
//! let catalog = Catalog::seeded();
//! let order = OrderComposer::strict()
//!     .compose(&catalog, &Selection::new(Some(1), None, Some(5)))
//!     .unwrap();
//!
//! // $5.00 + $2.50 = $7.50, 15% off = $6.375 → $6.38
//! assert_eq!(order.total_cents, 638);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ItemLookup;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountRate, DiscountTier, Item, Order, Slot};

// =============================================================================
// Selection
// =============================================================================

/// The item identifiers a client asked for, one optional id per slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    pub sandwich_id: Option<i64>,
    #[serde(default)]
    pub extra_id: Option<i64>,
    #[serde(default)]
    pub drink_id: Option<i64>,
}

impl Selection {
    pub const fn new(sandwich_id: Option<i64>, extra_id: Option<i64>, drink_id: Option<i64>) -> Self {
        Selection {
            sandwich_id,
            extra_id,
            drink_id,
        }
    }

    /// True when no slot was requested at all.
    pub const fn is_empty(&self) -> bool {
        self.sandwich_id.is_none() && self.extra_id.is_none() && self.drink_id.is_none()
    }

    /// The requested id for a slot.
    pub const fn requested(&self, slot: Slot) -> Option<i64> {
        match slot {
            Slot::Sandwich => self.sandwich_id,
            Slot::Extra => self.extra_id,
            Slot::Drink => self.drink_id,
        }
    }
}

// =============================================================================
// Resolution Mode
// =============================================================================

/// How the engine treats identifiers that do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Unknown ids fail with `ItemNotFound`; misplaced items fail with
    /// `CategoryMismatch`.
    #[default]
    Strict,

    /// Unknown ids leave their slot empty and slot categories are not
    /// checked. Duplicate categories are still rejected.
    Lenient,
}

// =============================================================================
// Bundle Discount Table
// =============================================================================

/// Which slots ended up holding an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FilledSlots {
    sandwich: bool,
    extra: bool,
    drink: bool,
}

/// One row of the bundle table.
struct BundleRule {
    tier: DiscountTier,
    rate: DiscountRate,
    applies: fn(FilledSlots) -> bool,
}

fn full_combo(f: FilledSlots) -> bool {
    f.sandwich && f.extra && f.drink
}

fn sandwich_and_drink(f: FilledSlots) -> bool {
    f.sandwich && f.drink && !f.extra
}

fn sandwich_and_extra(f: FilledSlots) -> bool {
    f.sandwich && f.extra && !f.drink
}

/// Evaluated top to bottom; the first row whose predicate holds wins.
/// No match means no discount.
const BUNDLE_RULES: [BundleRule; 3] = [
    BundleRule {
        tier: DiscountTier::FullCombo,
        rate: DiscountRate::from_bps(2000),
        applies: full_combo,
    },
    BundleRule {
        tier: DiscountTier::SandwichAndDrink,
        rate: DiscountRate::from_bps(1500),
        applies: sandwich_and_drink,
    },
    BundleRule {
        tier: DiscountTier::SandwichAndExtra,
        rate: DiscountRate::from_bps(1000),
        applies: sandwich_and_extra,
    },
];

fn bundle_discount(filled: FilledSlots) -> (DiscountTier, DiscountRate) {
    BUNDLE_RULES
        .iter()
        .find(|rule| (rule.applies)(filled))
        .map_or((DiscountTier::None, DiscountRate::zero()), |rule| {
            (rule.tier, rule.rate)
        })
}

/// The rate a tier grants.
pub fn tier_rate(tier: DiscountTier) -> DiscountRate {
    BUNDLE_RULES
        .iter()
        .find(|rule| rule.tier == tier)
        .map_or(DiscountRate::zero(), |rule| rule.rate)
}

// =============================================================================
// Composer
// =============================================================================

/// Validates selections and prices orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderComposer {
    mode: ResolutionMode,
}

impl OrderComposer {
    pub const fn new(mode: ResolutionMode) -> Self {
        OrderComposer { mode }
    }

    /// Unknown ids and misplaced items are rejected.
    pub const fn strict() -> Self {
        OrderComposer::new(ResolutionMode::Strict)
    }

    /// Unknown ids are treated as "not selected".
    pub const fn lenient() -> Self {
        OrderComposer::new(ResolutionMode::Lenient)
    }

    /// Validates `selection` against `lookup` and prices the result.
    ///
    /// ## Errors
    /// - [`CoreError::EmptySelection`] when nothing is (or, leniently, resolves as) selected
    /// - [`CoreError::ItemNotFound`] for an unknown id in strict mode
    /// - [`CoreError::DuplicateCategory`] when two slots hold the same category
    /// - [`CoreError::CategoryMismatch`] for an item in the wrong slot in strict mode
    pub fn compose<L>(&self, lookup: &L, selection: &Selection) -> CoreResult<Order>
    where
        L: ItemLookup + ?Sized,
    {
        if selection.is_empty() {
            return Err(CoreError::EmptySelection);
        }

        let sandwich = self.resolve(lookup, Slot::Sandwich, selection)?;
        let extra = self.resolve(lookup, Slot::Extra, selection)?;
        let drink = self.resolve(lookup, Slot::Drink, selection)?;

        let slots = [
            (Slot::Sandwich, sandwich),
            (Slot::Extra, extra),
            (Slot::Drink, drink),
        ];

        if slots.iter().all(|(_, item)| item.is_none()) {
            return Err(CoreError::EmptySelection);
        }

        check_unique_categories(&slots)?;

        if self.mode == ResolutionMode::Strict {
            check_slot_categories(&slots)?;
        }

        let subtotal: Money = slots
            .iter()
            .filter_map(|(_, item)| item.map(Item::price))
            .sum();

        let filled = FilledSlots {
            sandwich: sandwich.is_some(),
            extra: extra.is_some(),
            drink: drink.is_some(),
        };
        let (tier, rate) = bundle_discount(filled);

        let total = subtotal.apply_discount(rate);
        let discount = subtotal - total;

        Ok(Order {
            id: None,
            sandwich: sandwich.cloned(),
            extra: extra.cloned(),
            drink: drink.cloned(),
            subtotal_cents: subtotal.cents(),
            discount_cents: discount.cents(),
            total_cents: total.cents(),
            discount_tier: tier,
        })
    }

    fn resolve<'a, L>(
        &self,
        lookup: &'a L,
        slot: Slot,
        selection: &Selection,
    ) -> CoreResult<Option<&'a Item>>
    where
        L: ItemLookup + ?Sized,
    {
        let Some(id) = selection.requested(slot) else {
            return Ok(None);
        };

        match (lookup.find_item(id), self.mode) {
            (Some(item), _) => Ok(Some(item)),
            (None, ResolutionMode::Lenient) => Ok(None),
            (None, ResolutionMode::Strict) => Err(CoreError::ItemNotFound { slot, id }),
        }
    }
}

/// No two filled slots may hold items of the same category.
fn check_unique_categories(slots: &[(Slot, Option<&Item>)]) -> CoreResult<()> {
    let filled: Vec<(Slot, &Item)> = slots
        .iter()
        .filter_map(|(slot, item)| item.map(|i| (*slot, i)))
        .collect();

    for (i, (first, a)) in filled.iter().enumerate() {
        if let Some((second, _)) = filled[i + 1..]
            .iter()
            .find(|(_, b)| b.category == a.category)
        {
            return Err(CoreError::DuplicateCategory {
                category: a.category,
                first: *first,
                second: *second,
            });
        }
    }

    Ok(())
}

/// Every filled slot must hold an item of the slot's own category.
fn check_slot_categories(slots: &[(Slot, Option<&Item>)]) -> CoreResult<()> {
    for (slot, item) in slots {
        if let Some(item) = item {
            let expected = slot.expected_category();
            if item.category != expected {
                return Err(CoreError::CategoryMismatch {
                    slot: *slot,
                    id: item.id,
                    expected,
                    actual: item.category,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_items, Catalog};
    use crate::types::Category;
    use proptest::prelude::*;

    fn compose(sandwich: Option<i64>, extra: Option<i64>, drink: Option<i64>) -> CoreResult<Order> {
        OrderComposer::strict().compose(&Catalog::seeded(), &Selection::new(sandwich, extra, drink))
    }

    /// Seed menu plus a second extra and a second drink, for duplicate checks.
    fn wide_catalog() -> Catalog {
        let mut items = seed_items();
        items.push(Item::new(6, "Onion rings", Money::from_cents(300), Category::Extra));
        items.push(Item::new(7, "Juice", Money::from_cents(350), Category::Drink));
        Catalog::new(items).unwrap()
    }

    // -------------------------------------------------------------------------
    // Documented scenarios (seed catalog)
    // -------------------------------------------------------------------------

    #[test]
    fn test_full_combo_twenty_percent() {
        let order = compose(Some(1), Some(4), Some(5)).unwrap();
        assert_eq!(order.subtotal_cents, 950);
        assert_eq!(order.total_cents, 760);
        assert_eq!(order.discount_cents, 190);
        assert_eq!(order.discount_tier, DiscountTier::FullCombo);
        assert_eq!(order.id, None);
    }

    #[test]
    fn test_sandwich_and_drink_rounds_up() {
        let order = compose(Some(1), None, Some(5)).unwrap();
        assert_eq!(order.subtotal_cents, 750);
        assert_eq!(order.total_cents, 638);
        assert_eq!(order.discount_cents, 112);
        assert_eq!(order.discount_tier, DiscountTier::SandwichAndDrink);
    }

    #[test]
    fn test_sandwich_and_extra_ten_percent() {
        let order = compose(Some(1), Some(4), None).unwrap();
        assert_eq!(order.total_cents, 630);
        assert_eq!(order.discount_tier, DiscountTier::SandwichAndExtra);
    }

    #[test]
    fn test_extra_and_drink_no_discount() {
        let order = compose(None, Some(4), Some(5)).unwrap();
        assert_eq!(order.total_cents, 450);
        assert_eq!(order.discount_cents, 0);
        assert_eq!(order.discount_tier, DiscountTier::None);
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(compose(None, None, None), Err(CoreError::EmptySelection));
        assert_eq!(
            OrderComposer::lenient().compose(&Catalog::seeded(), &Selection::default()),
            Err(CoreError::EmptySelection)
        );
    }

    #[test]
    fn test_empty_selection_regardless_of_catalog() {
        let empty = Catalog::new(Vec::new()).unwrap();
        assert_eq!(
            OrderComposer::strict().compose(&empty, &Selection::default()),
            Err(CoreError::EmptySelection)
        );
    }

    #[test]
    fn test_order_keeps_resolved_items() {
        let order = compose(Some(3), Some(4), None).unwrap();
        assert_eq!(order.sandwich.as_ref().map(|i| i.name.as_str()), Some("X Bacon"));
        assert_eq!(order.extra.as_ref().map(|i| i.id), Some(4));
        assert!(order.drink.is_none());
    }

    // -------------------------------------------------------------------------
    // Resolution modes
    // -------------------------------------------------------------------------

    #[test]
    fn test_strict_unknown_id_is_item_not_found() {
        assert_eq!(
            compose(Some(1), None, Some(99)),
            Err(CoreError::ItemNotFound {
                slot: Slot::Drink,
                id: 99
            })
        );
    }

    #[test]
    fn test_lenient_unknown_id_leaves_slot_empty() {
        let order = OrderComposer::lenient()
            .compose(&Catalog::seeded(), &Selection::new(Some(1), None, Some(99)))
            .unwrap();

        assert!(order.drink.is_none());
        assert_eq!(order.total_cents, 500);
        assert_eq!(order.discount_tier, DiscountTier::None);
    }

    #[test]
    fn test_lenient_nothing_resolves_is_empty_selection() {
        assert_eq!(
            OrderComposer::lenient()
                .compose(&Catalog::seeded(), &Selection::new(Some(42), Some(43), None)),
            Err(CoreError::EmptySelection)
        );
    }

    #[test]
    fn test_strict_misplaced_item_is_category_mismatch() {
        assert_eq!(
            compose(None, Some(1), None),
            Err(CoreError::CategoryMismatch {
                slot: Slot::Extra,
                id: 1,
                expected: Category::Extra,
                actual: Category::Sandwich,
            })
        );
    }

    #[test]
    fn test_lenient_misplaced_item_is_priced_by_slot() {
        // A drink in the sandwich slot still counts as a filled sandwich slot
        let order = OrderComposer::lenient()
            .compose(&Catalog::seeded(), &Selection::new(Some(5), Some(4), None))
            .unwrap();

        assert_eq!(order.subtotal_cents, 450);
        assert_eq!(order.discount_tier, DiscountTier::SandwichAndExtra);
        assert_eq!(order.total_cents, 405);
    }

    #[test]
    fn test_duplicate_category_via_different_slots() {
        // Both resolve to sandwiches even though requested as sandwich + extra
        let expected = Err(CoreError::DuplicateCategory {
            category: Category::Sandwich,
            first: Slot::Sandwich,
            second: Slot::Extra,
        });

        assert_eq!(compose(Some(1), Some(2), None), expected);
        assert_eq!(
            OrderComposer::lenient()
                .compose(&Catalog::seeded(), &Selection::new(Some(1), Some(2), None)),
            expected
        );
    }

    #[test]
    fn test_duplicate_category_extra_and_drink_slots() {
        let catalog = wide_catalog();
        let result = OrderComposer::strict()
            .compose(&catalog, &Selection::new(None, Some(4), Some(6)));

        assert_eq!(
            result,
            Err(CoreError::DuplicateCategory {
                category: Category::Extra,
                first: Slot::Extra,
                second: Slot::Drink,
            })
        );
    }

    #[test]
    fn test_tier_rates() {
        assert_eq!(tier_rate(DiscountTier::FullCombo).bps(), 2000);
        assert_eq!(tier_rate(DiscountTier::SandwichAndDrink).bps(), 1500);
        assert_eq!(tier_rate(DiscountTier::SandwichAndExtra).bps(), 1000);
        assert!(tier_rate(DiscountTier::None).is_zero());
    }

    #[test]
    fn test_selection_deserializes_missing_fields_as_none() {
        let selection: Selection = serde_json::from_str(r#"{"sandwichId": 2}"#).unwrap();
        assert_eq!(selection, Selection::new(Some(2), None, None));
        assert!(!selection.is_empty());
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    /// Catalog with one arbitrary-priced item per category: ids 1, 2, 3.
    fn priced_catalog(s: i64, e: i64, d: i64) -> Catalog {
        Catalog::new(vec![
            Item::new(1, "Sandwich", Money::from_cents(s), Category::Sandwich),
            Item::new(2, "Extra", Money::from_cents(e), Category::Extra),
            Item::new(3, "Drink", Money::from_cents(d), Category::Drink),
        ])
        .unwrap()
    }

    /// Reference rounding: half away from zero on non-negative values.
    fn expected_total(sum: i64, keep_percent: i64) -> i64 {
        (sum * keep_percent * 100 + 5_000) / 10_000
    }

    proptest! {
        #[test]
        fn prop_bundle_totals(s in 0i64..100_000, e in 0i64..100_000, d in 0i64..100_000) {
            let catalog = priced_catalog(s, e, d);
            let composer = OrderComposer::strict();
            let run = |sel: Selection| composer.compose(&catalog, &sel).unwrap();

            let singles = [
                (Selection::new(Some(1), None, None), s),
                (Selection::new(None, Some(2), None), e),
                (Selection::new(None, None, Some(3)), d),
            ];
            for (selection, price) in singles {
                let single = run(selection);
                prop_assert_eq!(single.discount_tier, DiscountTier::None);
                prop_assert_eq!(single.discount_cents, 0);
                prop_assert_eq!(single.total_cents, price);
            }

            let se = run(Selection::new(Some(1), Some(2), None));
            prop_assert_eq!(se.total_cents, expected_total(s + e, 90));

            let sd = run(Selection::new(Some(1), None, Some(3)));
            prop_assert_eq!(sd.total_cents, expected_total(s + d, 85));

            let all = run(Selection::new(Some(1), Some(2), Some(3)));
            prop_assert_eq!(all.total_cents, expected_total(s + e + d, 80));

            let ed = run(Selection::new(None, Some(2), Some(3)));
            prop_assert_eq!(ed.discount_cents, 0);
            prop_assert_eq!(ed.total_cents, e + d);
        }

        #[test]
        fn prop_compose_is_deterministic(
            sandwich in proptest::option::of(0i64..8),
            extra in proptest::option::of(0i64..8),
            drink in proptest::option::of(0i64..8),
            lenient in any::<bool>(),
        ) {
            let catalog = wide_catalog();
            let composer = if lenient { OrderComposer::lenient() } else { OrderComposer::strict() };
            let selection = Selection::new(sandwich, extra, drink);

            prop_assert_eq!(
                composer.compose(&catalog, &selection),
                composer.compose(&catalog, &selection)
            );
        }

        #[test]
        fn prop_successful_orders_hold_invariants(
            sandwich in proptest::option::of(0i64..8),
            extra in proptest::option::of(0i64..8),
            drink in proptest::option::of(0i64..8),
        ) {
            let catalog = wide_catalog();
            let selection = Selection::new(sandwich, extra, drink);

            if let Ok(order) = OrderComposer::lenient().compose(&catalog, &selection) {
                prop_assert!(order.items().count() >= 1);
                prop_assert_eq!(order.subtotal_cents - order.discount_cents, order.total_cents);

                let mut categories: Vec<Category> = order.items().map(|(_, i)| i.category).collect();
                categories.sort();
                categories.dedup();
                prop_assert_eq!(categories.len(), order.items().count());
            }
        }
    }
}
