//! # burger-core: Pure Business Logic for GoodBurger
//!
//! This crate holds the menu catalog and the order pricing engine as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GoodBurger Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    burger-api (axum)                            │   │
//! │  │    GET /items ──► POST /orders ──► PUT /orders/:id ──► DELETE   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ burger-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │  pricing  │  │   │
//! │  │   │   Item    │  │   Money   │  │  Catalog  │  │ Composer  │  │   │
//! │  │   │   Order   │  │ discounts │  │ ItemLookup│  │ Selection │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  burger-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Order, Category, Slot)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - The menu and the `ItemLookup` seam
//! - [`pricing`] - Selection validation and bundle discounts
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use burger_core::{Catalog, DiscountTier, OrderComposer, Selection};
//!
//! let catalog = Catalog::seeded();
//! let order = OrderComposer::default()
//!     .compose(&catalog, &Selection::new(Some(1), Some(4), Some(5)))
//!     .unwrap();
//!
//! // $5.00 + $2.00 + $2.50 = $9.50, 20% off
//! assert_eq!(order.total_cents, 760);
//! assert_eq!(order.discount_tier, DiscountTier::FullCombo);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{seed_items, Catalog, ItemLookup};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{OrderComposer, ResolutionMode, Selection};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest menu item name accepted by the catalog.
pub const MAX_ITEM_NAME_LEN: usize = 100;
