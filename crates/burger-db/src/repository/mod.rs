//! # Repository Module
//!
//! Database repository implementations for GoodBurger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories                                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.orders().insert(&order)                                     │
//! │       ▼                                                                 │
//! │  ItemRepository                    OrderRepository                     │
//! │  ├── list()                        ├── insert(&order)                  │
//! │  └── load_catalog()                ├── get_by_id(id)                   │
//! │                                    ├── list()                          │
//! │                                    ├── replace(id, &order)             │
//! │                                    └── delete(id)                      │
//! │       │                                   │                            │
//! │       ▼                                   ▼                            │
//! │  items table  ◄─── FK (RESTRICT) ───  orders table                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Read-only menu access
//! - [`OrderRepository`](order::OrderRepository) - Order persistence

pub mod item;
pub mod order;
