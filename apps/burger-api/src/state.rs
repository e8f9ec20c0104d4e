//! Shared handler state.

use std::sync::Arc;

use burger_core::{Catalog, OrderComposer};
use burger_db::Database;

/// State cloned into every handler.
///
/// ```text
/// AppState
/// ├── db        Database (pool handle, cheap clone)
/// ├── catalog   Arc<Catalog> (menu snapshot loaded at startup, read-only)
/// └── composer  OrderComposer (Copy, carries the resolution mode)
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: Arc<Catalog>,
    pub composer: OrderComposer,
}

impl AppState {
    pub fn new(db: Database, catalog: Catalog, composer: OrderComposer) -> Self {
        AppState {
            db,
            catalog: Arc::new(catalog),
            composer,
        }
    }
}
