//! # burger-api
//!
//! HTTP front end for the GoodBurger order service.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        burger-api                                       │
//! │                                                                         │
//! │  Client ──► TraceLayer ──► CorsLayer ──► Router                        │
//! │                                            │                            │
//! │                      ┌─────────────────────┼─────────────────────┐     │
//! │                      ▼                     ▼                     ▼     │
//! │                 /health               /items/*              /orders/*   │
//! │                      │                     │                     │      │
//! │                      ▼                     ▼                     ▼      │
//! │                 Database           Arc<Catalog>        OrderComposer    │
//! │                                                         + Database      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The binary (`main.rs`) only wires configuration, the database and the
//! listener; everything testable lives here.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Builds the application router with its middleware stack.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/items", get(routes::items::list_items))
        .route("/items/sandwiches", get(routes::items::list_sandwiches))
        .route("/items/extras", get(routes::items::list_extras))
        .route(
            "/orders",
            get(routes::orders::list_orders).post(routes::orders::create_order),
        )
        .route(
            "/orders/{id}",
            get(routes::orders::get_order)
                .put(routes::orders::update_order)
                .delete(routes::orders::delete_order),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
