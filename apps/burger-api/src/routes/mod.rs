//! HTTP routes.
//!
//! ```text
//! GET    /health              liveness + database check
//! GET    /items[?category=]   menu, optionally one category
//! GET    /items/sandwiches    sandwiches only
//! GET    /items/extras        extras and drinks
//! POST   /orders              compose + store
//! GET    /orders              every stored order
//! GET    /orders/{id}         one order
//! PUT    /orders/{id}         re-compose + replace
//! DELETE /orders/{id}         remove
//! ```
//!
//! List endpoints answer `204 No Content` instead of an empty array.

pub mod health;
pub mod items;
pub mod orders;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `200` with the list, or `204` when it is empty.
pub(crate) fn list_or_no_content<T: Serialize>(list: Vec<T>) -> Response {
    if list.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(list).into_response()
    }
}
