//! Order endpoints.
//!
//! ```text
//! POST /orders        body: Selection
//!   │
//!   ├── composer.compose(&catalog, &selection)   ← every rule lives here
//!   │       └── Err(CoreError) ──► 400
//!   ▼
//! db.orders().insert(&order) ──► 201 OrderView
//!
//! PUT /orders/{id}    body: Selection
//!   │
//!   ├── id == 0 ──► 400
//!   ├── compose (same rules as POST)
//!   ▼
//! db.orders().replace(id, &order) ──► 204, or 404 if missing
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use burger_core::validation::validate_order_id;
use burger_core::{CoreError, DiscountTier, Order, Selection};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::items::ItemView;
use super::list_or_no_content;
use crate::error::ApiError;
use crate::state::AppState;

/// Priced order as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: i64,
    pub sandwich: Option<ItemView>,
    pub extra: Option<ItemView>,
    pub drink: Option<ItemView>,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub discount_tier: DiscountTier,
    /// Formatted total, e.g. `$6.38`
    pub total: String,
}

impl OrderView {
    /// Orders only reach clients after they are stored.
    fn from_stored(order: &Order) -> Result<Self, ApiError> {
        let order_id = order
            .id
            .ok_or_else(|| ApiError::internal("order has no id"))?;

        Ok(OrderView {
            order_id,
            sandwich: order.sandwich.as_ref().map(ItemView::from),
            extra: order.extra.as_ref().map(ItemView::from),
            drink: order.drink.as_ref().map(ItemView::from),
            subtotal_cents: order.subtotal_cents,
            discount_cents: order.discount_cents,
            total_cents: order.total_cents,
            discount_tier: order.discount_tier,
            total: order.total().to_string(),
        })
    }
}

fn order_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path?;
    validate_order_id(id).map_err(CoreError::from)?;
    Ok(id)
}

/// `POST /orders`
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<Selection>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(selection) = body?;

    let order = state.composer.compose(state.catalog.as_ref(), &selection)?;
    let stored = state.db.orders().insert(&order).await?;
    let view = OrderView::from_stored(&stored)?;

    info!(
        order_id = view.order_id,
        total_cents = view.total_cents,
        tier = ?view.discount_tier,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/orders/{}", view.order_id))],
        Json(view),
    )
        .into_response())
}

/// `GET /orders`
pub async fn list_orders(State(state): State<AppState>) -> Result<Response, ApiError> {
    let orders = state.db.orders().list().await?;
    let views = orders
        .iter()
        .map(OrderView::from_stored)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(list_or_no_content(views))
}

/// `GET /orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<OrderView>, ApiError> {
    let id = order_id(path)?;

    let order = state
        .db
        .orders()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Order", id))?;

    Ok(Json(OrderView::from_stored(&order)?))
}

/// `PUT /orders/{id}`
///
/// The new selection is composed from scratch before the order is looked up,
/// so an invalid selection is a 400 even for a missing id.
pub async fn update_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Selection>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = order_id(path)?;
    let Json(selection) = body?;

    let order = state.composer.compose(state.catalog.as_ref(), &selection)?;
    let replaced = state.db.orders().replace(id, &order).await?;

    info!(order_id = id, total_cents = replaced.total_cents, "Order updated");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /orders/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = order_id(path)?;

    state.db.orders().delete(id).await?;

    info!(order_id = id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}
