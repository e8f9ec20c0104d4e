//! Menu endpoints, served from the in-memory catalog snapshot.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use burger_core::{Category, Item};
use serde::{Deserialize, Serialize};

use super::list_or_no_content;
use crate::error::ApiError;
use crate::state::AppState;

/// Menu item as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    /// Formatted price, e.g. `$5.00`
    pub price: String,
    pub category: Category,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        ItemView {
            id: item.id,
            name: item.name.clone(),
            price_cents: item.price_cents,
            price: item.price().to_string(),
            category: item.category,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemsQuery {
    pub category: Option<String>,
}

fn views(items: Vec<&Item>) -> Vec<ItemView> {
    items.into_iter().map(ItemView::from).collect()
}

/// `GET /items?category=`
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;

    let category = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| ApiError::validation(e.to_string()).with_detail("category"))?;

    Ok(list_or_no_content(views(state.catalog.list_by_category(category))))
}

/// `GET /items/sandwiches`
pub async fn list_sandwiches(State(state): State<AppState>) -> Response {
    list_or_no_content(views(state.catalog.list_by_category(Some(Category::Sandwich))))
}

/// `GET /items/extras`
///
/// Everything that goes alongside a sandwich: extras and drinks.
pub async fn list_extras(State(state): State<AppState>) -> Response {
    list_or_no_content(views(
        state
            .catalog
            .list_by_categories(&[Category::Extra, Category::Drink]),
    ))
}
