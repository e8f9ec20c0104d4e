//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in burger-api                             │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │         │                                                               │
//! │         ├── CoreError (composition rejected) ──► 400 + specific code   │
//! │         │                                                               │
//! │         ├── DbError::NotFound ─────────────────► 404 NOT_FOUND         │
//! │         │                                                               │
//! │         ├── DbError (anything else) ── log ────► 500 DATABASE_ERROR    │
//! │         │                                        (generic message)      │
//! │         │                                                               │
//! │         └── Bad JSON / path / query ───────────► 400 VALIDATION_ERROR  │
//! │                                                                         │
//! │  Body: { "code": "DUPLICATE_CATEGORY", "message": "...", "detail": … } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use burger_core::{CoreError, Slot};
use burger_db::DbError;
use serde::Serialize;

/// Error body returned by every failing endpoint.
///
/// ```json
/// {
///   "code": "CATEGORY_MISMATCH",
///   "message": "Item 1 is a sandwich and cannot fill the extra slot",
///   "detail": "extraId"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Which request field the error is about, when there is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No item requested (400)
    EmptySelection,

    /// Unknown item id (400)
    ItemNotFound,

    /// Item placed in the wrong slot (400)
    CategoryMismatch,

    /// Two items of one category (400)
    DuplicateCategory,

    /// Malformed or invalid input (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::EmptySelection
            | ErrorCode::ItemNotFound
            | ErrorCode::CategoryMismatch
            | ErrorCode::DuplicateCategory
            | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches the offending field.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Request field that carries the id for a slot.
fn slot_field(slot: Slot) -> &'static str {
    match slot {
        Slot::Sandwich => "sandwichId",
        Slot::Extra => "extraId",
        Slot::Drink => "drinkId",
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::EmptySelection => ApiError::new(ErrorCode::EmptySelection, message),
            CoreError::ItemNotFound { slot, .. } => {
                ApiError::new(ErrorCode::ItemNotFound, message).with_detail(slot_field(slot))
            }
            CoreError::CategoryMismatch { slot, .. } => {
                ApiError::new(ErrorCode::CategoryMismatch, message).with_detail(slot_field(slot))
            }
            CoreError::DuplicateCategory { first, second, .. } => {
                ApiError::new(ErrorCode::DuplicateCategory, message)
                    .with_detail(format!("{}, {}", slot_field(first), slot_field(second)))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
///
/// Storage failures are logged in full and answered with a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::ForeignKeyViolation { message } => {
                tracing::error!("Foreign key violation: {}", message);
                ApiError::validation("Invalid item reference")
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::new(ErrorCode::DatabaseError, "Database is busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burger_core::{Category, ValidationError};

    #[test]
    fn test_core_error_codes() {
        let err = ApiError::from(CoreError::EmptySelection);
        assert_eq!(err.code, ErrorCode::EmptySelection);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.detail.is_none());

        let err = ApiError::from(CoreError::CategoryMismatch {
            slot: Slot::Extra,
            id: 1,
            expected: Category::Extra,
            actual: Category::Sandwich,
        });
        assert_eq!(err.code, ErrorCode::CategoryMismatch);
        assert_eq!(err.detail.as_deref(), Some("extraId"));

        let err = ApiError::from(CoreError::DuplicateCategory {
            category: Category::Sandwich,
            first: Slot::Sandwich,
            second: Slot::Extra,
        });
        assert_eq!(err.code, ErrorCode::DuplicateCategory);
        assert_eq!(err.detail.as_deref(), Some("sandwichId, extraId"));
    }

    #[test]
    fn test_validation_error_code() {
        let err = ApiError::from(CoreError::from(ValidationError::Required {
            field: "orderId".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "orderId is required");
    }

    #[test]
    fn test_db_errors_hide_detail() {
        let err = ApiError::from(DbError::QueryFailed("no such table: orders".to_string()));
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("orders"));

        let err = ApiError::from(DbError::not_found("Order", 9));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Order not found: 9");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::from(CoreError::EmptySelection)).unwrap();
        assert_eq!(json["code"], "EMPTY_SELECTION");
        assert!(json.get("detail").is_none());
    }
}
