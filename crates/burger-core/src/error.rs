//! # Error Types
//!
//! Domain-specific error types for burger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  burger-core errors (this file)                                        │
//! │  ├── CoreError        - Order composition rejections                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  burger-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures (incl. NotFound)   │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What the client sees (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ──┐                                 │
//! │                          DbError ────┴──► ApiError → Client            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` variant is an expected, client-triggerable rejection.
//! None of them represents an infrastructure failure.

use thiserror::Error;

use crate::types::{Category, Slot};

// =============================================================================
// Core Error
// =============================================================================

/// Order composition errors.
///
/// Each variant is distinguishable so the caller can map it to its own
/// client-facing response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No slot was requested (or, in lenient mode, none resolved).
    #[error("At least one item (sandwich, extra, or drink) must be provided")]
    EmptySelection,

    /// A requested identifier does not exist in the catalog (strict mode).
    #[error("No item with id {id} exists for the {slot} slot")]
    ItemNotFound { slot: Slot, id: i64 },

    /// A resolved item sits in a slot meant for another category.
    ///
    /// ## Example
    /// ```text
    /// { "extraId": 1 }   ← item 1 is "X Burger", a sandwich
    ///      │
    ///      ▼
    /// CategoryMismatch { slot: Extra, id: 1, expected: Extra, actual: Sandwich }
    /// ```
    #[error("Item {id} is a {actual} and cannot fill the {slot} slot")]
    CategoryMismatch {
        slot: Slot,
        id: i64,
        expected: Category,
        actual: Category,
    },

    /// Two filled slots carry items of the same category.
    #[error("You have repeated items of the same type: {first} and {second} are both a {category}")]
    DuplicateCategory {
        category: Category,
        first: Slot,
        second: Slot,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., two catalog items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CategoryMismatch {
            slot: Slot::Extra,
            id: 1,
            expected: Category::Extra,
            actual: Category::Sandwich,
        };
        assert_eq!(
            err.to_string(),
            "Item 1 is a sandwich and cannot fill the extra slot"
        );

        let err = CoreError::DuplicateCategory {
            category: Category::Sandwich,
            first: Slot::Sandwich,
            second: Slot::Extra,
        };
        assert_eq!(
            err.to_string(),
            "You have repeated items of the same type: sandwich and extra are both a sandwich"
        );

        let err = CoreError::ItemNotFound {
            slot: Slot::Drink,
            id: 42,
        };
        assert_eq!(err.to_string(), "No item with id 42 exists for the drink slot");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "orderId".to_string(),
        };
        assert_eq!(err.to_string(), "orderId is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
