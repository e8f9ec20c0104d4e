//! # Validation Module
//!
//! Input validation utilities for GoodBurger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (burger-api)                                    │
//! │  ├── Type validation (JSON deserialization)                            │
//! │  └── THIS MODULE: identifiers, names, prices                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine (pricing.rs)                                  │
//! │  └── Combination rules: presence, category, uniqueness                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK constraints on price and category                           │
//! │  └── Foreign keys from order slots to items                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most `MAX_ITEM_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use burger_core::validation::validate_item_name;
///
/// assert!(validate_item_name("X Bacon").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use burger_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(250).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1).is_err());
/// ```
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a catalog item identifier.
pub fn validate_item_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "itemId".to_string(),
        });
    }

    Ok(())
}

/// Validates an order identifier taken from a request path.
///
/// ## Rules
/// - `0` means "not provided" and is rejected as required
/// - Negative ids never exist and are rejected as non-positive
///
/// ## Example
/// ```rust
/// use burger_core::validation::validate_order_id;
///
/// assert!(validate_order_id(7).is_ok());
/// assert_eq!(
///     validate_order_id(0).unwrap_err().to_string(),
///     "orderId is required"
/// );
/// ```
pub fn validate_order_id(id: i64) -> ValidationResult<()> {
    if id == 0 {
        return Err(ValidationError::Required {
            field: "orderId".to_string(),
        });
    }

    if id < 0 {
        return Err(ValidationError::MustBePositive {
            field: "orderId".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Soft drink").is_ok());
        assert!(matches!(
            validate_item_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(500).is_ok());
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(-50).is_err());
    }

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id(1).is_ok());
        assert!(validate_item_id(0).is_err());
        assert!(validate_item_id(-3).is_err());
    }

    #[test]
    fn test_validate_order_id() {
        assert!(validate_order_id(1).is_ok());
        assert!(matches!(
            validate_order_id(0),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_order_id(-1),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
