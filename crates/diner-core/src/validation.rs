//! # Validation Module
//!
//! Field checks applied when menu options are built.
//!
//! Menu data is compiled into the program, so a failure here is a bug in the
//! menu definition. The checks run once at startup and turn into
//! [`CoreError::Construction`](crate::error::CoreError::Construction).
//!
//! ## Usage
//! ```rust
//! use diner_core::money::Money;
//! use diner_core::validation::{validate_option_name, validate_price};
//!
//! assert!(validate_option_name("Veg Burger").is_ok());
//! assert!(validate_option_name("   ").is_err());
//! assert!(validate_price(Money::from_minor(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest option name accepted.
pub const MAX_OPTION_NAME_LEN: usize = 200;

/// Validates a menu option name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most 200 characters
pub fn validate_option_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_OPTION_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_OPTION_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a menu price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (stop entries, free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: price,
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
    fn test_validate_option_name() {
        assert!(validate_option_name("Chocolate Smoothie w/ Icecream").is_ok());
        assert!(validate_option_name("No, that's all").is_ok());

        assert_eq!(
            validate_option_name(""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_option_name("  \t ").is_err());
        assert!(validate_option_name(&"A".repeat(201)).is_err());
        assert!(validate_option_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_minor(11500)).is_ok());
        assert!(validate_price(Money::from_minor(-100)).is_err());
    }
}
