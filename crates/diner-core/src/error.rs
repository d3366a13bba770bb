//! # Error Types
//!
//! Domain-specific error types for diner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  diner-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog construction and lookup failures       │
//! │  ├── ValidationError  - Field-level input failures                     │
//! │  └── PricingError     - Arithmetic failures while pricing an order     │
//! │                                                                         │
//! │  diner-cli errors (app crate)                                          │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr, exit 1         │
//! │        PricingError    → "ERROR" in the bill (never fatal)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! Construction and lookup errors stop the program: they mean the menu was
//! defined wrong or the prompt returned something it was never offered.
//! Pricing errors are kept per figure so the bill always prints in full.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and selection errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu option or category could not be built.
    ///
    /// ## When This Occurs
    /// - Option declared without a name
    /// - Option declared with a negative price
    ///
    /// Always a bug in the menu definition, never user input.
    #[error("Menu option could not be constructed: {0}")]
    Construction(#[from] ValidationError),

    /// A category has no options at all.
    #[error("Category '{category}' has no options")]
    EmptyCategory { category: String },

    /// The last option of a category is not a zero-priced stop entry.
    #[error("Category '{category}' must end with a zero-priced stop option, found '{found}'")]
    MissingSentinel { category: String, found: String },

    /// No option renders to the given display string.
    #[error("Option not found: {0}")]
    OptionNotFound(String),

    /// Selection index is outside the offered choices.
    #[error("No option at index {index} (category has {len} options)")]
    NoOptionAtIndex { index: usize, len: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Amount must not be below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: Money },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Failures while computing one figure of a bill.
///
/// Each figure of a [`Bill`](crate::pricing::Bill) carries its own
/// `Result`, so a failure here degrades that figure (and the figures derived
/// from it) instead of aborting the bill.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Summing item prices overflowed.
    #[error("Order total overflowed after {items} items")]
    TotalOverflow { items: usize },

    /// Adding the service charge to the total overflowed.
    #[error("Final amount overflowed: {total} + {charge}")]
    FinalOverflow { total: Money, charge: Money },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for pricing computations.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================
