//! # diner-core: Pure Business Logic for Shell Diner
//!
//! Menu, order and pricing logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shell Diner Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    diner-cli (terminal)                         │   │
//! │  │    Banner ──► Food prompt ──► Beverage prompt ──► Bill          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ diner-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   order   │  │  pricing  │  │   money   │  │   │
//! │  │   │ Catalog   │  │  Order    │  │  Bill     │  │   Money   │  │   │
//! │  │   │ Category  │  │ Purchase  │  │  service  │  │           │  │   │
//! │  │   │ MenuOption│  │   Item    │  │  charge   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO FILES • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Menu options, categories and the built-in catalog
//! - [`order`] - Purchase snapshots and the order they accumulate in
//! - [`pricing`] - Order total, service charge, final amount
//! - [`money`] - Money type with integer arithmetic
//! - [`validation`] - Field checks for menu options
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use diner_core::{Bill, Catalog, Money, Order, PurchaseItem};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let food = catalog.food().unwrap();
//!
//! let mut order = Order::new();
//! order.append(PurchaseItem::from_option(food.option_at(0).unwrap()));
//!
//! // Rs. 115.00 is one full tier: 1% service charge
//! let bill = Bill::from_order(&order);
//! assert_eq!(bill.service_charge, Ok(Money::from_minor(115)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, PricingError, PricingResult, ValidationError};
pub use menu::{
    option_from_display_string, Catalog, Category, CategoryKind, MenuOption, OptionRecord,
    DEFAULT_CURRENCY_UNIT, SENTINEL_LABEL,
};
pub use money::Money;
pub use order::{Order, PurchaseItem};
pub use pricing::{final_amount, service_charge, total_amount, Bill, Figure};
