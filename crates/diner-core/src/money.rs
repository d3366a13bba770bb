//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and bill figures.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats, a Rs. 230.00 order gets a service charge of              │
//! │    2 × (230.0 × 0.01) = 4.6000000000000005  ❌ WRONG!                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise)                             │
//! │    2 × 23000 / 100 = 460 paise = Rs. 4.60                              │
//! │    Every division rounds explicitly, to a whole paisa                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use diner_core::money::Money;
//!
//! let burger = Money::from_major_minor(115, 0); // Rs. 115.00
//! let sprite = Money::from_minor(11500);
//!
//! assert_eq!(burger.checked_add(sprite), Some(Money::from_major_minor(230, 0)));
//! assert_eq!(burger.to_string(), "115.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Validation rejects negative prices, but the type can
///   still represent them so errors can report the offending value
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: The unit label ("Rs.") belongs to the menu option
///
/// ## Where Money is Used
/// ```text
/// MenuOption.price ──► PurchaseItem.price ──► total_amount()
///                                                  │
///                                                  ├──► service_charge()
///                                                  │
///                                                  └──► final_amount()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Number of minor units in one major unit.
    pub const MINOR_PER_MAJOR: i64 = 100;

    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// let price = Money::from_minor(11500); // Rs. 115.00
    /// assert_eq!(price.minor(), 11500);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from major and minor units (rupees and paise).
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// let price = Money::from_major_minor(99, 99); // Rs. 99.99
    /// assert_eq!(price.minor(), 9999);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.minor(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * Self::MINOR_PER_MAJOR - minor)
        } else {
            Money(major * Self::MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / Self::MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % Self::MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::money::Money;
    ///
    /// let a = Money::from_minor(100);
    /// assert_eq!(a.checked_add(a), Some(Money::from_minor(200)));
    /// assert_eq!(Money::from_minor(i64::MAX).checked_add(a), None);
    /// ```
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the bare amount with two decimals: `115.00`, `-5.50`.
///
/// The currency label is not part of the amount; menu options and the
/// receipt add it where needed.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
