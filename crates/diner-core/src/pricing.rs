//! # Pricing Engine
//!
//! Pure functions turning an [`Order`] into the three bill figures.
//!
//! ## Service Charge Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SERVICE CHARGE                                                         │
//! │                                                                         │
//! │  T     = order total                                                   │
//! │  tiers = floor(T / 100)          complete Rs. 100 blocks               │
//! │  raw   = tiers × (T × 0.01)      1% of T per tier                       │
//! │  cap   = T × 0.20                                                       │
//! │  charge = min(raw, cap)                                                 │
//! │                                                                         │
//! │  T = 99.99   → tiers 0  → charge 0.00                                   │
//! │  T = 230.00  → tiers 2  → raw 4.60,   cap 46.00  → 4.60                 │
//! │  T = 2500.00 → tiers 25 → raw 625.00, cap 500.00 → 500.00 (capped)      │
//! │                                                                         │
//! │  raw grows with T² until the 20% cap takes over at Rs. 2000.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All math is done on minor units in i128. The per-tier charge rounds half
//! up to the nearest paisa. The cap rounds down, so the charge never exceeds
//! 20% of the total.
//!
//! ## Failure Handling
//! Every figure is a [`Figure`] (`Result<Money, PricingError>`). A failed
//! total also fails the service charge, and either failure fails the final
//! amount. [`Bill::from_order`] collects the three so the caller can render
//! each one on its own.

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::order::Order;

/// Size of one service-charge tier, in minor units (Rs. 100.00).
pub const TIER_SIZE_MINOR: i64 = 100 * Money::MINOR_PER_MAJOR;

/// Upper bound of the service charge, as a percentage of the total.
pub const SERVICE_CHARGE_CAP_PERCENT: i64 = 20;

/// One computed bill figure: an amount, or the reason it is unavailable.
pub type Figure = PricingResult<Money>;

/// Sum of all item prices. An empty order totals zero.
///
/// ## Example
/// ```rust
/// use diner_core::menu::MenuOption;
/// use diner_core::money::Money;
/// use diner_core::order::{Order, PurchaseItem};
/// use diner_core::pricing::total_amount;
///
/// let burger = MenuOption::new("Veg Burger", Money::from_minor(11500)).unwrap();
/// let mut order = Order::new();
/// assert_eq!(total_amount(&order).unwrap(), Money::zero());
///
/// order.append(PurchaseItem::from_option(&burger));
/// order.append(PurchaseItem::from_option(&burger));
/// assert_eq!(total_amount(&order).unwrap(), Money::from_minor(23000));
/// ```
pub fn total_amount(order: &Order) -> Figure {
    order
        .iter()
        .enumerate()
        .try_fold(Money::zero(), |sum, (index, item)| {
            sum.checked_add(item.price())
                .ok_or(PricingError::TotalOverflow { items: index + 1 })
        })
}

/// Tiered service charge on the order total, capped at 20%.
pub fn service_charge(order: &Order) -> Figure {
    total_amount(order).map(service_charge_on)
}

/// Tiered service charge on an already computed total.
///
/// ## Example
/// ```rust
/// use diner_core::money::Money;
/// use diner_core::pricing::service_charge_on;
///
/// let charge = service_charge_on(Money::from_minor(23000));
/// assert_eq!(charge, Money::from_minor(460)); // 4.60
///
/// // 20% of 2000.03 is 400.006, the cap rounds down
/// let capped = service_charge_on(Money::from_minor(200_003));
/// assert_eq!(capped, Money::from_minor(40_000));
/// ```
pub fn service_charge_on(total: Money) -> Money {
    let t = i128::from(total.minor());
    let tiers = t.div_euclid(i128::from(TIER_SIZE_MINOR));

    let raw = div_round_half_up(tiers * t, 100);
    let cap = (t * i128::from(SERVICE_CHARGE_CAP_PERCENT)).div_euclid(100);

    // |cap| <= |t| / 5 + 1, so min(raw, cap) always fits back in i64
    Money::from_minor(raw.min(cap) as i64)
}

/// Order total plus service charge.
pub fn final_amount(order: &Order) -> Figure {
    let total = total_amount(order)?;
    add_charge(total, service_charge_on(total))
}

fn add_charge(total: Money, charge: Money) -> Figure {
    total
        .checked_add(charge)
        .ok_or(PricingError::FinalOverflow { total, charge })
}

/// `n / d` rounded to the nearest integer, halves rounded up.
fn div_round_half_up(n: i128, d: i128) -> i128 {
    (2 * n + d).div_euclid(2 * d)
}

// =============================================================================
// Bill
// =============================================================================

/// The three figures printed under an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub order_amount: Figure,
    pub service_charge: Figure,
    pub final_amount: Figure,
}

impl Bill {
    /// Prices an order. Never fails as a whole; each figure may.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::menu::Catalog;
    /// use diner_core::money::Money;
    /// use diner_core::order::{Order, PurchaseItem};
    /// use diner_core::pricing::Bill;
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// let burger = &catalog.food().unwrap().options()[0];
    /// let sprite = &catalog.beverages().unwrap().options()[0];
    ///
    /// let mut order = Order::new();
    /// order.append(PurchaseItem::from_option(burger));
    /// order.append(PurchaseItem::from_option(sprite));
    ///
    /// let bill = Bill::from_order(&order);
    /// assert_eq!(bill.order_amount, Ok(Money::from_minor(23000)));
    /// assert_eq!(bill.service_charge, Ok(Money::from_minor(460)));
    /// assert_eq!(bill.final_amount, Ok(Money::from_minor(23460)));
    /// ```
    pub fn from_order(order: &Order) -> Self {
        let order_amount = total_amount(order);
        let service_charge = order_amount.clone().map(service_charge_on);
        let final_amount = match (&order_amount, &service_charge) {
            (Ok(total), Ok(charge)) => add_charge(*total, *charge),
            (Err(e), _) | (_, Err(e)) => Err(e.clone()),
        };

        Bill {
            order_amount,
            service_charge,
            final_amount,
        }
    }

    /// True when all three figures are amounts.
    pub fn is_complete(&self) -> bool {
        self.order_amount.is_ok() && self.service_charge.is_ok() && self.final_amount.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuOption;
    use crate::order::PurchaseItem;

    fn order_of(prices: &[i64]) -> Order {
        prices
            .iter()
            .map(|minor| {
                let option = MenuOption::new("Item", Money::from_minor(*minor)).unwrap();
                PurchaseItem::from_option(&option)
            })
            .collect()
    }

    fn charge(total_minor: i64) -> i64 {
        service_charge_on(Money::from_minor(total_minor)).minor()
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(&Order::new()), Ok(Money::zero()));
        assert_eq!(
            total_amount(&order_of(&[11500, 13000, 21500])),
            Ok(Money::from_minor(46000))
        );
    }

    #[test]
    fn test_empty_order() {
        let order = Order::new();
        assert_eq!(service_charge(&order), Ok(Money::zero()));
        assert_eq!(final_amount(&order), Ok(Money::zero()));
    }

    #[test]
    fn test_below_first_tier_is_free() {
        assert_eq!(charge(9999), 0);
        assert_eq!(charge(1), 0);
    }

    #[test]
    fn test_first_tier() {
        let order = order_of(&[10000]);
        assert_eq!(service_charge(&order), Ok(Money::from_minor(100)));
        assert_eq!(final_amount(&order), Ok(Money::from_minor(10100)));
    }

    #[test]
    fn test_cap_applies() {
        let order = order_of(&[250000]);
        assert_eq!(service_charge(&order), Ok(Money::from_minor(50000)));
        assert_eq!(final_amount(&order), Ok(Money::from_minor(300000)));
    }

    #[test]
    fn test_burger_and_sprite() {
        let order = order_of(&[11500, 11500]);
        assert_eq!(total_amount(&order), Ok(Money::from_minor(23000)));
        assert_eq!(service_charge(&order), Ok(Money::from_minor(460)));
        assert_eq!(final_amount(&order), Ok(Money::from_minor(23460)));
    }

    #[test]
    fn test_growth_is_not_linear() {
        // 3 tiers on 300.00 is 9.00, 3 tiers on 399.00 is 11.97
        assert_eq!(charge(30000), 900);
        assert_eq!(charge(39900), 1197);
        // Crossover: 20 tiers on 2000.00 equals the cap exactly
        assert_eq!(charge(200000), 40000);
        assert_eq!(charge(210000), 42000);
    }

    #[test]
    fn test_rounds_to_nearest_paisa() {
        // 1 tier on 123.45 = 1.2345 -> 1.23
        assert_eq!(charge(12345), 123);
        // 1 tier on 123.50 = 1.235 -> 1.24
        assert_eq!(charge(12350), 124);
    }

    #[test]
    fn test_charge_bounds_hold_across_totals() {
        for total in (0..600_000).step_by(997) {
            let c = charge(total);
            assert!(c >= 0, "negative charge on {total}");
            assert!(c * 5 <= total, "charge {c} above 20% of {total}");
        }
    }

    #[test]
    fn test_cap_never_rounds_above_twenty_percent() {
        // 20% of 2000.03 is 400.006
        assert_eq!(charge(200_003), 40_000);
        // 20% of 2500.04 is 500.008
        assert_eq!(charge(250_004), 50_000);
        for total in 200_000..200_100 {
            assert!(charge(total) * 5 <= total, "charge above 20% of {total}");
        }
    }

    #[test]
    fn test_final_is_total_plus_charge() {
        let cases: [&[i64]; 3] = [&[11500], &[17500, 19500, 21500], &[13000; 12]];
        for prices in cases {
            let order = order_of(prices);
            let total = total_amount(&order).unwrap();
            let charge = service_charge(&order).unwrap();
            assert_eq!(
                final_amount(&order).unwrap().minor(),
                total.minor() + charge.minor()
            );
        }
    }

    #[test]
    fn test_total_overflow_fails_every_figure() {
        let order = order_of(&[i64::MAX, 1]);
        let bill = Bill::from_order(&order);

        assert_eq!(bill.order_amount, Err(PricingError::TotalOverflow { items: 2 }));
        assert!(bill.service_charge.is_err());
        assert!(bill.final_amount.is_err());
        assert!(!bill.is_complete());
        assert_eq!(service_charge(&order), bill.service_charge);
    }

    #[test]
    fn test_final_overflow_keeps_other_figures() {
        let order = order_of(&[i64::MAX]);
        let bill = Bill::from_order(&order);

        assert_eq!(bill.order_amount, Ok(Money::from_minor(i64::MAX)));
        assert!(bill.service_charge.is_ok());
        assert!(matches!(
            bill.final_amount,
            Err(PricingError::FinalOverflow { .. })
        ));
        assert_eq!(final_amount(&order), bill.final_amount);
    }

    #[test]
    fn test_bill_matches_free_functions() {
        let order = order_of(&[11500, 13000, 17500]);
        let bill = Bill::from_order(&order);

        assert!(bill.is_complete());
        assert_eq!(bill.order_amount, total_amount(&order));
        assert_eq!(bill.service_charge, service_charge(&order));
        assert_eq!(bill.final_amount, final_amount(&order));
    }
}
