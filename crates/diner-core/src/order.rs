//! # Order Module
//!
//! The items a customer has picked during one session.
//!
//! ## Snapshot Pattern
//! A [`PurchaseItem`] freezes the option's display string and price at the
//! moment it is selected. The bill is computed from these snapshots only,
//! never by reading the menu again.

use serde::Serialize;
use std::fmt;

use crate::menu::MenuOption;
use crate::money::Money;

/// A line on the order, frozen at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseItem {
    /// Display string of the option when it was picked.
    name: String,
    /// Price of the option when it was picked.
    price: Money,
}

impl PurchaseItem {
    /// Captures an option's display string and price.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::menu::MenuOption;
    /// use diner_core::money::Money;
    /// use diner_core::order::PurchaseItem;
    ///
    /// let wrap = MenuOption::new("Veg Wrap", Money::from_minor(13000)).unwrap();
    /// let item = PurchaseItem::from_option(&wrap);
    /// assert_eq!(item.name(), "Veg Wrap Rs. 130.00");
    /// assert_eq!(item.price(), Money::from_minor(13000));
    /// ```
    pub fn from_option(option: &MenuOption) -> Self {
        PurchaseItem {
            name: option.display_string(),
            price: option.price(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for PurchaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Append-only list of purchased items, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Order {
    items: Vec<PurchaseItem>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the end of the order.
    pub fn append(&mut self, item: PurchaseItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[PurchaseItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PurchaseItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a PurchaseItem;
    type IntoIter = std::slice::Iter<'a, PurchaseItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<PurchaseItem> for Order {
    fn from_iter<I: IntoIterator<Item = PurchaseItem>>(iter: I) -> Self {
        Order {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_selection_order() {
        let burger = MenuOption::new("Veg Burger", Money::from_minor(11500)).unwrap();
        let sprite = MenuOption::new("Sprite (M)", Money::from_minor(11500)).unwrap();

        let mut order = Order::new();
        assert!(order.is_empty());

        order.append(PurchaseItem::from_option(&burger));
        order.append(PurchaseItem::from_option(&sprite));
        order.append(PurchaseItem::from_option(&burger));

        let names: Vec<&str> = order.iter().map(PurchaseItem::name).collect();
        assert_eq!(
            names,
            vec![
                "Veg Burger Rs. 115.00",
                "Sprite (M) Rs. 115.00",
                "Veg Burger Rs. 115.00"
            ]
        );
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_item_is_a_snapshot() {
        let option = MenuOption::new("Mango Smoothie", Money::from_minor(21500)).unwrap();
        let item = PurchaseItem::from_option(&option);
        drop(option);

        assert_eq!(item.to_string(), "Mango Smoothie Rs. 215.00");
        assert_eq!(item.price(), Money::from_minor(21500));
    }

    #[test]
    fn test_serialize() {
        let option = MenuOption::new("Veg Wrap", Money::from_minor(13000)).unwrap();
        let order: Order = std::iter::once(PurchaseItem::from_option(&option)).collect();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["items"][0]["name"], "Veg Wrap Rs. 130.00");
        assert_eq!(json["items"][0]["price"], 13000);
    }
}
