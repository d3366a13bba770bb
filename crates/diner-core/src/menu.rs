//! # Menu Module
//!
//! Menu options, categories and the catalog a session orders from.
//!
//! ## Catalog Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             Catalog                                     │
//! │                                                                         │
//! │  Category: Food ("Add an item")     Category: Beverage ("Add a beverage")│
//! │  ──────────────────────────────     ─────────────────────────────────── │
//! │  0  Veg Burger Rs. 115.00           0  Sprite (M) Rs. 115.00            │
//! │  1  Veg Wrap Rs. 130.00             1  Sprite (L) Rs. 130.00            │
//! │  .  ...                             .  ...                              │
//! │  5  No, that's all   ◄── stop ──►   5  No, that's all                   │
//! │                                                                         │
//! │  The last entry of every category is the zero-priced stop option.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is a plain value. The session loop receives it as an
//! argument, so tests can hand in any menu they like.

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_option_name, validate_price};

/// Currency label used when an option does not name one.
pub const DEFAULT_CURRENCY_UNIT: &str = "Rs.";

/// Label of the stop option that ends every category.
pub const SENTINEL_LABEL: &str = "No, that's all";

/// Food menu as `(name, price in paise)`, stop option last.
const FOOD_MENU: &[(&str, i64)] = &[
    ("Veg Burger", 11500),
    ("Veg Wrap", 13000),
    ("Veg Happy Meal", 21500),
    ("Chicken Burger", 17500),
    ("Chicken Wrap", 19500),
    (SENTINEL_LABEL, 0),
];

/// Beverage menu as `(name, price in paise)`, stop option last.
const BEVERAGE_MENU: &[(&str, i64)] = &[
    ("Sprite (M)", 11500),
    ("Sprite (L)", 13000),
    ("Mango Smoothie", 21500),
    ("Chocolate Smoothie", 17500),
    ("Chocolate Smoothie w/ Icecream", 19500),
    (SENTINEL_LABEL, 0),
];

// =============================================================================
// Menu Option
// =============================================================================

/// A purchasable choice on the menu.
///
/// ## Display Form
/// - Priced: `"{name} {unit} {price}"`, e.g. `Veg Burger Rs. 115.00`
/// - Zero price: just `name`
///
/// A real item priced at zero renders like the stop option. Selection works
/// by index, so this only affects what is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    name: String,
    unit: String,
    price: Money,
}

/// Field-by-field description of an option, any of which may be missing.
///
/// Missing `unit` (or an empty one) becomes `"Rs."`, missing `price`
/// becomes zero, missing `name` fails construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRecord {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub price: Option<Money>,
}

impl MenuOption {
    /// Builds an option priced in the default currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use diner_core::menu::MenuOption;
    /// use diner_core::money::Money;
    ///
    /// let burger = MenuOption::new("Veg Burger", Money::from_minor(11500)).unwrap();
    /// assert_eq!(burger.to_string(), "Veg Burger Rs. 115.00");
    ///
    /// assert!(MenuOption::new("", Money::zero()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::with_unit(name, DEFAULT_CURRENCY_UNIT, price)
    }

    /// Builds an option with an explicit currency label.
    pub fn with_unit(
        name: impl Into<String>,
        unit: impl Into<String>,
        price: Money,
    ) -> CoreResult<Self> {
        let name = name.into();
        validate_option_name(&name)?;
        validate_price(price)?;

        let unit = unit.into();
        let unit = if unit.is_empty() {
            DEFAULT_CURRENCY_UNIT.to_string()
        } else {
            unit
        };

        Ok(MenuOption { name, unit, price })
    }

    /// Builds an option from a record, applying the defaults.
    pub fn from_record(record: OptionRecord) -> CoreResult<Self> {
        let name = record.name.unwrap_or_default();
        let unit = record.unit.unwrap_or_default();
        let price = record.price.unwrap_or_default();
        Self::with_unit(name, unit, price)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// The label shown in the selection prompt and captured on purchase.
    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.price.is_zero() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {} {}", self.name, self.unit, self.price)
        }
    }
}

/// Finds the option whose display string equals `text` exactly.
///
/// Returns the first match when several options render the same.
///
/// ## Example
/// ```rust
/// use diner_core::menu::{option_from_display_string, Catalog};
///
/// let catalog = Catalog::builtin().unwrap();
/// let food = catalog.food().unwrap();
///
/// let wrap = option_from_display_string("Veg Wrap Rs. 130.00", food.options()).unwrap();
/// assert_eq!(wrap.name(), "Veg Wrap");
///
/// assert!(option_from_display_string("Veg Wrap", food.options()).is_err());
/// ```
pub fn option_from_display_string<'a>(
    text: &str,
    options: &'a [MenuOption],
) -> CoreResult<&'a MenuOption> {
    options
        .iter()
        .find(|option| option.display_string() == text)
        .ok_or_else(|| CoreError::OptionNotFound(text.to_string()))
}

// =============================================================================
// Category
// =============================================================================

/// Which part of the menu a category holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Food,
    Beverage,
}

impl CategoryKind {
    /// Message shown above the choices.
    pub fn prompt(&self) -> &'static str {
        match self {
            CategoryKind::Food => "Add an item",
            CategoryKind::Beverage => "Add a beverage",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Food => write!(f, "food"),
            CategoryKind::Beverage => write!(f, "beverage"),
        }
    }
}

/// An ordered list of options ending in the stop option.
///
/// ## Invariants
/// - At least one option
/// - The last option is priced zero and ends the category's selection loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    kind: CategoryKind,
    options: Vec<MenuOption>,
}

impl Category {
    /// Creates a category, checking the stop-option invariant.
    pub fn new(kind: CategoryKind, options: Vec<MenuOption>) -> CoreResult<Self> {
        let last = options.last().ok_or_else(|| CoreError::EmptyCategory {
            category: kind.to_string(),
        })?;

        if !last.price().is_zero() {
            return Err(CoreError::MissingSentinel {
                category: kind.to_string(),
                found: last.display_string(),
            });
        }

        Ok(Category { kind, options })
    }

    /// Builds a category from `(name, price in minor units)` rows.
    fn from_table(kind: CategoryKind, rows: &[(&str, i64)]) -> CoreResult<Self> {
        let options = rows
            .iter()
            .map(|(name, minor)| MenuOption::new(*name, Money::from_minor(*minor)))
            .collect::<CoreResult<Vec<_>>>()?;
        Self::new(kind, options)
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn prompt(&self) -> &'static str {
        self.kind.prompt()
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// The stop option (always the last entry).
    pub fn sentinel(&self) -> &MenuOption {
        &self.options[self.sentinel_index()]
    }

    pub fn sentinel_index(&self) -> usize {
        self.options.len() - 1
    }

    /// True when `index` points at the stop option itself.
    pub fn is_sentinel_index(&self, index: usize) -> bool {
        index == self.sentinel_index()
    }

    /// Returns the option at a prompt index.
    pub fn option_at(&self, index: usize) -> CoreResult<&MenuOption> {
        self.options.get(index).ok_or(CoreError::NoOptionAtIndex {
            index,
            len: self.options.len(),
        })
    }

    /// Choice labels in menu order.
    pub fn display_strings(&self) -> Vec<String> {
        self.options.iter().map(MenuOption::display_string).collect()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Every category on offer, in the order they are presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// The compiled-in menu: food first, then beverages.
    pub fn builtin() -> CoreResult<Self> {
        Ok(Catalog::new(vec![
            Category::from_table(CategoryKind::Food, FOOD_MENU)?,
            Category::from_table(CategoryKind::Beverage, BEVERAGE_MENU)?,
        ]))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// First category of the given kind.
    pub fn category(&self, kind: CategoryKind) -> Option<&Category> {
        self.categories.iter().find(|c| c.kind() == kind)
    }

    pub fn food(&self) -> Option<&Category> {
        self.category(CategoryKind::Food)
    }

    pub fn beverages(&self) -> Option<&Category> {
        self.category(CategoryKind::Beverage)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
