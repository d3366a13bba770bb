//! # Ordering Session
//!
//! Walks the customer through every category of the catalog and prints the
//! bill.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        One Ordering Session                             │
//! │                                                                         │
//! │  Welcome banner                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each category (food, beverages):                                  │
//! │       ┌──────────────────────────────────────────────┐                 │
//! │       │  prompt.select(labels) ──► index             │                 │
//! │       │       │                                      │                 │
//! │       │       ├── stop option? ──► next category     │                 │
//! │       │       │                                      │                 │
//! │       │       └── order.append(snapshot) ──► repeat  │                 │
//! │       └──────────────────────────────────────────────┘                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Bill::from_order ──► receipt::print                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use diner_core::{Bill, Catalog, Category, Order, PurchaseItem};
use std::io::Write;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::config::DinerConfig;
use crate::error::CliResult;
use crate::prompt::Prompt;
use crate::receipt;

/// Writes the welcome banner.
pub fn write_banner<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to McDonalds on your shell :)")?;
    writeln!(out, "Here you can place your order")?;
    writeln!(out, "And then we will show you your bill")?;
    writeln!(out)?;
    Ok(())
}

/// Keeps prompting in one category until the stop option is picked.
///
/// Returns the number of items added.
pub fn order_from_category<P, W>(
    category: &Category,
    prompt: &mut P,
    out: &mut W,
    order: &mut Order,
    announce: bool,
) -> CliResult<usize>
where
    P: Prompt,
    W: Write,
{
    let choices = category.display_strings();
    let mut added = 0;

    loop {
        let index = prompt.select(category.prompt(), &choices)?;

        if category.is_sentinel_index(index) {
            debug!(category = %category.kind(), added, "Category finished");
            return Ok(added);
        }

        let option = category.option_at(index)?;
        order.append(PurchaseItem::from_option(option));
        added += 1;
        info!(category = %category.kind(), item = %option, "Item added to order");

        if announce {
            writeln!(out, "{} is added to your order", option)?;
        }
    }
}

/// Collects an order across all categories, in catalog order.
pub fn take_order<P, W>(
    catalog: &Catalog,
    prompt: &mut P,
    out: &mut W,
    config: &DinerConfig,
) -> CliResult<Order>
where
    P: Prompt,
    W: Write,
{
    let mut order = Order::new();

    for category in catalog.categories() {
        order_from_category(
            category,
            prompt,
            out,
            &mut order,
            config.prompt.announce_additions,
        )?;
    }

    Ok(order)
}

/// Runs a complete session: banner, selections, bill.
pub fn run<P, W>(
    catalog: &Catalog,
    prompt: &mut P,
    out: &mut W,
    config: &DinerConfig,
) -> CliResult<Order>
where
    P: Prompt,
    W: Write,
{
    let session_id = Uuid::new_v4();
    let span = info_span!("session", id = %session_id);
    let _guard = span.enter();

    write_banner(out)?;
    let order = take_order(catalog, prompt, out, config)?;

    let bill = Bill::from_order(&order);
    info!(items = order.len(), complete = bill.is_complete(), "Order priced");

    receipt::print(out, config.receipt.format, session_id, &order, &bill)?;
    out.flush()?;

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReceiptFormat;
    use crate::error::CliError;
    use diner_core::{CategoryKind, CoreError, MenuOption, Money};
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script and records what was asked.
    struct ScriptedPrompt {
        answers: VecDeque<usize>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[usize]) -> Self {
            ScriptedPrompt {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn select(&mut self, message: &str, _choices: &[String]) -> CliResult<usize> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| CliError::Prompt("script exhausted".to_string()))
        }
    }

    fn run_to_string(answers: &[usize], config: &DinerConfig) -> (Order, String) {
        let catalog = Catalog::builtin().unwrap();
        let mut prompt = ScriptedPrompt::new(answers);
        let mut out = Vec::new();
        let order = run(&catalog, &mut prompt, &mut out, config).unwrap();
        assert!(prompt.answers.is_empty(), "unused answers");
        (order, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session_output() {
        // Veg Burger, stop; Sprite (M), stop
        let (order, output) = run_to_string(&[0, 5, 0, 5], &DinerConfig::default());

        assert_eq!(order.len(), 2);
        assert_eq!(
            output,
            "\nWelcome to McDonalds on your shell :)\n\
             Here you can place your order\n\
             And then we will show you your bill\n\n\
             Veg Burger Rs. 115.00 is added to your order\n\
             Sprite (M) Rs. 115.00 is added to your order\n\
             \nFinal Order\n\
             1. Veg Burger Rs. 115.00\n\
             2. Sprite (M) Rs. 115.00\n\
             Order Amount: 230.00\n\
             Service Charge: 4.60\n\
             Final Amount: 234.60\n"
        );
    }

    #[test]
    fn test_stop_immediately_gives_empty_bill() {
        let (order, output) = run_to_string(&[5, 5], &DinerConfig::default());

        assert!(order.is_empty());
        assert!(output.ends_with(
            "Final Order\nOrder Amount: 0.00\nService Charge: 0.00\nFinal Amount: 0.00\n"
        ));
    }

    #[test]
    fn test_categories_are_prompted_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let mut prompt = ScriptedPrompt::new(&[1, 1, 5, 2, 5]);
        let mut out = Vec::<u8>::new();

        let order = take_order(&catalog, &mut prompt, &mut out, &DinerConfig::default()).unwrap();

        assert_eq!(
            prompt.asked,
            vec![
                "Add an item",
                "Add an item",
                "Add an item",
                "Add a beverage",
                "Add a beverage"
            ]
        );
        let names: Vec<&str> = order.iter().map(PurchaseItem::name).collect();
        assert_eq!(
            names,
            vec![
                "Veg Wrap Rs. 130.00",
                "Veg Wrap Rs. 130.00",
                "Mango Smoothie Rs. 215.00"
            ]
        );
    }

    #[test]
    fn test_sentinel_is_never_appended() {
        let catalog = Catalog::builtin().unwrap();
        let food = catalog.food().unwrap();
        let mut prompt = ScriptedPrompt::new(&[food.sentinel_index()]);
        let mut order = Order::new();

        let added =
            order_from_category(food, &mut prompt, &mut Vec::<u8>::new(), &mut order, true).unwrap();

        assert_eq!(added, 0);
        assert!(order.is_empty());
    }

    #[test]
    fn test_selection_uses_index_not_label() {
        // Two options render identically; the second must be the one captured.
        let twin_a = MenuOption::with_unit("Shake", "Rs.", Money::from_minor(10000)).unwrap();
        let twin_b = MenuOption::with_unit("Shake", "Rs.", Money::from_minor(10000)).unwrap();
        let stop = MenuOption::new("Done", Money::zero()).unwrap();
        let category =
            Category::new(CategoryKind::Beverage, vec![twin_a, twin_b, stop]).unwrap();

        let mut prompt = ScriptedPrompt::new(&[1, 2]);
        let mut order = Order::new();
        order_from_category(&category, &mut prompt, &mut Vec::<u8>::new(), &mut order, false).unwrap();

        assert_eq!(order.len(), 1);
        assert_eq!(order.items()[0].name(), "Shake Rs. 100.00");
    }

    #[test]
    fn test_announcements_can_be_disabled() {
        let mut config = DinerConfig::default();
        config.prompt.announce_additions = false;

        let (_, output) = run_to_string(&[0, 5, 5], &config);
        assert!(!output.contains("is added to your order"));
        assert!(output.contains("1. Veg Burger Rs. 115.00\n"));
    }

    #[test]
    fn test_json_session() {
        let mut config = DinerConfig::default();
        config.receipt.format = ReceiptFormat::Json;
        config.prompt.announce_additions = false;

        let (_, output) = run_to_string(&[4, 5, 4, 5], &config);
        let json_start = output.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();

        // 195.00 + 195.00 = 390.00, 3 tiers -> 11.70
        assert_eq!(json["orderAmount"], "390.00");
        assert_eq!(json["serviceCharge"], "11.70");
        assert_eq!(json["finalAmount"], "401.70");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_out_of_range_answer_is_fatal() {
        let catalog = Catalog::builtin().unwrap();
        let mut prompt = ScriptedPrompt::new(&[42]);

        let err = take_order(&catalog, &mut prompt, &mut Vec::<u8>::new(), &DinerConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::NoOptionAtIndex { index: 42, len: 6 })
        ));
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let catalog = Catalog::builtin().unwrap();
        let mut prompt = ScriptedPrompt::new(&[0]);

        let err = take_order(&catalog, &mut prompt, &mut Vec::<u8>::new(), &DinerConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Prompt(_)));
    }
}
