//! # Receipt
//!
//! Prints the order and its bill, as text or JSON.
//!
//! ## Text Layout
//! ```text
//!
//! Final Order
//! 1. Veg Burger Rs. 115.00
//! 2. Sprite (M) Rs. 115.00
//! Order Amount: 230.00
//! Service Charge: 4.60
//! Final Amount: 234.60
//! ```
//!
//! A figure that could not be computed prints as `ERROR`. The three amount
//! lines are always printed.

use chrono::{DateTime, Utc};
use diner_core::{Bill, Figure, Order};
use serde::Serialize;
use std::io::Write;
use tracing::error;
use uuid::Uuid;

use crate::config::ReceiptFormat;
use crate::error::CliResult;

/// Shown in place of a figure that failed.
pub const ERROR_MARKER: &str = "ERROR";

/// Renders one bill figure.
pub fn figure_text(figure: &Figure) -> String {
    match figure {
        Ok(amount) => amount.to_string(),
        Err(_) => ERROR_MARKER.to_string(),
    }
}

/// Logs every failed figure of a bill.
fn log_failures(bill: &Bill) {
    let figures = [
        ("order_amount", &bill.order_amount),
        ("service_charge", &bill.service_charge),
        ("final_amount", &bill.final_amount),
    ];

    for (name, figure) in figures {
        if let Err(e) = figure {
            error!(figure = name, error = %e, "Bill figure unavailable");
        }
    }
}

/// One purchased item on the JSON receipt.
#[derive(Debug, Serialize)]
pub struct ReceiptLine {
    pub name: String,
    pub price: String,
}

/// The JSON receipt document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub session_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<ReceiptLine>,
    pub order_amount: String,
    pub service_charge: String,
    pub final_amount: String,
}

impl Receipt {
    pub fn new(session_id: Uuid, placed_at: DateTime<Utc>, order: &Order, bill: &Bill) -> Self {
        Receipt {
            session_id,
            placed_at,
            items: order
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name().to_string(),
                    price: item.price().to_string(),
                })
                .collect(),
            order_amount: figure_text(&bill.order_amount),
            service_charge: figure_text(&bill.service_charge),
            final_amount: figure_text(&bill.final_amount),
        }
    }
}

/// Writes the text bill.
pub fn write_text<W: Write>(out: &mut W, order: &Order, bill: &Bill) -> CliResult<()> {
    writeln!(out)?;
    writeln!(out, "Final Order")?;
    for (i, item) in order.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }

    writeln!(out, "Order Amount: {}", figure_text(&bill.order_amount))?;
    writeln!(out, "Service Charge: {}", figure_text(&bill.service_charge))?;
    writeln!(out, "Final Amount: {}", figure_text(&bill.final_amount))?;
    Ok(())
}

/// Writes the JSON bill followed by a newline.
pub fn write_json<W: Write>(out: &mut W, receipt: &Receipt) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, receipt)?;
    writeln!(out)?;
    Ok(())
}

/// Logs failed figures, then prints the bill in the chosen format.
pub fn print<W: Write>(
    out: &mut W,
    format: ReceiptFormat,
    session_id: Uuid,
    order: &Order,
    bill: &Bill,
) -> CliResult<()> {
    log_failures(bill);

    match format {
        ReceiptFormat::Text => write_text(out, order, bill),
        ReceiptFormat::Json => {
            let receipt = Receipt::new(session_id, Utc::now(), order, bill);
            write_json(out, &receipt)
        }
    }
}
