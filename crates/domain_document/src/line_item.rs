//! Invoice line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

/// One line of a document's item table
///
/// Line order is print order; items are never reordered after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub line_no: u32,
    pub item_code: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
    pub unit_price: Money,
    pub discount: Option<Rate>,
}

impl LineItem {
    /// Extended amount for the line: quantity times unit price, less
    /// the line discount when one applies
    pub fn line_total(&self) -> Money {
        let gross = self.unit_price.multiply(self.quantity);
        match &self.discount {
            Some(rate) => gross.multiply(Decimal::ONE - rate.as_decimal()),
            None => gross,
        }
    }

    /// True when the line carries enough data to bill: a description
    /// and a positive quantity
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty() && self.quantity > Decimal::ZERO
    }
}
