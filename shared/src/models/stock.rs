//! Stock Model (inventory sales ledger)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money;

/// Stock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Stock {
    pub id: i64,
    pub item_name: String,
    pub quantity_sold: i32,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Always `unit_price * quantity_sold`
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Create / full update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockCreate {
    pub item_name: Option<String>,
    pub quantity_sold: Option<i32>,
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
}

/// Full replacement uses the same fields as create
pub type StockUpdate = StockCreate;

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockPatch {
    pub item_name: Option<String>,
    pub quantity_sold: Option<i32>,
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
}

/// Complete set of writable stock fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDraft {
    pub item_name: String,
    pub quantity_sold: i32,
    pub category: String,
    pub unit_price: Decimal,
}

impl StockDraft {
    /// `unit_price * quantity_sold`, or `None` when the product overflows
    /// or does not fit a stored amount
    pub fn total(&self) -> Option<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity_sold))
            .filter(|total| money::is_storable(*total))
    }
}

impl StockPatch {
    /// Merge over `existing`; absent fields keep their stored value,
    /// supplied names are trimmed.
    pub fn apply(&self, existing: &Stock) -> StockDraft {
        StockDraft {
            item_name: merge_text(&self.item_name, &existing.item_name),
            quantity_sold: self.quantity_sold.unwrap_or(existing.quantity_sold),
            category: merge_text(&self.category, &existing.category),
            unit_price: self.unit_price.unwrap_or(existing.unit_price),
        }
    }
}

fn merge_text(patch: &Option<String>, stored: &str) -> String {
    patch.as_deref().unwrap_or(stored).trim().to_string()
}
