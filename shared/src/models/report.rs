//! Financial Report Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction type written for stock sales
pub const SALE_TRANSACTION_TYPE: &str = "income";
/// Transaction category written for stock sales
pub const SALE_TRANSACTION_CATEGORY: &str = "product sale";

/// Report ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Report {
    pub id: i64,
    pub transaction_type: String,
    pub transaction_category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: Option<String>,
}

/// Create / full update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportCreate {
    pub transaction_type: Option<String>,
    pub transaction_category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

pub type ReportUpdate = ReportCreate;

/// Complete set of writable report fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub transaction_type: String,
    pub transaction_category: String,
    pub amount: Decimal,
    pub description: Option<String>,
}

impl ReportDraft {
    /// Income entry paired with a recorded stock sale
    pub fn for_sale(item_name: &str, quantity_sold: i32, total: Decimal) -> Self {
        Self {
            transaction_type: SALE_TRANSACTION_TYPE.to_string(),
            transaction_category: SALE_TRANSACTION_CATEGORY.to_string(),
            amount: total,
            description: Some(format!("{quantity_sold} x {item_name}")),
        }
    }
}
