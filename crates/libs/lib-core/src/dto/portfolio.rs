//! # Portfolio DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the holdings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub mint: String,
    pub symbol: String,
    pub name: String,
    /// Human-readable balance.
    pub amount: f64,
    /// USD unit price; 0 when unknown.
    pub price: f64,
    /// `amount * price`, absent when the price is unknown.
    pub value: Option<f64>,
}

impl PortfolioEntry {
    pub fn new(
        mint: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        price: f64,
    ) -> Self {
        let value = (price > 0.0).then(|| amount * price);
        Self {
            mint: mint.into(),
            symbol: symbol.into(),
            name: name.into(),
            amount,
            price,
            value,
        }
    }

    /// `SYMBOL (Name)`
    pub fn label(&self) -> String {
        let name = if self.name.is_empty() { "N/A" } else { &self.name };
        format!("{} ({})", self.symbol, name)
    }

    pub fn amount_display(&self) -> String {
        format!("{:.5}", self.amount)
    }

    pub fn value_display(&self) -> String {
        lib_utils::format_usd(self.value)
    }
}

/// The result of one poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub owner: String,
    /// Native SOL first, then SPL tokens in account order.
    pub entries: Vec<PortfolioEntry>,
    pub fetched_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn new(owner: impl Into<String>, entries: Vec<PortfolioEntry>) -> Self {
        Self { owner: owner.into(), entries, fetched_at: Utc::now() }
    }

    /// Sum of the rows that have a value.
    pub fn total_value(&self) -> f64 {
        self.entries.iter().filter_map(|e| e.value).sum()
    }
}
