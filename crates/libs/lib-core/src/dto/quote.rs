//! # Quote DTOs
//!
//! [`QuoteRequest`] is what the exchange form asks for; [`QuoteView`] is what
//! it displays once the aggregator answers. Both are derived values and are
//! rebuilt on every input change.

use super::token::TokenRef;
use crate::error::{AppError, Result};
use lib_utils::amount::{format_fixed, from_base_units, parse_amount, to_base_units};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub input: TokenRef,
    pub output: TokenRef,
    /// Human-readable input amount.
    pub amount: Decimal,
    /// `round(amount * 10^input.decimals)`
    pub amount_units: u64,
    pub slippage_bps: u16,
}

impl QuoteRequest {
    pub fn new(input: TokenRef, output: TokenRef, raw_amount: &str, slippage_bps: u16) -> Result<Self> {
        if input.mint == output.mint {
            return Err(AppError::InvalidInput("Select two different tokens".to_string()));
        }
        let amount = parse_amount(raw_amount)?;
        let amount_units = to_base_units(amount, input.decimals)?;
        if amount_units == 0 {
            return Err(AppError::InvalidInput("Amount is below the token's smallest unit".to_string()));
        }
        Ok(Self { input, output, amount, amount_units, slippage_bps })
    }

    /// Same tokens reversed, for the flip button.
    pub fn reversed(&self, raw_amount: &str) -> Result<Self> {
        Self::new(self.output.clone(), self.input.clone(), raw_amount, self.slippage_bps)
    }
}

/// The displayed result of a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteView {
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: Decimal,
    /// `outAmount / 10^output.decimals`
    pub out_amount: Decimal,
    /// `out_amount / in_amount`
    pub rate: Decimal,
    pub price_impact_pct: Option<f64>,
}

impl QuoteView {
    /// Build the view from the aggregator's raw `outAmount` string.
    pub fn from_out_amount(request: &QuoteRequest, out_amount_raw: &str) -> Result<Self> {
        let raw: u64 = out_amount_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidResponse(format!("outAmount '{out_amount_raw}' is not an integer")))?;
        let out_amount = from_base_units(raw, request.output.decimals);
        let rate = out_amount
            .checked_div(request.amount)
            .ok_or_else(|| AppError::InvalidInput("Amount must be greater than zero".to_string()))?;

        Ok(Self {
            input_mint: request.input.mint.clone(),
            output_mint: request.output.mint.clone(),
            in_amount: request.amount,
            out_amount,
            rate,
            price_impact_pct: None,
        })
    }

    /// Destination amount with six decimals.
    pub fn out_amount_display(&self) -> String {
        format_fixed(self.out_amount, 6)
    }

    /// Unit rate with two decimals.
    pub fn rate_display(&self) -> String {
        format_fixed(self.rate, 2)
    }
}
