//! # Jupiter Quote API
//!
//! Quote API integration for getting swap quotes from Jupiter.

use super::client::{ensure_success, JupiterHttpClient};
use super::types::QuoteResponse;
use lib_core::dto::QuoteRequest;
use lib_core::{AppError, Result};
use tracing::debug;

impl JupiterHttpClient {
    /// Get a swap quote from Jupiter Aggregator V6.
    ///
    /// A 2xx body without `outAmount` is an [`AppError::InvalidResponse`].
    pub async fn get_swap_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        let url = format!("{}/quote", self.quote_api_base);
        let amount = request.amount_units.to_string();
        let slippage = request.slippage_bps.to_string();

        debug!(
            "Jupiter swap quote request: {} {} -> {}",
            amount, request.input.symbol, request.output.symbol
        );

        let response = self
            .http
            .get(&url)
            .query(&[
                ("inputMint", request.input.mint.as_str()),
                ("outputMint", request.output.mint.as_str()),
                ("amount", amount.as_str()),
                ("slippageBps", slippage.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::http(None, format!("Jupiter quote request failed: {e}")))?;
        let response = ensure_success(response, "Jupiter quote").await?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::http(None, format!("Jupiter quote body unreadable: {e}")))?;
        let quote: QuoteResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::InvalidResponse(format!("Jupiter quote missing fields: {e}")))?;

        debug!(
            "Jupiter quote: {} -> {} (impact: {:?}%)",
            quote.in_amount, quote.out_amount, quote.price_impact_pct
        );

        Ok(quote)
    }
}
