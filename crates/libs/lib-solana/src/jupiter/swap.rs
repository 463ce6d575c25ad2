//! # Jupiter Swap Transaction Building
//!
//! Swap transaction building from Jupiter quotes.

use super::client::{ensure_success, JupiterHttpClient};
use super::types::{QuoteResponse, SwapOptions, SwapTransactionResponse};
use lib_core::{AppError, Result};
use tracing::debug;

impl JupiterHttpClient {
    /// Build an unsigned swap transaction from a quote
    pub async fn get_swap_transaction(
        &self,
        quote_response: &QuoteResponse,
        user_public_key: &str,
        options: &SwapOptions,
    ) -> Result<SwapTransactionResponse> {
        let swap_url = format!("{}/swap", self.quote_api_base);

        let mut request_body = serde_json::json!({
            "quoteResponse": quote_response,
            "userPublicKey": user_public_key,
            "wrapAndUnwrapSol": options.wrap_and_unwrap_sol,
            "asLegacyTransaction": options.as_legacy_transaction,
        });
        if let Some(price) = options.compute_unit_price_micro_lamports {
            request_body["computeUnitPriceMicroLamports"] = serde_json::json!(price);
        }

        debug!("Jupiter swap transaction request for user: {}", user_public_key);

        let response = self
            .http
            .post(&swap_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::http(None, format!("Jupiter swap request failed: {e}")))?;
        let response = ensure_success(response, "Jupiter swap transaction").await?;

        let swap_response: SwapTransactionResponse = response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Jupiter swap response missing swapTransaction: {e}")))?;

        debug!("Jupiter swap transaction received ({} base64 chars)", swap_response.swap_transaction.len());

        Ok(swap_response)
    }
}
