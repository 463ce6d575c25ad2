//! # Jupiter API Types
//!
//! Type definitions for Jupiter Aggregator API requests and responses.

use lib_core::dto::TokenRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response from Jupiter price API
#[derive(Debug, Deserialize)]
pub struct JupiterPriceResponse {
    pub data: HashMap<String, JupiterPriceData>,
}

/// Price data for a single token
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JupiterPriceData {
    pub id: String,
    #[serde(rename = "mintSymbol", default)]
    pub mint_symbol: Option<String>,
    pub price: f64,
}

/// Entry of the strict token list
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<TokenInfo> for TokenRef {
    fn from(info: TokenInfo) -> Self {
        Self {
            symbol: info.symbol,
            name: info.name,
            mint: info.address,
            decimals: info.decimals,
            logo_uri: info.logo_uri,
        }
    }
}

/// Response from Jupiter quote API.
///
/// Only the fields the dashboard reads are typed; everything else is kept in
/// `extra` so the quote can be posted back to `/swap` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "inputMint")]
    pub input_mint: String,
    #[serde(rename = "outputMint")]
    pub output_mint: String,
    #[serde(rename = "inAmount")]
    pub in_amount: String,
    #[serde(rename = "outAmount")]
    pub out_amount: String,
    #[serde(rename = "priceImpactPct", default, skip_serializing_if = "Option::is_none")]
    pub price_impact_pct: Option<String>,
    #[serde(rename = "routePlan", default)]
    pub route_plan: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QuoteResponse {
    pub fn price_impact(&self) -> Option<f64> {
        self.price_impact_pct.as_deref().and_then(|p| p.parse().ok())
    }

    /// AMM labels along the route, e.g. `["Orca", "Raydium"]`.
    pub fn route_labels(&self) -> Vec<String> {
        self.route_plan
            .iter()
            .filter_map(|step| step.pointer("/swapInfo/label"))
            .filter_map(|label| label.as_str().map(str::to_string))
            .collect()
    }
}

/// Options for building a swap transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOptions {
    pub wrap_and_unwrap_sol: bool,
    pub as_legacy_transaction: bool,
    pub compute_unit_price_micro_lamports: Option<u64>,
}

impl Default for SwapOptions {
    fn default() -> Self {
        Self {
            wrap_and_unwrap_sol: true,
            as_legacy_transaction: false,
            compute_unit_price_micro_lamports: Some(1000),
        }
    }
}

/// Response from Jupiter swap API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapTransactionResponse {
    /// Base64-encoded serialized Solana transaction
    #[serde(rename = "swapTransaction")]
    pub swap_transaction: String,
    /// Block height after which transaction is invalid
    #[serde(rename = "lastValidBlockHeight", default)]
    pub last_valid_block_height: Option<u64>,
    /// Optional priority fee in lamports
    #[serde(rename = "prioritizationFeeLamports", default)]
    pub prioritization_fee_lamports: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quote_keeps_unknown_fields() {
        let raw = json!({
            "inputMint": "So11111111111111111111111111111111111111112",
            "outputMint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "inAmount": "1000000000",
            "outAmount": "150000000",
            "otherAmountThreshold": "149250000",
            "swapMode": "ExactIn",
            "slippageBps": 50,
            "priceImpactPct": "0.0012",
            "routePlan": [
                { "swapInfo": { "ammKey": "abc", "label": "Orca" }, "percent": 100 }
            ],
            "contextSlot": 123
        });

        let quote: QuoteResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(quote.out_amount, "150000000");
        assert_eq!(quote.price_impact(), Some(0.0012));
        assert_eq!(quote.route_labels(), vec!["Orca".to_string()]);
        assert_eq!(serde_json::to_value(&quote).unwrap(), raw);
    }

    #[test]
    fn test_quote_requires_out_amount() {
        let raw = json!({ "inputMint": "a", "outputMint": "b", "inAmount": "1" });
        assert!(serde_json::from_value::<QuoteResponse>(raw).is_err());
    }

    #[test]
    fn test_token_info_to_ref() {
        let info: TokenInfo = serde_json::from_value(json!({
            "address": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
            "symbol": "Bonk",
            "name": "Bonk",
            "decimals": 5,
            "logoURI": "https://arweave.net/bonk.png"
        }))
        .unwrap();
        let token = TokenRef::from(info);
        assert_eq!(token.decimals, 5);
        assert_eq!(token.logo_uri.as_deref(), Some("https://arweave.net/bonk.png"));
    }
}
