//! # Jupiter Price API
//!
//! Unit prices for portfolio valuation. A failed lookup is never an error to
//! the caller: the token is simply valued at zero.

use super::client::JupiterHttpClient;
use super::types::JupiterPriceResponse;
use tracing::{debug, warn};

impl JupiterHttpClient {
    /// USD price of `mint`, or `0.0` when the API fails, times out or has no entry.
    pub async fn get_price(&self, mint: &str) -> f64 {
        let url = format!("{}/price", self.price_api_base);

        let response = match self
            .http
            .get(&url)
            .query(&[("ids", mint)])
            .timeout(self.price_timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Price fetch error for {}: {}", mint, e);
                return 0.0;
            }
        };

        if !response.status().is_success() {
            warn!("Price API returned status {} for {}", response.status(), mint);
            return 0.0;
        }

        match response.json::<JupiterPriceResponse>().await {
            Ok(prices) => {
                let price = prices.data.get(mint).map(|d| d.price).unwrap_or(0.0);
                debug!("Jupiter price: {} = ${:.4}", mint, price);
                price
            }
            Err(e) => {
                warn!("Price API parse failed for {}: {}", mint, e);
                0.0
            }
        }
    }
}
