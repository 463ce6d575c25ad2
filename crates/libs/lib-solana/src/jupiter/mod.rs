//! # Jupiter Aggregator Client
//!
//! Integration with the Jupiter Aggregator for quotes, swap transactions,
//! prices and the strict token list.

// region: --- Modules
pub mod client;
pub mod price;
pub mod quote;
pub mod swap;
pub mod types;
// endregion: --- Modules

// region: --- Main Client
use async_trait::async_trait;
use client::JupiterHttpClient;
use lib_core::dto::QuoteRequest;
use lib_core::{AppError, Config, Result};
use std::sync::Arc;
use std::time::Duration;

/// The aggregator endpoints the dashboard depends on.
#[async_trait]
pub trait AggregatorApi: Send + Sync {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse>;

    async fn swap_transaction(
        &self,
        quote: &QuoteResponse,
        user_public_key: &str,
        options: &SwapOptions,
    ) -> Result<SwapTransactionResponse>;

    /// USD price, `0.0` on any failure.
    async fn price(&self, mint: &str) -> f64;

    async fn strict_tokens(&self) -> Result<Arc<Vec<TokenInfo>>>;
}

/// Builder for configuring JupiterClient.
///
/// Allows fluent configuration of client settings before building.
#[derive(Debug, Clone)]
pub struct JupiterClientBuilder {
    timeout: Duration,
    price_timeout: Duration,
    quote_api_base: String,
    price_api_base: String,
    token_api_base: String,
}

impl Default for JupiterClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            price_timeout: Duration::from_secs(5),
            quote_api_base: lib_core::config::DEFAULT_QUOTE_API.to_string(),
            price_api_base: lib_core::config::DEFAULT_PRICE_API.to_string(),
            token_api_base: lib_core::config::DEFAULT_TOKEN_API.to_string(),
        }
    }
}

impl JupiterClientBuilder {
    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout for a single price lookup.
    pub fn price_timeout(mut self, timeout: Duration) -> Self {
        self.price_timeout = timeout;
        self
    }

    /// Set the quote/swap API base URL.
    pub fn quote_api_base(mut self, url: impl Into<String>) -> Self {
        self.quote_api_base = trim_base(url.into());
        self
    }

    /// Set the price API base URL.
    pub fn price_api_base(mut self, url: impl Into<String>) -> Self {
        self.price_api_base = trim_base(url.into());
        self
    }

    /// Set the token API base URL.
    pub fn token_api_base(mut self, url: impl Into<String>) -> Self {
        self.token_api_base = trim_base(url.into());
        self
    }

    /// Take every base URL from the application config.
    pub fn from_config(config: &Config) -> Self {
        Self::default()
            .quote_api_base(config.quote_api_base.clone())
            .price_api_base(config.price_api_base.clone())
            .token_api_base(config.token_api_base.clone())
    }

    /// Build the JupiterClient with configured settings.
    pub fn build(self) -> Result<JupiterClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let inner = JupiterHttpClient {
            http,
            quote_api_base: self.quote_api_base,
            price_api_base: self.price_api_base,
            token_api_base: self.token_api_base,
            price_timeout: self.price_timeout,
            token_cache: Arc::new(tokio::sync::RwLock::new(None)),
        };

        Ok(JupiterClient { inner })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Client for Jupiter Aggregator API
pub struct JupiterClient {
    inner: JupiterHttpClient,
}

impl JupiterClient {
    /// Create a new Jupiter client using a builder for configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lib_solana::jupiter::JupiterClient;
    ///
    /// let client = JupiterClient::builder()
    ///     .timeout(std::time::Duration::from_secs(30))
    ///     .price_api_base("https://price.jup.ag/v6")
    ///     .build()?;
    /// # Ok::<(), lib_core::AppError>(())
    /// ```
    pub fn builder() -> JupiterClientBuilder {
        JupiterClientBuilder::default()
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        JupiterClientBuilder::from_config(config).build()
    }
}

#[async_trait]
impl AggregatorApi for JupiterClient {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.inner.get_swap_quote(request).await
    }

    async fn swap_transaction(
        &self,
        quote: &QuoteResponse,
        user_public_key: &str,
        options: &SwapOptions,
    ) -> Result<SwapTransactionResponse> {
        self.inner.get_swap_transaction(quote, user_public_key, options).await
    }

    async fn price(&self, mint: &str) -> f64 {
        self.inner.get_price(mint).await
    }

    async fn strict_tokens(&self) -> Result<Arc<Vec<TokenInfo>>> {
        self.inner.strict_token_list().await
    }
}
// endregion: --- Main Client

// Re-export commonly used types
pub use types::*;
