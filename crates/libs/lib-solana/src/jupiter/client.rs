//! # Jupiter HTTP Client
//!
//! HTTP client wrapper and strict token list memo for the Jupiter API.

use super::types::TokenInfo;
use lib_core::{AppError, Result};
use reqwest::{Client, Response};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// How long a fetched strict list is served before it is fetched again.
pub const TOKEN_LIST_TTL: Duration = Duration::from_secs(3600);

/// Cached strict token list.
pub struct TokenCache {
    tokens: Arc<Vec<TokenInfo>>,
    last_refresh: Instant,
}

/// HTTP client wrapper for Jupiter API
pub struct JupiterHttpClient {
    pub http: Client,
    pub quote_api_base: String,
    pub price_api_base: String,
    pub token_api_base: String,
    /// Timeout for a single price lookup; a slow price must not stall a portfolio refresh.
    pub price_timeout: Duration,
    pub token_cache: Arc<RwLock<Option<TokenCache>>>,
}

impl JupiterHttpClient {
    /// The strict token list, served from the memo while it is fresh.
    pub async fn strict_token_list(&self) -> Result<Arc<Vec<TokenInfo>>> {
        if let Some(cache) = self.token_cache.read().await.as_ref() {
            if cache.last_refresh.elapsed() < TOKEN_LIST_TTL {
                return Ok(Arc::clone(&cache.tokens));
            }
        }

        let tokens = Arc::new(self.fetch_strict_token_list().await?);
        *self.token_cache.write().await = Some(TokenCache {
            tokens: Arc::clone(&tokens),
            last_refresh: Instant::now(),
        });
        info!("Strict token list cached ({} tokens)", tokens.len());
        Ok(tokens)
    }

    /// Fetch the strict token list directly, bypassing the memo.
    pub async fn fetch_strict_token_list(&self) -> Result<Vec<TokenInfo>> {
        let url = format!("{}/strict", self.token_api_base);
        debug!("Jupiter token list request: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::http(None, format!("Jupiter token list request failed: {e}")))?;
        let response = ensure_success(response, "Jupiter token list").await?;

        response
            .json()
            .await
            .map_err(|e| AppError::InvalidResponse(format!("Jupiter token list parse failed: {e}")))
    }
}

/// Turn a non-2xx response into a tagged HTTP error carrying the body.
pub(crate) async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::http(
        Some(status.as_u16()),
        format!("{what} failed with status {status}: {body}"),
    ))
}
