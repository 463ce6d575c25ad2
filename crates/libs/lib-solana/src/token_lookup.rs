//! # Token Lookup
//!
//! Resolves a mint address to its strict-list entry for the token page.

use crate::client::{TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::jupiter::{AggregatorApi, TokenInfo};
use crate::rpc::RpcGateway;
use lib_core::AppError;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use thiserror::Error;
use tracing::{instrument, warn};

/// Lookup failures. The `Display` text is what the token page shows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    #[error("Invalid token address")]
    InvalidAddress,

    #[error("Not a valid token")]
    NotAToken,

    #[error("Failed to fetch token list")]
    ListUnavailable(#[source] AppError),

    #[error("Token not found")]
    NotFound,

    #[error("Failed to load token: {}", .0.user_message())]
    Rpc(#[source] AppError),
}

/// Resolve `address` to its strict-list entry.
///
/// The account must exist and be owned by one of the SPL token programs
/// before the list is consulted.
#[instrument(skip(rpc, aggregator))]
pub async fn lookup_token(
    rpc: &dyn RpcGateway,
    aggregator: &dyn AggregatorApi,
    address: &str,
) -> Result<TokenInfo, LookupError> {
    let mint = Pubkey::from_str(address.trim()).map_err(|_| LookupError::InvalidAddress)?;

    let account = rpc
        .get_account(&mint)
        .await
        .map_err(LookupError::Rpc)?
        .ok_or(LookupError::NotAToken)?;
    if account.owner != TOKEN_PROGRAM_ID && account.owner != TOKEN_2022_PROGRAM_ID {
        warn!("Account {} is owned by {}, not a token program", mint, account.owner);
        return Err(LookupError::NotAToken);
    }

    let tokens = aggregator.strict_tokens().await.map_err(|e| {
        warn!("Token list unavailable: {}", e);
        LookupError::ListUnavailable(e)
    })?;

    let mint = mint.to_string();
    tokens
        .iter()
        .find(|token| token.address == mint)
        .cloned()
        .ok_or(LookupError::NotFound)
}
