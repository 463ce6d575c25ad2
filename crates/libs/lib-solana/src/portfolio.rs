//! # Portfolio
//!
//! Assembles a wallet's holdings: the native SOL row, then one row per SPL
//! token account with a positive balance, each enriched with display metadata
//! and a USD price.

use crate::jupiter::AggregatorApi;
use crate::metadata::fetch_metadata;
use crate::rpc::{ParsedTokenAccount, RpcGateway};
use futures::future::join_all;
use lib_core::dto::{find_known_by_mint, PortfolioEntry, PortfolioSnapshot, LAMPORTS_PER_SOL, SOL_MINT};
use lib_core::Result;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Builds [`PortfolioSnapshot`]s from the RPC node and the price API.
#[derive(Clone)]
pub struct PortfolioService {
    rpc: Arc<dyn RpcGateway>,
    aggregator: Arc<dyn AggregatorApi>,
}

impl PortfolioService {
    pub fn new(rpc: Arc<dyn RpcGateway>, aggregator: Arc<dyn AggregatorApi>) -> Self {
        Self { rpc, aggregator }
    }

    /// Fetch the current holdings of `owner`.
    ///
    /// Balance and token account failures abort the fetch; metadata and price
    /// failures only degrade the affected row.
    #[instrument(skip(self), fields(owner = %owner))]
    pub async fn fetch(&self, owner: &Pubkey) -> Result<PortfolioSnapshot> {
        let lamports = self.rpc.get_balance(owner).await?;
        let accounts = self.rpc.get_token_accounts(owner).await?;
        debug!("{} lamports, {} token accounts", lamports, accounts.len());

        let sol_amount = lamports as f64 / LAMPORTS_PER_SOL as f64;
        let sol_price = self.aggregator.price(SOL_MINT).await;
        let mut entries = vec![PortfolioEntry::new(SOL_MINT, "SOL", "Solana", sol_amount, sol_price)];

        let rows = join_all(
            accounts
                .iter()
                .filter(|account| account.ui_amount > 0.0)
                .map(|account| self.token_row(account)),
        )
        .await;
        entries.extend(rows.into_iter().flatten());

        info!("Portfolio loaded: {} entries", entries.len());
        Ok(PortfolioSnapshot::new(owner.to_string(), entries))
    }

    /// `None` when the token is neither known nor carries valid metadata.
    async fn token_row(&self, account: &ParsedTokenAccount) -> Option<PortfolioEntry> {
        let (symbol, name) = match find_known_by_mint(&account.mint) {
            Some(known) => (known.symbol, known.name),
            None => {
                let mint = match Pubkey::from_str(&account.mint) {
                    Ok(mint) => mint,
                    Err(e) => {
                        warn!("Skipping token account with bad mint {}: {}", account.mint, e);
                        return None;
                    }
                };
                let metadata = fetch_metadata(self.rpc.as_ref(), &mint).await;
                if !metadata.has_valid {
                    debug!("Skipping {}: no valid metadata", account.mint);
                    return None;
                }
                (metadata.symbol, metadata.name)
            }
        };

        let price = self.aggregator.price(&account.mint).await;
        Some(PortfolioEntry::new(account.mint.clone(), symbol, name, account.ui_amount, price))
    }
}
