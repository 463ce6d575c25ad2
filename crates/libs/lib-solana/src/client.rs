//! # Solana RPC Client
//!
//! A thin wrapper around the nonblocking `solana_client` RPC client that
//! implements [`RpcGateway`].
//!
//! ## RPC Endpoints
//!
//! The URL comes from the user's [`RpcEndpoint`] choice:
//!
//! - **Helius**: `https://mainnet.helius-rpc.com/?api-key={key}`, the default
//! - **Mainnet**: `https://api.mainnet-beta.solana.com`, rate limited and may answer 403
//! - **Devnet**: `https://api.devnet.solana.com`, the only cluster that honours airdrops
//!
//! A new client is built whenever the endpoint changes; existing clients are
//! never mutated.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_core::{Config, RpcEndpoint};
//! use lib_solana::client::SolanaClient;
//! use lib_solana::rpc::RpcGateway;
//! use solana_sdk::pubkey::Pubkey;
//! use std::str::FromStr;
//!
//! # async fn example() -> lib_core::Result<()> {
//! let config = Config::new("your-helius-api-key");
//! let client = SolanaClient::for_endpoint(&RpcEndpoint::Helius, &config);
//!
//! let owner = Pubkey::from_str("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL")
//!     .map_err(|e| lib_core::AppError::InvalidInput(e.to_string()))?;
//! let lamports = client.get_balance(&owner).await?;
//! println!("Balance: {} SOL", lamports as f64 / 1e9);
//! # Ok(())
//! # }
//! ```

use crate::rpc::{parse_token_account, AccountSnapshot, ParsedTokenAccount, RpcGateway, SimulationFailure, SimulationOutcome};
use async_trait::async_trait;
use lib_core::{AppError, Config, Result, RpcEndpoint};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// SPL Token program (Tokenkeg).
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// SPL Token-2022 program.
pub const TOKEN_2022_PROGRAM_ID: Pubkey = Pubkey::from_str_const("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

const AIRDROP_CONFIRM_ATTEMPTS: u32 = 30;
const AIRDROP_CONFIRM_INTERVAL: Duration = Duration::from_secs(1);

/// Solana JSON-RPC client bound to one endpoint.
#[derive(Clone)]
pub struct SolanaClient {
    rpc: Arc<RpcClient>,
    url: String,
}

impl SolanaClient {
    /// Create a client for an explicit URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            rpc: Arc::new(RpcClient::new(url.clone())),
            url,
        }
    }

    /// Create a client for the user's endpoint choice.
    pub fn for_endpoint(endpoint: &RpcEndpoint, config: &Config) -> Self {
        info!("Connecting to Solana RPC: {}", endpoint.label());
        Self::new(endpoint.url(config))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Tag a client error, flagging 403 responses.
fn rpc_error(context: &str, err: ClientError) -> AppError {
    let forbidden = match err.kind() {
        ClientErrorKind::Reqwest(e) => e.status().map(|s| s.as_u16()) == Some(403),
        _ => false,
    };
    AppError::Rpc {
        message: format!("{context}: {err}"),
        forbidden,
    }
}

#[async_trait]
impl RpcGateway for SolanaClient {
    #[instrument(skip(self), fields(owner = %owner))]
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64> {
        self.rpc
            .get_balance(owner)
            .await
            .map_err(|e| rpc_error("Failed to fetch SOL balance", e))
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn get_token_accounts(&self, owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
        let keyed = self
            .rpc
            .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(TOKEN_PROGRAM_ID))
            .await
            .map_err(|e| rpc_error("Failed to fetch token accounts", e))?;

        let mut accounts = Vec::with_capacity(keyed.len());
        for entry in keyed {
            let data = serde_json::to_value(&entry.account.data)?;
            match parse_token_account(&entry.pubkey, &data) {
                Some(account) => accounts.push(account),
                None => debug!("Skipping unparsed token account {}", entry.pubkey),
            }
        }
        debug!("Found {} token accounts", accounts.len());
        Ok(accounts)
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>> {
        let response = self
            .rpc
            .get_account_with_commitment(address, self.rpc.commitment())
            .await
            .map_err(|e| rpc_error("Failed to fetch account", e))?;

        Ok(response.value.map(|account| AccountSnapshot {
            lamports: account.lamports,
            owner: account.owner,
            data: account.data,
        }))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| rpc_error("Failed to fetch blockhash", e))
    }

    #[instrument(skip_all)]
    async fn simulate(&self, transaction: &VersionedTransaction) -> Result<SimulationOutcome> {
        let response = self
            .rpc
            .simulate_transaction(transaction)
            .await
            .map_err(|e| rpc_error("Simulation request failed", e))?;

        let result = response.value;
        let error = match &result.err {
            Some(err) => Some(SimulationFailure::from_json(&serde_json::to_value(err)?)),
            None => None,
        };
        if let Some(failure) = &error {
            warn!("Simulation reported error: {}", failure.detail);
        }

        Ok(SimulationOutcome {
            error,
            logs: result.logs.unwrap_or_default(),
            units_consumed: result.units_consumed,
        })
    }

    #[instrument(skip_all)]
    async fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        let signature = self
            .rpc
            .send_and_confirm_transaction(transaction)
            .await
            .map_err(|e| rpc_error("Transaction submission failed", e))?;
        info!("Transaction confirmed: {}", signature);
        Ok(signature)
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn request_airdrop(&self, owner: &Pubkey, lamports: u64) -> Result<Signature> {
        let signature = self
            .rpc
            .request_airdrop(owner, lamports)
            .await
            .map_err(|e| rpc_error("Airdrop request failed", e))?;

        for _ in 0..AIRDROP_CONFIRM_ATTEMPTS {
            let confirmed = self
                .rpc
                .confirm_transaction(&signature)
                .await
                .map_err(|e| rpc_error("Airdrop confirmation failed", e))?;
            if confirmed {
                info!("Airdrop of {} lamports confirmed: {}", lamports, signature);
                return Ok(signature);
            }
            tokio::time::sleep(AIRDROP_CONFIRM_INTERVAL).await;
        }

        Err(AppError::rpc(format!("Airdrop {signature} was not confirmed in time")))
    }
}
