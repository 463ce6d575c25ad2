//! In-memory fakes for the service traits.

use crate::jupiter::{AggregatorApi, QuoteResponse, SwapOptions, SwapTransactionResponse, TokenInfo};
use crate::rpc::{AccountSnapshot, ParsedTokenAccount, RpcGateway, SimulationOutcome};
use crate::swap::{SignerError, TransactionSigner};
use async_trait::async_trait;
use lib_core::dto::QuoteRequest;
use lib_core::{AppError, Result};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::VersionedTransaction;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// region: --- MockRpc

#[derive(Default)]
pub struct MockRpc {
    pub balance: Mutex<u64>,
    pub balance_error: Mutex<Option<AppError>>,
    pub token_accounts: Mutex<Vec<ParsedTokenAccount>>,
    pub accounts: Mutex<HashMap<Pubkey, AccountSnapshot>>,
    pub blockhash: Mutex<Hash>,
    pub simulation: Mutex<SimulationOutcome>,
    pub sent: Mutex<Vec<VersionedTransaction>>,
    pub balance_calls: AtomicUsize,
    pub token_account_calls: AtomicUsize,
}

impl MockRpc {
    pub fn with_balance(lamports: u64) -> Self {
        let rpc = Self::default();
        *rpc.balance.lock().unwrap() = lamports;
        rpc
    }

    pub fn insert_account(&self, address: Pubkey, account: AccountSnapshot) {
        self.accounts.lock().unwrap().insert(address, account);
    }

    pub fn push_token_account(&self, mint: &str, ui_amount: f64, decimals: u8) {
        let amount = (ui_amount * 10f64.powi(i32::from(decimals))) as u64;
        self.token_accounts.lock().unwrap().push(ParsedTokenAccount {
            address: Pubkey::new_unique().to_string(),
            mint: mint.to_string(),
            owner: Pubkey::new_unique().to_string(),
            amount,
            decimals,
            ui_amount,
        });
    }

    pub fn rpc_calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst) + self.token_account_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcGateway for MockRpc {
    async fn get_balance(&self, _owner: &Pubkey) -> Result<u64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.balance_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(*self.balance.lock().unwrap())
    }

    async fn get_token_accounts(&self, _owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
        self.token_account_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token_accounts.lock().unwrap().clone())
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>> {
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(*self.blockhash.lock().unwrap())
    }

    async fn simulate(&self, _transaction: &VersionedTransaction) -> Result<SimulationOutcome> {
        Ok(self.simulation.lock().unwrap().clone())
    }

    async fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures.first().copied().unwrap_or_default())
    }

    async fn request_airdrop(&self, _owner: &Pubkey, _lamports: u64) -> Result<Signature> {
        Ok(Signature::new_unique())
    }
}

// endregion: --- MockRpc

// region: --- MockAggregator

#[derive(Default)]
pub struct MockAggregator {
    pub quote: Mutex<Option<QuoteResponse>>,
    pub quote_error: Mutex<Option<AppError>>,
    pub swap_transaction: Mutex<Option<String>>,
    pub prices: Mutex<HashMap<String, f64>>,
    pub tokens: Mutex<Option<Vec<TokenInfo>>>,
    pub quote_calls: AtomicUsize,
    pub swap_calls: AtomicUsize,
    pub last_swap_options: Mutex<Option<SwapOptions>>,
}

impl MockAggregator {
    pub fn set_out_amount(&self, input: &str, output: &str, in_amount: u64, out_amount: u64) {
        let quote = serde_json::from_value(serde_json::json!({
            "inputMint": input,
            "outputMint": output,
            "inAmount": in_amount.to_string(),
            "outAmount": out_amount.to_string(),
            "priceImpactPct": "0.01",
            "routePlan": [{ "swapInfo": { "label": "Whirlpool" }, "percent": 100 }]
        }));
        *self.quote.lock().unwrap() = quote.ok();
    }

    pub fn set_price(&self, mint: &str, price: f64) {
        self.prices.lock().unwrap().insert(mint.to_string(), price);
    }
}

#[async_trait]
impl AggregatorApi for MockAggregator {
    async fn quote(&self, _request: &QuoteRequest) -> Result<QuoteResponse> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.quote_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.quote
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::InvalidResponse("missing outAmount".to_string()))
    }

    async fn swap_transaction(
        &self,
        _quote: &QuoteResponse,
        _user_public_key: &str,
        options: &SwapOptions,
    ) -> Result<SwapTransactionResponse> {
        self.swap_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_swap_options.lock().unwrap() = Some(options.clone());
        let swap_transaction = self
            .swap_transaction
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::http(Some(500), "no swap transaction"))?;
        Ok(SwapTransactionResponse {
            swap_transaction,
            last_valid_block_height: None,
            prioritization_fee_lamports: None,
        })
    }

    async fn price(&self, mint: &str) -> f64 {
        self.prices.lock().unwrap().get(mint).copied().unwrap_or(0.0)
    }

    async fn strict_tokens(&self) -> Result<Arc<Vec<TokenInfo>>> {
        self.tokens
            .lock()
            .unwrap()
            .clone()
            .map(Arc::new)
            .ok_or_else(|| AppError::http(Some(503), "token list down"))
    }
}

// endregion: --- MockAggregator

// region: --- Signers

pub struct KeypairSigner(pub Keypair);

#[async_trait]
impl TransactionSigner for KeypairSigner {
    fn pubkey(&self) -> Pubkey {
        self.0.pubkey()
    }

    async fn sign_transaction(
        &self,
        transaction: VersionedTransaction,
    ) -> std::result::Result<VersionedTransaction, SignerError> {
        VersionedTransaction::try_new(transaction.message, &[&self.0]).map_err(|e| SignerError::Failed(e.to_string()))
    }
}

pub struct RejectingSigner(pub Pubkey);

#[async_trait]
impl TransactionSigner for RejectingSigner {
    fn pubkey(&self) -> Pubkey {
        self.0
    }

    async fn sign_transaction(
        &self,
        _transaction: VersionedTransaction,
    ) -> std::result::Result<VersionedTransaction, SignerError> {
        Err(SignerError::Rejected)
    }
}

// endregion: --- Signers
