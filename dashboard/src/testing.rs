//! Fakes for the service traits used by the dashboard's own tests.

use crate::services::ServiceSet;
use async_trait::async_trait;
use lib_core::dto::QuoteRequest;
use lib_core::{AppError, Result, RpcEndpoint};
use lib_solana::jupiter::{AggregatorApi, QuoteResponse, SwapOptions, SwapTransactionResponse, TokenInfo};
use lib_solana::rpc::{AccountSnapshot, ParsedTokenAccount, RpcGateway, SimulationOutcome};
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// RPC fake that counts calls and reports an empty wallet.
#[derive(Default)]
pub struct CountingRpc {
    pub calls: AtomicUsize,
    pub airdrop_error: Mutex<Option<AppError>>,
}

impl CountingRpc {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RpcGateway for CountingRpc {
    async fn get_balance(&self, _owner: &Pubkey) -> Result<u64> {
        self.hit();
        Ok(0)
    }

    async fn get_token_accounts(&self, _owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>> {
        self.hit();
        Ok(Vec::new())
    }

    async fn get_account(&self, _address: &Pubkey) -> Result<Option<AccountSnapshot>> {
        self.hit();
        Ok(None)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        self.hit();
        Ok(Hash::default())
    }

    async fn simulate(&self, _transaction: &VersionedTransaction) -> Result<SimulationOutcome> {
        self.hit();
        Ok(SimulationOutcome::default())
    }

    async fn send_and_confirm(&self, _transaction: &VersionedTransaction) -> Result<Signature> {
        self.hit();
        Ok(Signature::default())
    }

    async fn request_airdrop(&self, _owner: &Pubkey, _lamports: u64) -> Result<Signature> {
        self.hit();
        match self.airdrop_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(Signature::default()),
        }
    }
}

/// Aggregator fake answering quotes with a fixed `outAmount`.
#[derive(Default)]
pub struct StubAggregator {
    pub quote: Mutex<Option<Result<QuoteResponse>>>,
    pub quote_calls: AtomicUsize,
}

impl StubAggregator {
    pub fn answering(out_amount: &str) -> Self {
        let response = QuoteResponse {
            input_mint: String::new(),
            output_mint: String::new(),
            in_amount: String::new(),
            out_amount: out_amount.to_string(),
            price_impact_pct: Some("0.01".to_string()),
            route_plan: vec![serde_json::json!({ "swapInfo": { "label": "Orca" } })],
            extra: serde_json::Map::new(),
        };
        Self { quote: Mutex::new(Some(Ok(response))), ..Self::default() }
    }

    pub fn failing(err: AppError) -> Self {
        Self { quote: Mutex::new(Some(Err(err))), ..Self::default() }
    }
}

#[async_trait]
impl AggregatorApi for StubAggregator {
    async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResponse> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);
        let mut response = self
            .quote
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(AppError::http(None, "no quote configured")))?;
        response.input_mint = request.input.mint.clone();
        response.output_mint = request.output.mint.clone();
        response.in_amount = request.amount_units.to_string();
        Ok(response)
    }

    async fn swap_transaction(
        &self,
        _quote: &QuoteResponse,
        _user_public_key: &str,
        _options: &SwapOptions,
    ) -> Result<SwapTransactionResponse> {
        Err(AppError::http(None, "swap not configured"))
    }

    async fn price(&self, _mint: &str) -> f64 {
        0.0
    }

    async fn strict_tokens(&self) -> Result<Arc<Vec<TokenInfo>>> {
        Ok(Arc::new(Vec::new()))
    }
}

pub fn service_set(rpc: Arc<CountingRpc>, aggregator: Arc<StubAggregator>, endpoint: RpcEndpoint) -> ServiceSet {
    ServiceSet::from_parts(endpoint, rpc, aggregator, 0)
}

/// A fresh state on Devnet backed by the given fakes.
pub fn app_state(rpc: Arc<CountingRpc>, aggregator: Arc<StubAggregator>) -> crate::app::AppState {
    let settings = Arc::new(crate::app::Settings::default().with_endpoint(RpcEndpoint::Devnet));
    crate::app::AppState::new(settings, service_set(rpc, aggregator, RpcEndpoint::Devnet), 50)
}
