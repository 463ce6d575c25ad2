//! # Swap Executor
//!
//! The linear swap pipeline: balance check, fresh quote, swap build, decode,
//! lookup table resolution, blockhash and fee payer, simulation, signing,
//! submission. Any failing step ends the run; nothing is retried or rolled
//! back.

use super::error::{SwapError, SwapResult};
use super::lookup_table::resolve_lookup_tables;
use super::signer::TransactionSigner;
use crate::jupiter::{AggregatorApi, SwapOptions};
use crate::rpc::RpcGateway;
use lib_core::dto::QuoteRequest;
use lib_utils::b64_decode;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, VersionedTransaction};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Lamports required to cover fees and rent for a swap (0.002 SOL).
pub const MIN_FEE_BALANCE_LAMPORTS: u64 = 2_000_000;

/// Outcome of a confirmed swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReceipt {
    pub signature: Signature,
    /// Base units sent.
    pub in_amount: u64,
    /// Base units quoted to arrive.
    pub out_amount: u64,
}

pub struct SwapExecutor {
    rpc: Arc<dyn RpcGateway>,
    aggregator: Arc<dyn AggregatorApi>,
    options: SwapOptions,
}

impl SwapExecutor {
    pub fn new(rpc: Arc<dyn RpcGateway>, aggregator: Arc<dyn AggregatorApi>) -> Self {
        Self { rpc, aggregator, options: SwapOptions::default() }
    }

    pub fn with_options(mut self, options: SwapOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the pipeline for `request`, signing with `signer`.
    #[instrument(skip_all, fields(input = %request.input.symbol, output = %request.output.symbol, amount = request.amount_units))]
    pub async fn execute(&self, request: &QuoteRequest, signer: &dyn TransactionSigner) -> SwapResult<SwapReceipt> {
        let wallet = signer.pubkey();

        let balance = self.rpc.get_balance(&wallet).await?;
        if balance < MIN_FEE_BALANCE_LAMPORTS {
            warn!("Balance {} lamports below fee minimum", balance);
            return Err(SwapError::InsufficientFunds { balance });
        }

        let quote = self.aggregator.quote(request).await?;
        let in_amount = parse_units(&quote.in_amount, "inAmount")?;
        let out_amount = parse_units(&quote.out_amount, "outAmount")?;
        debug!("Fresh quote: {} -> {}", in_amount, out_amount);

        let built = self
            .aggregator
            .swap_transaction(&quote, &wallet.to_string(), &self.options)
            .await?;
        let mut transaction = decode_transaction(&built.swap_transaction)?;

        let tables = resolve_lookup_tables(self.rpc.as_ref(), &transaction.message).await?;
        debug!("{} lookup tables resolved", tables.len());

        let blockhash = self.rpc.get_latest_blockhash().await?;
        transaction.message.set_recent_blockhash(blockhash);

        let fee_payer = transaction.message.static_account_keys().first().copied();
        if fee_payer != Some(wallet) {
            return Err(SwapError::FeePayerMismatch {
                expected: wallet.to_string(),
                found: fee_payer.map(|k| k.to_string()).unwrap_or_else(|| "none".to_string()),
            });
        }

        let simulation = self.rpc.simulate(&transaction).await?;
        if let Some(failure) = simulation.error {
            for line in &simulation.logs {
                debug!("sim: {}", line);
            }
            return Err(SwapError::Simulation {
                unsupported_instruction: failure.instruction_error,
                detail: failure.detail,
                logs: simulation.logs,
            });
        }
        debug!("Simulation ok ({:?} units)", simulation.units_consumed);

        let signed = signer.sign_transaction(transaction).await?;
        let signature = self.rpc.send_and_confirm(&signed).await?;

        info!("Swap confirmed: {}", signature);
        Ok(SwapReceipt { signature, in_amount, out_amount })
    }
}

fn parse_units(raw: &str, field: &str) -> SwapResult<u64> {
    raw.parse()
        .map_err(|_| SwapError::InvalidResponse(format!("{field} '{raw}' is not an integer")))
}

/// Decode a base64 swap payload into a versioned transaction.
///
/// Legacy payloads are converted.
pub fn decode_transaction(payload: &str) -> SwapResult<VersionedTransaction> {
    let bytes = b64_decode(payload).map_err(|e| SwapError::Decode(e.to_string()))?;

    match bincode::deserialize::<VersionedTransaction>(&bytes) {
        Ok(transaction) => Ok(transaction),
        Err(versioned_err) => {
            let legacy: Transaction = bincode::deserialize(&bytes)
                .map_err(|e| SwapError::Decode(format!("{versioned_err}; as legacy: {e}")))?;
            Ok(VersionedTransaction::from(legacy))
        }
    }
}
