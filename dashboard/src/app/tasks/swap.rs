//! # Swap Task
//!
//! Runs the swap pipeline in the background. Signing goes through
//! [`ApprovalSigner`], which asks the UI for the user's consent first.

use crate::app::events::AppEvent;
use crate::app::state::ApprovalRequest;
use crate::services::wallet::{WalletAdapter, WalletError};
use crate::services::ServiceSet;
use async_channel::Sender;
use async_trait::async_trait;
use lib_core::dto::QuoteRequest;
use lib_solana::{SignerError, TransactionSigner};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::VersionedTransaction;
use std::sync::Arc;
use tokio::spawn;
use tokio::sync::oneshot;
use tracing::{error, info};

/// Signs with the connected wallet once the user approves in the UI.
pub(crate) struct ApprovalSigner {
    wallet: Arc<dyn WalletAdapter>,
    event_tx: Sender<AppEvent>,
    summary: String,
}

impl ApprovalSigner {
    pub(crate) fn new(wallet: Arc<dyn WalletAdapter>, event_tx: Sender<AppEvent>, summary: String) -> Self {
        Self { wallet, event_tx, summary }
    }
}

#[async_trait]
impl TransactionSigner for ApprovalSigner {
    fn pubkey(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    async fn sign_transaction(&self, transaction: VersionedTransaction) -> Result<VersionedTransaction, SignerError> {
        let (respond, answer) = oneshot::channel();
        let request = ApprovalRequest { summary: self.summary.clone(), respond };
        self.event_tx
            .send(AppEvent::SignatureRequested(request))
            .await
            .map_err(|_| SignerError::Unavailable("UI is gone".to_string()))?;

        // A dropped sender counts as a rejection.
        if !answer.await.unwrap_or(false) {
            info!("Signature request declined");
            return Err(SignerError::Rejected);
        }

        self.wallet.sign(transaction).map_err(|e| match e {
            WalletError::Rejected => SignerError::Rejected,
            WalletError::WatchOnly | WalletError::NoWallet => SignerError::Unavailable(e.to_string()),
            other => SignerError::Failed(other.to_string()),
        })
    }
}

/// Spawn the swap pipeline for `request`.
pub(crate) fn execute_swap(
    services: ServiceSet,
    request: QuoteRequest,
    wallet: Arc<dyn WalletAdapter>,
    event_tx: Sender<AppEvent>,
) {
    let summary = format!("Swap {} {} for {}", request.amount, request.input.symbol, request.output.symbol);
    spawn(async move {
        let signer = ApprovalSigner::new(wallet, event_tx.clone(), summary);
        let result = services.swap_executor().execute(&request, &signer).await;
        match &result {
            Ok(receipt) => info!("Swap confirmed: {}", receipt.signature),
            Err(e) => error!("Swap failed: {}", e),
        }
        let _ = event_tx.send(AppEvent::SwapFinished(result)).await;
    });
}
