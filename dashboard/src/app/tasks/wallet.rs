//! # Wallet Tasks

use crate::app::events::AppEvent;
use crate::services::ServiceSet;
use async_channel::Sender;
use lib_core::dto::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use tokio::spawn;
use tracing::{info, warn};

/// Test SOL requested per airdrop.
pub const AIRDROP_LAMPORTS: u64 = 2 * LAMPORTS_PER_SOL;

/// Request test SOL for `owner`. Callers check the endpoint is Devnet.
pub(crate) fn request_airdrop(services: ServiceSet, owner: Pubkey, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = services.rpc.request_airdrop(&owner, AIRDROP_LAMPORTS).await.map_err(|e| {
            warn!("Airdrop to {} failed: {}", owner, e);
            e.to_string()
        });
        if let Ok(signature) = &result {
            info!("Airdrop confirmed: {}", signature);
        }
        let _ = event_tx.send(AppEvent::AirdropFinished(result)).await;
    });
}
