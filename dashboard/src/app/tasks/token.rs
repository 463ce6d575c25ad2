//! # Token Tasks
//!
//! Token page lookups and the strict list that feeds the token picker.

use crate::app::events::AppEvent;
use crate::services::ServiceSet;
use async_channel::Sender;
use tokio::spawn;
use tracing::{info, warn};

/// Resolve `address` for the token page.
pub(crate) fn lookup(services: ServiceSet, address: String, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = lib_solana::lookup_token(services.rpc.as_ref(), services.aggregator.as_ref(), &address).await;
        if let Err(e) = &result {
            warn!("Token lookup for {} failed: {}", address, e);
        }
        let _ = event_tx.send(AppEvent::TokenLookup { address, result }).await;
    });
}

/// Fetch the strict list for the picker.
pub(crate) fn fetch_token_list(services: ServiceSet, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = services.aggregator.strict_tokens().await.map_err(|e| e.to_string());
        match &result {
            Ok(tokens) => info!("Token list loaded: {} tokens", tokens.len()),
            Err(e) => warn!("Token list unavailable: {}", e),
        }
        let _ = event_tx.send(AppEvent::TokenListLoaded(result)).await;
    });
}
