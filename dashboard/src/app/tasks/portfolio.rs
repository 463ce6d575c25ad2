//! # Portfolio Poller
//!
//! Fetches the portfolio immediately, then every [`POLL_INTERVAL`]. The task
//! is owned by a [`PollerGuard`]; dropping the guard stops polling.

use crate::app::events::AppEvent;
use crate::services::ServiceSet;
use async_channel::Sender;
use lib_core::AppError;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Owns a running poller and aborts it on drop.
#[derive(Debug)]
pub struct PollerGuard {
    owner: Pubkey,
    generation: u64,
    handle: JoinHandle<()>,
}

impl PollerGuard {
    /// True when this poller serves `owner` with the service set of `generation`.
    pub fn serves(&self, owner: &Pubkey, generation: u64) -> bool {
        self.owner == *owner && self.generation == generation
    }
}

impl Drop for PollerGuard {
    fn drop(&mut self) {
        debug!("Stopping portfolio poller for {}", self.owner);
        self.handle.abort();
    }
}

/// Start polling `owner`.
pub(crate) fn start_poller(services: ServiceSet, owner: Pubkey, event_tx: Sender<AppEvent>) -> PollerGuard {
    let generation = services.generation;
    let handle = tokio::spawn(async move {
        let portfolio = services.portfolio();
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            ticker.tick().await;
            let result = portfolio.fetch(&owner).await.map_err(|e| describe_error(&e));
            let event = AppEvent::PortfolioLoaded { owner: owner.to_string(), generation, result };
            if event_tx.send(event).await.is_err() {
                break;
            }
        }
    });
    debug!("Started portfolio poller for {} (generation {})", owner, generation);
    PollerGuard { owner, generation, handle }
}

/// Text shown in place of the table when a fetch fails.
pub(crate) fn describe_error(err: &AppError) -> String {
    warn!("Portfolio fetch failed: {}", err);
    if err.is_forbidden() {
        err.user_message()
    } else {
        format!("Failed to load portfolio: {}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{service_set, CountingRpc, StubAggregator};
    use async_channel::unbounded;
    use lib_core::RpcEndpoint;
    use std::sync::Arc;

    #[test]
    fn test_error_messages() {
        let forbidden = AppError::Rpc { message: "403 Forbidden".into(), forbidden: true };
        assert_eq!(
            describe_error(&forbidden),
            "Access to Solana RPC is restricted (403 Forbidden). Switch to a private RPC such as Helius."
        );
        assert_eq!(describe_error(&AppError::rpc("timeout")), "Failed to load portfolio: RPC error: timeout");
    }

    #[tokio::test]
    async fn test_poller_reports_and_stops_on_drop() {
        let rpc = Arc::new(CountingRpc::default());
        let services = service_set(Arc::clone(&rpc), Arc::new(StubAggregator::default()), RpcEndpoint::Devnet);
        let owner = Pubkey::new_unique();
        let (tx, rx) = unbounded();

        let guard = start_poller(services, owner, tx);
        assert!(guard.serves(&owner, 0));
        assert!(!guard.serves(&owner, 1));

        match rx.recv().await.unwrap() {
            AppEvent::PortfolioLoaded { owner: reported, result, .. } => {
                assert_eq!(reported, owner.to_string());
                let snapshot = result.unwrap();
                assert_eq!(snapshot.entries.len(), 1, "SOL row only");
            }
            other => panic!("unexpected event {:?}", other),
        }

        drop(guard);
        tokio::task::yield_now().await;
        let calls = rpc.calls();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(rpc.calls(), calls);
    }
}
