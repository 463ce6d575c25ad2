//! # Portfolio Handlers
//!
//! Keeps the portfolio poller in line with the route, the wallet and the
//! active service set, and applies its results.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Loadable, PortfolioTarget};
use crate::app::tasks::portfolio::{start_poller, PollerGuard};
use async_channel::Sender;
use lib_core::dto::PortfolioSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Start, restart or stop the poller so it matches the current state.
pub(crate) fn reconcile_poller(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    poller: &mut Option<PollerGuard>,
) {
    let mut guard = state.write();
    match guard.portfolio_target() {
        PortfolioTarget::Owner(owner) => {
            let generation = guard.services.generation;
            if poller.as_ref().is_some_and(|p| p.serves(&owner, generation)) {
                return;
            }
            guard.portfolio.owner = Some(owner.to_string());
            guard.portfolio.view = Loadable::Loading;
            let services = guard.services.clone();
            drop(guard);
            *poller = Some(start_poller(services, owner, event_tx.clone()));
        }
        PortfolioTarget::Invalid => {
            *poller = None;
            guard.portfolio.owner = None;
            guard.portfolio.view = Loadable::Failed("Invalid wallet address".to_string());
        }
        PortfolioTarget::None => {
            if poller.take().is_some() {
                guard.portfolio.owner = None;
                guard.portfolio.view = Loadable::Idle;
            }
        }
    }
}

/// Apply a poll result if it still belongs to the shown owner and services.
pub(crate) fn handle_portfolio_loaded(
    state: &Arc<RwLock<AppState>>,
    owner: String,
    generation: u64,
    result: Result<PortfolioSnapshot, String>,
) {
    let mut guard = state.write();
    if guard.portfolio.owner.as_deref() != Some(owner.as_str()) || guard.services.generation != generation {
        debug!("Dropping portfolio result for {} (generation {})", owner, generation);
        return;
    }
    guard.portfolio.view = match result {
        Ok(snapshot) => Loadable::Loaded(snapshot),
        Err(message) => Loadable::Failed(message),
    };
}
