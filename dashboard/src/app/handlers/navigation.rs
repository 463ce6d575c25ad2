//! # Navigation Handlers
//!
//! Route changes and the nav bar search box.

use crate::app::events::AppEvent;
use crate::app::route::Route;
use crate::app::state::{AppState, Loadable};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Switch to `route`, starting whatever load it needs.
///
/// The portfolio poller is reconciled separately every frame, so only the
/// token page is kicked off here.
pub(crate) fn handle_navigate(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, route: Route) {
    let mut guard = state.write();
    if guard.route == route {
        return;
    }
    info!("Navigating {} -> {}", guard.route, route);
    guard.route = route.clone();

    if let Route::Token(address) = route {
        guard.token_page.address = address.clone();
        guard.token_page.view = Loadable::Loading;
        let services = guard.services.clone();
        drop(guard);
        tasks::token::lookup(services, address, event_tx.clone());
    }
}

/// Open the token page for the search box contents.
pub(crate) fn handle_search(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let route = {
        let mut guard = state.write();
        let route = Route::token_search(&guard.search);
        if route.is_some() {
            guard.search.clear();
        }
        route
    };
    if let Some(route) = route {
        handle_navigate(state, event_tx, route);
    }
}
