//! # Event Handler
//!
//! Applies [`AppEvent`]s from background tasks to the state. Each event takes
//! the write lock on its own, for as long as the update needs.

use crate::app::events::AppEvent;
use crate::app::handlers;
use crate::app::state::{Loadable, Notice};
use crate::app::App;
use lib_core::dto::TokenRef;
use tracing::{debug, warn};

impl App {
    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::QuoteResult { seq, result } => {
                handlers::exchange::handle_quote_result(&self.state, seq, result);
            }
            AppEvent::TokenListLoaded(result) => {
                let mut state = self.state.write();
                match result {
                    Ok(tokens) => state.exchange.tokens.merge(tokens.iter().cloned().map(TokenRef::from)),
                    Err(e) => state.notify(Notice::Error(format!("Failed to fetch token list: {e}"))),
                }
            }
            AppEvent::PortfolioLoaded { owner, generation, result } => {
                handlers::portfolio::handle_portfolio_loaded(&self.state, owner, generation, result);
            }
            AppEvent::TokenLookup { address, result } => {
                let mut state = self.state.write();
                if state.token_page.address != address {
                    debug!("Dropping lookup for {}", address);
                    return;
                }
                state.token_page.view = match result {
                    Ok(token) => Loadable::Loaded(token),
                    Err(e) => Loadable::Failed(e.to_string()),
                };
            }
            AppEvent::SwapFinished(result) => {
                handlers::exchange::handle_swap_finished(&self.state, result);
            }
            AppEvent::AirdropFinished(result) => {
                handlers::wallet::handle_airdrop_finished(&self.state, result);
            }
            AppEvent::SignatureRequested(request) => {
                let mut state = self.state.write();
                if let Some(previous) = state.pending_approval.replace(request) {
                    warn!("Superseded pending approval: {}", previous.summary);
                }
            }
        }
    }
}
