//! # Wallet Handlers
//!
//! Connect, reconnect, disconnect, copy and airdrop actions.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notice};
use crate::app::tasks;
use crate::services::wallet::{WalletError, WalletSource};
use async_channel::Sender;
use parking_lot::RwLock;
use solana_sdk::signature::Signature;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const AIRDROP_FAILED: &str = "Failed to request test SOL. Try again.";

fn apply_connection(state: &mut AppState, result: Result<solana_sdk::pubkey::Pubkey, WalletError>) {
    match result {
        Ok(pubkey) => {
            info!("Wallet connected: {}", pubkey);
            state.notify(Notice::Success("Wallet connected".to_string()));
        }
        Err(e) => {
            error!("Wallet connection failed: {}", e);
            state.notify(Notice::Error(e.to_string()));
        }
    }
}

pub(crate) fn handle_connect_keypair(state: &Arc<RwLock<AppState>>, path: PathBuf) {
    let mut guard = state.write();
    let result = guard.wallet.connector.connect(WalletSource::KeypairFile(path));
    apply_connection(&mut guard, result);
}

/// Connect the address typed into the watch-only field.
pub(crate) fn handle_connect_watch_only(state: &Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let address = guard.wallet.watch_input.trim().to_string();
    let result = guard.wallet.connector.connect(WalletSource::WatchOnly(address));
    if result.is_ok() {
        guard.wallet.watch_input.clear();
    }
    apply_connection(&mut guard, result);
}

pub(crate) fn handle_reconnect(state: &Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let result = guard.wallet.connector.reconnect();
    apply_connection(&mut guard, result);
}

pub(crate) fn handle_disconnect(state: &Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    guard.wallet.connector.disconnect();
    guard.notify(Notice::Info("Wallet disconnected".to_string()));
}

/// The connected address to put on the clipboard.
pub(crate) fn handle_copy_address(state: &Arc<RwLock<AppState>>) -> Option<String> {
    let mut guard = state.write();
    let address = guard.wallet_address()?;
    guard.notify(Notice::Success("Wallet address copied".to_string()));
    Some(address)
}

/// Ask for 2 test SOL. Ignored off Devnet or without a wallet.
pub(crate) fn handle_request_airdrop(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let mut guard = state.write();
    if !guard.services.endpoint.is_devnet() || guard.wallet.airdrop_pending {
        warn!("Airdrop unavailable on {}", guard.services.endpoint.label());
        return;
    }
    let Some(owner) = guard.wallet.connector.public_key() else {
        return;
    };
    guard.wallet.airdrop_pending = true;
    let services = guard.services.clone();
    drop(guard);

    tasks::wallet::request_airdrop(services, owner, event_tx.clone());
}

pub(crate) fn handle_airdrop_finished(state: &Arc<RwLock<AppState>>, result: Result<Signature, String>) {
    let mut guard = state.write();
    guard.wallet.airdrop_pending = false;
    match result {
        Ok(_) => guard.notify(Notice::Success("Received 2 test SOL".to_string())),
        Err(_) => guard.notify(Notice::Error(AIRDROP_FAILED.to_string())),
    }
}
