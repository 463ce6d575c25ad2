//! # Settings Handlers
//!
//! Theme and RPC endpoint changes, and settings persistence.
//!
//! Settings are an immutable snapshot: every change builds a new
//! [`Settings`], swaps the `Arc` and writes the file.

use crate::app::state::{AppState, Notice, Settings};
use crate::services::ServiceSet;
use lib_core::{Config, RpcEndpoint};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Get default config file path
pub fn get_config_path() -> PathBuf {
    PathBuf::from("./dex-dashboard.json")
}

/// Load settings from `path`, falling back to defaults.
pub fn load_settings(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(settings) => {
            tracing::info!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            tracing::warn!("Failed to load settings from {:?}: {}. Using defaults.", path, e);
            Settings::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save settings to `path`
pub fn save_settings(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

fn commit(state: &mut AppState, settings: Settings, path: &Path) {
    if let Err(e) = save_settings(&settings, path) {
        tracing::error!("Failed to save settings: {}", e);
    }
    state.settings = Arc::new(settings);
}

/// Handle theme toggle
pub(crate) fn handle_toggle_theme(state: &Arc<RwLock<AppState>>, path: &Path) {
    let mut guard = state.write();
    let next = guard.settings.with_theme(guard.settings.theme.toggled());
    commit(&mut guard, next, path);
}

/// Switch RPC endpoint and rebuild the services against it.
///
/// Tasks already running keep the service set they were spawned with.
pub(crate) fn handle_set_endpoint(state: &Arc<RwLock<AppState>>, config: &Config, endpoint: RpcEndpoint, path: &Path) {
    let mut guard = state.write();
    if guard.settings.rpc == endpoint {
        return;
    }
    if let RpcEndpoint::Custom(url) = &endpoint {
        if lib_utils::validate_url(url).is_err() {
            guard.notify(Notice::Error(format!("Invalid RPC URL: {url}")));
            return;
        }
    }

    tracing::info!("Switching RPC endpoint to {}", endpoint.label());
    let aggregator = Arc::clone(&guard.services.aggregator);
    let generation = guard.services.generation + 1;
    guard.services = ServiceSet::build(config, &endpoint, aggregator, generation);
    guard.wallet.airdrop_pending = false;
    let next = guard.settings.with_endpoint(endpoint);
    commit(&mut guard, next, path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ThemeMode;
    use crate::testing::app_state;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("dex-dashboard-settings-{}.json", solana_sdk::pubkey::Pubkey::new_unique()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        assert_eq!(load_settings(Path::new("/nonexistent/dex-dashboard.json")), Settings::default());
    }

    #[test]
    fn test_toggle_persists() {
        let path = temp_path();
        let state = Arc::new(RwLock::new(app_state(Arc::default(), Arc::default())));

        handle_toggle_theme(&state, &path);
        assert_eq!(state.read().settings.theme, ThemeMode::Light);
        assert_eq!(load_settings(&path).theme, ThemeMode::Light);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_endpoint_switch_rebuilds_services() {
        let path = temp_path();
        let state = Arc::new(RwLock::new(app_state(Arc::default(), Arc::default())));
        let config = Config::new("test-key");

        handle_set_endpoint(&state, &config, RpcEndpoint::Mainnet, &path);
        {
            let guard = state.read();
            assert_eq!(guard.services.generation, 1);
            assert_eq!(guard.services.endpoint, RpcEndpoint::Mainnet);
            assert_eq!(guard.settings.rpc, RpcEndpoint::Mainnet);
        }
        assert_eq!(load_settings(&path).rpc, RpcEndpoint::Mainnet);

        handle_set_endpoint(&state, &config, RpcEndpoint::Custom("not a url".into()), &path);
        assert_eq!(state.read().services.generation, 1);
        assert!(matches!(state.read().pending_notifications.last(), Some(Notice::Error(_))));

        let _ = std::fs::remove_file(path);
    }
}
