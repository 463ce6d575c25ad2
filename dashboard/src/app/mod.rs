//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI, background tasks and shared state.
//!
//! ## Frame cycle
//!
//! ```text
//! update()
//!   ├─ on_tick()          drain AppEvents, fire due quotes, reconcile poller
//!   ├─ ui::render()       draw from AppState, collect UiActions
//!   └─ dispatch()         apply each UiAction through a handler
//! ```
//!
//! Rendering holds the state lock for the whole draw. Handlers run after it is
//! released, and tasks never take it: they report through the
//! `async_channel` as [`AppEvent`]s.
//!
//! ## Related Modules
//!
//! - [`state`]: application state types
//! - [`events`]: task results and user actions
//! - [`handlers`]: user action handlers
//! - [`tasks`]: background tasks

mod event_handler;
mod events;
mod handlers;
pub mod route;
mod state;
mod tasks;

pub use events::{AppEvent, UiAction};
pub use handlers::settings::{get_config_path, load_settings, save_settings};
pub use route::Route;
pub use state::*;
pub use tasks::portfolio::PollerGuard;

use crate::services::ServiceSet;
use crate::ui;
use crate::ui::widgets::notifications::NotificationManager;
use async_channel::{unbounded, Receiver, Sender};
use lib_core::Config;
use lib_solana::{AggregatorApi, JupiterClient};
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application orchestrator.
pub struct App {
    /// Thread-safe shared application state. Hold the lock briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Results from background tasks, polled every frame.
    event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    config: Arc<Config>,
    settings_path: PathBuf,
    notifications: NotificationManager,

    /// The running portfolio poller, if a portfolio is on screen.
    poller: Option<PollerGuard>,

    /// Theme last pushed to egui.
    applied_theme: Option<ThemeMode>,
}

impl App {
    /// Create the application with persisted settings and start the token
    /// list fetch. Must be called inside the Tokio runtime.
    pub fn new(config: Arc<Config>) -> lib_core::Result<Self> {
        let settings_path = get_config_path();
        let settings = load_settings(&settings_path);

        let aggregator: Arc<dyn AggregatorApi> = Arc::new(JupiterClient::from_config(&config)?);
        let services = ServiceSet::build(&config, &settings.rpc, aggregator, 0);

        let mut state = AppState::new(Arc::new(settings), services, config.default_slippage_bps);
        state.wallet.default_keypair = Some(config.keypair_path.clone());

        let (event_tx, event_rx) = unbounded();
        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            config,
            settings_path,
            notifications: NotificationManager::new(),
            poller: None,
            applied_theme: None,
        };

        tasks::token::fetch_token_list(app.state.read().services.clone(), app.event_tx.clone());
        tracing::info!("App state initialized - event channel created, token list fetch started");

        Ok(app)
    }

    /// Called every frame before rendering.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        handlers::exchange::flush_due_quote(&self.state, &self.event_tx, Instant::now());
        handlers::portfolio::reconcile_poller(&self.state, &self.event_tx, &mut self.poller);

        let notices: Vec<Notice> = self.state.write().pending_notifications.drain(..).collect();
        for notice in notices {
            match notice {
                Notice::Success(message) => self.notifications.success(message),
                Notice::Info(message) => self.notifications.info(message),
                Notice::Error(message) => self.notifications.error(message),
            }
        }
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, ctx: &egui::Context, action: UiAction) {
        tracing::debug!("UI action: {:?}", action);
        match action {
            UiAction::Navigate(route) => handlers::navigation::handle_navigate(&self.state, &self.event_tx, route),
            UiAction::SearchToken => handlers::navigation::handle_search(&self.state, &self.event_tx),
            UiAction::AmountEdited => handlers::exchange::handle_amount_edited(&self.state, Instant::now()),
            UiAction::OpenPicker(target) => handlers::exchange::handle_open_picker(&self.state, Some(target)),
            UiAction::ClosePicker => handlers::exchange::handle_open_picker(&self.state, None),
            UiAction::SelectToken(target, token) => {
                handlers::exchange::handle_token_select(&self.state, &self.event_tx, target, token)
            }
            UiAction::Flip => handlers::exchange::handle_flip(&self.state, &self.event_tx),
            UiAction::RefreshQuote => handlers::exchange::handle_refresh(&self.state, &self.event_tx),
            UiAction::Swap => handlers::exchange::handle_swap(&self.state, &self.event_tx),
            UiAction::PickKeypair => {
                let picked = rfd::FileDialog::new()
                    .set_title("Select keypair file")
                    .add_filter("Keypair", &["json"])
                    .pick_file();
                if let Some(path) = picked {
                    handlers::wallet::handle_connect_keypair(&self.state, path);
                }
            }
            UiAction::ConnectKeypair(path) => handlers::wallet::handle_connect_keypair(&self.state, path),
            UiAction::ConnectWatchOnly => handlers::wallet::handle_connect_watch_only(&self.state),
            UiAction::Reconnect => handlers::wallet::handle_reconnect(&self.state),
            UiAction::Disconnect => handlers::wallet::handle_disconnect(&self.state),
            UiAction::CopyAddress => {
                if let Some(address) = handlers::wallet::handle_copy_address(&self.state) {
                    ctx.copy_text(address);
                }
            }
            UiAction::RequestAirdrop => handlers::wallet::handle_request_airdrop(&self.state, &self.event_tx),
            UiAction::ToggleTheme => handlers::settings::handle_toggle_theme(&self.state, &self.settings_path),
            UiAction::SetEndpoint(endpoint) => {
                handlers::settings::handle_set_endpoint(&self.state, &self.config, endpoint, &self.settings_path)
            }
            UiAction::ResolveApproval(approved) => {
                if let Some(request) = self.state.write().pending_approval.take() {
                    tracing::info!("Approval {} for: {}", if approved { "granted" } else { "denied" }, request.summary);
                    let _ = request.respond.send(approved);
                }
            }
            UiAction::OpenExternal(url) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.on_tick();

        let theme = self.state.read().settings.theme;
        if self.applied_theme != Some(theme) {
            ui::theme::apply(ctx, theme);
            self.applied_theme = Some(theme);
        }

        let actions = {
            let mut state = self.state.write();
            ui::render(ctx, &mut state)
        };
        for action in actions {
            self.dispatch(ctx, action);
        }

        self.notifications.show(ctx);
        // Keep draining task results while idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
