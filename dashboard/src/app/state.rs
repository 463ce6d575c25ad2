//! # Application State Types
//!
//! Everything the UI renders from, plus the small state machines behind the
//! exchange form (debounce and quote sequencing) and the async screens.

use crate::app::route::Route;
use crate::services::wallet::WalletConnector;
use crate::services::ServiceSet;
use lib_core::dto::{PortfolioSnapshot, QuoteRequest, QuoteView, TokenRef, TokenRegistry};
use lib_core::RpcEndpoint;
use lib_solana::jupiter::TokenInfo;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Delay between the last amount keystroke and the quote request.
pub const QUOTE_DEBOUNCE: Duration = Duration::from_millis(500);

// region: --- Settings

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// User settings, persisted as JSON. Shared as an immutable `Arc` snapshot and
/// replaced wholesale on change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    pub rpc: RpcEndpoint,
}

impl Settings {
    pub fn with_theme(&self, theme: ThemeMode) -> Self {
        Self { theme, ..self.clone() }
    }

    pub fn with_endpoint(&self, rpc: RpcEndpoint) -> Self {
        Self { rpc, ..self.clone() }
    }
}

// endregion: --- Settings

// region: --- Exchange

/// Which side of the form the token picker is choosing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Input,
    Output,
}

/// Debounce deadline and sequence numbers for quote requests.
///
/// Only the response tagged with the latest issued sequence number is shown.
#[derive(Debug, Default)]
pub struct QuoteTracker {
    latest: u64,
    deadline: Option<Instant>,
}

impl QuoteTracker {
    /// (Re)start the debounce window.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + QUOTE_DEBOUNCE);
    }

    /// True once when the debounce window has elapsed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Tag for a new request. Every earlier tag becomes stale.
    pub fn issue(&mut self) -> u64 {
        self.deadline = None;
        self.latest += 1;
        self.latest
    }

    /// Drop any pending request and make in-flight responses stale.
    pub fn invalidate(&mut self) {
        self.deadline = None;
        self.latest += 1;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

/// Why a quote produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFailure {
    /// The aggregator answered without `outAmount`.
    InvalidResponse,
    /// Transport failure or non-success status.
    Network,
}

impl QuoteFailure {
    pub fn message(&self) -> &'static str {
        match self {
            QuoteFailure::InvalidResponse => "Failed to get quote. Check token availability.",
            QuoteFailure::Network => "Error fetching quote. Ensure tokens are available.",
        }
    }
}

#[derive(Debug)]
pub struct ExchangeState {
    pub input: TokenRef,
    pub output: TokenRef,
    /// Source amount as typed.
    pub amount: String,
    /// Destination amount, six decimals, empty when unknown.
    pub output_amount: String,
    pub quote: Option<QuoteView>,
    pub route_labels: Vec<String>,
    pub error: Option<String>,
    pub slippage_bps: u16,
    pub quote_loading: bool,
    pub swapping: bool,
    /// Signature of the last confirmed swap.
    pub last_signature: Option<String>,
    pub tracker: QuoteTracker,
    pub picker: Option<PickerTarget>,
    pub picker_filter: String,
    pub tokens: TokenRegistry,
}

impl ExchangeState {
    pub fn new(slippage_bps: u16) -> Self {
        Self {
            input: TokenRef::sol(),
            output: TokenRef::usdc(),
            amount: String::new(),
            output_amount: String::new(),
            quote: None,
            route_labels: Vec::new(),
            error: None,
            slippage_bps,
            quote_loading: false,
            swapping: false,
            last_signature: None,
            tracker: QuoteTracker::default(),
            picker: None,
            picker_filter: String::new(),
            tokens: TokenRegistry::default(),
        }
    }

    /// The request for the current form, `None` when the amount is empty or
    /// not a positive number.
    pub fn request(&self) -> Option<QuoteRequest> {
        QuoteRequest::new(self.input.clone(), self.output.clone(), &self.amount, self.slippage_bps).ok()
    }

    /// Rate with two decimals, once a quote is shown.
    pub fn rate_display(&self) -> Option<String> {
        self.quote.as_ref().map(|q| q.rate_display())
    }

    /// Swap preconditions: a signing wallet, an amount and a computed rate.
    pub fn can_swap(&self, wallet_can_sign: bool) -> bool {
        wallet_can_sign && !self.amount.trim().is_empty() && self.quote.is_some() && !self.swapping
    }

    /// Forget the displayed quote.
    pub fn clear_quote(&mut self) {
        self.quote = None;
        self.output_amount.clear();
        self.route_labels.clear();
        self.quote_loading = false;
    }

    pub fn apply_quote(&mut self, view: QuoteView, route_labels: Vec<String>) {
        self.output_amount = view.out_amount_display();
        self.quote = Some(view);
        self.route_labels = route_labels;
        self.error = None;
        self.quote_loading = false;
    }

    pub fn apply_failure(&mut self, failure: &QuoteFailure) {
        self.clear_quote();
        self.error = Some(failure.message().to_string());
    }

    /// Swap the selected tokens and the displayed amounts.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.input, &mut self.output);
        std::mem::swap(&mut self.amount, &mut self.output_amount);
        self.quote = None;
        self.route_labels.clear();
    }

    pub fn select(&mut self, target: PickerTarget, token: TokenRef) {
        match target {
            PickerTarget::Input => self.input = token,
            PickerTarget::Output => self.output = token,
        }
        self.picker = None;
        self.picker_filter.clear();
    }
}

// endregion: --- Exchange

// region: --- Async screens

/// State of data loaded in the background.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Whose holdings the current route asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioTarget {
    /// Not on a portfolio route, or no wallet connected.
    None,
    Owner(Pubkey),
    /// `/portfolio/:address` with an unparsable address.
    Invalid,
}

#[derive(Debug, Default)]
pub struct PortfolioState {
    /// Owner the current view belongs to.
    pub owner: Option<String>,
    pub view: Loadable<PortfolioSnapshot>,
}

#[derive(Debug, Default)]
pub struct TokenPageState {
    pub address: String,
    pub view: Loadable<TokenInfo>,
}

// endregion: --- Async screens

// region: --- Wallet

#[derive(Default)]
pub struct WalletState {
    pub connector: WalletConnector,
    /// Address typed into the watch-only field.
    pub watch_input: String,
    /// Keypair offered by the "Use default keypair" entry.
    pub default_keypair: Option<PathBuf>,
    pub airdrop_pending: bool,
}

/// A toast queued by a handler, shown on the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Error(String),
}

/// A signing request waiting for the user's answer.
pub struct ApprovalRequest {
    pub summary: String,
    pub respond: oneshot::Sender<bool>,
}

impl std::fmt::Debug for ApprovalRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApprovalRequest").field("summary", &self.summary).finish()
    }
}

// endregion: --- Wallet

pub struct AppState {
    pub route: Route,
    pub settings: Arc<Settings>,
    pub services: ServiceSet,
    pub exchange: ExchangeState,
    pub portfolio: PortfolioState,
    pub token_page: TokenPageState,
    pub wallet: WalletState,
    /// Nav bar search box.
    pub search: String,
    /// Custom RPC URL typed in the settings menu.
    pub custom_rpc_input: String,
    pub pending_approval: Option<ApprovalRequest>,
    pub pending_notifications: Vec<Notice>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, services: ServiceSet, slippage_bps: u16) -> Self {
        let custom_rpc_input = match &settings.rpc {
            RpcEndpoint::Custom(url) => url.clone(),
            _ => String::new(),
        };
        Self {
            route: Route::default(),
            settings,
            services,
            exchange: ExchangeState::new(slippage_bps),
            portfolio: PortfolioState::default(),
            token_page: TokenPageState::default(),
            wallet: WalletState::default(),
            search: String::new(),
            custom_rpc_input,
            pending_approval: None,
            pending_notifications: Vec::new(),
        }
    }

    pub fn wallet_address(&self) -> Option<String> {
        self.wallet.connector.public_key().map(|k| k.to_string())
    }

    /// Whose portfolio the current route should show.
    pub fn portfolio_target(&self) -> PortfolioTarget {
        match &self.route {
            Route::Portfolio => match self.wallet.connector.public_key() {
                Some(owner) => PortfolioTarget::Owner(owner),
                None => PortfolioTarget::None,
            },
            Route::PortfolioAddress(address) => match Pubkey::from_str(address) {
                Ok(owner) => PortfolioTarget::Owner(owner),
                Err(_) => PortfolioTarget::Invalid,
            },
            _ => PortfolioTarget::None,
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.pending_notifications.push(notice);
    }
}
