//! # Application Events
//!
//! Two flows meet in the [`App`](crate::app::App):
//!
//! - [`AppEvent`]: results from background tasks, received over the channel
//! - [`UiAction`]: what the user did this frame, collected while rendering
//!
//! Both are applied after the UI has released its read guard on the state.

use crate::app::route::Route;
use crate::app::state::{ApprovalRequest, PickerTarget, QuoteFailure};
use lib_core::dto::{PortfolioSnapshot, QuoteView, TokenRef};
use lib_core::RpcEndpoint;
use lib_solana::jupiter::TokenInfo;
use lib_solana::{LookupError, SwapError, SwapReceipt};
use solana_sdk::signature::Signature;
use std::path::PathBuf;
use std::sync::Arc;

/// Async task results sent to main thread
#[derive(Debug)]
pub enum AppEvent {
    /// Quote answered, tagged with the sequence number it was issued under.
    QuoteResult {
        seq: u64,
        result: Result<(QuoteView, Vec<String>), QuoteFailure>,
    },
    /// Strict token list fetched for the picker.
    TokenListLoaded(Result<Arc<Vec<TokenInfo>>, String>),
    /// Portfolio fetched for `owner` with the service set of `generation`.
    PortfolioLoaded {
        owner: String,
        generation: u64,
        result: Result<PortfolioSnapshot, String>,
    },
    TokenLookup {
        address: String,
        result: Result<TokenInfo, LookupError>,
    },
    SwapFinished(Result<SwapReceipt, SwapError>),
    AirdropFinished(Result<Signature, String>),
    /// The swap pipeline is waiting for the user to approve a signature.
    SignatureRequested(ApprovalRequest),
}

/// User actions collected during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(Route),
    /// Submit the nav bar search box.
    SearchToken,
    /// The amount field changed.
    AmountEdited,
    OpenPicker(PickerTarget),
    ClosePicker,
    SelectToken(PickerTarget, TokenRef),
    Flip,
    RefreshQuote,
    Swap,
    /// Open the native file dialog for a keypair.
    PickKeypair,
    ConnectKeypair(PathBuf),
    ConnectWatchOnly,
    Reconnect,
    Disconnect,
    CopyAddress,
    RequestAirdrop,
    ToggleTheme,
    SetEndpoint(RpcEndpoint),
    ResolveApproval(bool),
    OpenExternal(String),
}
