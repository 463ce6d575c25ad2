//! # Exchange Handlers
//!
//! Amount edits, token selection, flip, refresh and swap submission.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Notice, PickerTarget, QuoteFailure};
use crate::app::tasks;
use async_channel::Sender;
use lib_core::dto::{QuoteView, TokenRef};
use lib_solana::{SwapError, SwapReceipt};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Amount field changed: drop the quote for the previous amount, including
/// any response still in flight, and restart the debounce when the new
/// amount is a positive number.
pub(crate) fn handle_amount_edited(state: &Arc<RwLock<AppState>>, now: Instant) {
    let mut state = state.write();
    let exchange = &mut state.exchange;
    exchange.error = None;
    exchange.tracker.invalidate();
    exchange.clear_quote();
    if exchange.request().is_some() {
        exchange.tracker.schedule(now);
    }
}

/// Called every frame; fires the debounced quote once its window elapsed.
pub(crate) fn flush_due_quote(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>, now: Instant) {
    let due = state.write().exchange.tracker.take_due(now);
    if due {
        request_quote(state, event_tx);
    }
}

/// Issue a quote for the current form right away.
pub(crate) fn request_quote(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let mut state = state.write();
    let Some(request) = state.exchange.request() else {
        state.exchange.tracker.invalidate();
        state.exchange.clear_quote();
        return;
    };
    let seq = state.exchange.tracker.issue();
    state.exchange.quote_loading = true;
    let aggregator = Arc::clone(&state.services.aggregator);
    drop(state);

    debug!("Quote #{} for {} {}", seq, request.amount, request.input.symbol);
    tasks::quote::fetch_quote(aggregator, request, seq, event_tx.clone());
}

/// Re-quote now, quoting one unit when the amount is empty.
pub(crate) fn handle_refresh(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    {
        let mut state = state.write();
        if state.exchange.amount.trim().is_empty() {
            state.exchange.amount = "1".to_string();
        }
    }
    request_quote(state, event_tx);
}

/// Swap source and destination and quote the reversed pair.
pub(crate) fn handle_flip(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    state.write().exchange.flip();
    request_quote(state, event_tx);
}

pub(crate) fn handle_open_picker(state: &Arc<RwLock<AppState>>, target: Option<PickerTarget>) {
    let mut state = state.write();
    state.exchange.picker = target;
    state.exchange.picker_filter.clear();
}

pub(crate) fn handle_token_select(
    state: &Arc<RwLock<AppState>>,
    event_tx: &Sender<AppEvent>,
    target: PickerTarget,
    token: TokenRef,
) {
    let mut guard = state.write();
    let other = match target {
        PickerTarget::Input => &guard.exchange.output,
        PickerTarget::Output => &guard.exchange.input,
    };
    // Picking the other side's token swaps the pair.
    if other.mint == token.mint {
        guard.exchange.picker = None;
        drop(guard);
        handle_flip(state, event_tx);
        return;
    }
    guard.exchange.select(target, token);
    drop(guard);
    request_quote(state, event_tx);
}

/// Start a swap when every precondition holds; otherwise do nothing.
pub(crate) fn handle_swap(state: &Arc<RwLock<AppState>>, event_tx: &Sender<AppEvent>) {
    let mut guard = state.write();
    if !guard.exchange.can_swap(guard.wallet.connector.can_sign()) {
        debug!("Swap preconditions not met");
        return;
    }
    let (Some(request), Some(wallet)) = (guard.exchange.request(), guard.wallet.connector.adapter()) else {
        return;
    };
    guard.exchange.swapping = true;
    guard.exchange.error = None;
    let services = guard.services.clone();
    drop(guard);

    info!("Submitting swap {} {} -> {}", request.amount, request.input.symbol, request.output.symbol);
    tasks::swap::execute_swap(services, request, wallet, event_tx.clone());
}

// region: --- Task results

pub(crate) fn handle_quote_result(
    state: &Arc<RwLock<AppState>>,
    seq: u64,
    result: Result<(QuoteView, Vec<String>), QuoteFailure>,
) {
    let mut state = state.write();
    let exchange = &mut state.exchange;
    if !exchange.tracker.is_current(seq) {
        debug!("Dropping stale quote #{}", seq);
        return;
    }
    match result {
        Ok((view, labels)) => exchange.apply_quote(view, labels),
        Err(failure) => exchange.apply_failure(&failure),
    }
}

pub(crate) fn handle_swap_finished(state: &Arc<RwLock<AppState>>, result: Result<SwapReceipt, SwapError>) {
    let mut state = state.write();
    state.exchange.swapping = false;
    match result {
        Ok(receipt) => {
            state.exchange.amount.clear();
            state.exchange.tracker.invalidate();
            state.exchange.clear_quote();
            state.exchange.last_signature = Some(receipt.signature.to_string());
            state.notify(Notice::Success(format!("Swap confirmed: {}", receipt.signature)));
        }
        Err(e) => {
            warn!("Swap failed: {}", e);
            let message = e.user_message().to_string();
            state.exchange.error = Some(message.clone());
            state.notify(Notice::Error(message));
        }
    }
}

// endregion: --- Task results

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{app_state, CountingRpc, StubAggregator};
    use async_channel::{unbounded, Receiver};
    use lib_core::dto::{SOL_MINT, USDC_MINT};
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn setup(out_amount: &str) -> (Arc<RwLock<AppState>>, Arc<CountingRpc>, Arc<StubAggregator>) {
        let rpc = Arc::new(CountingRpc::default());
        let aggregator = Arc::new(StubAggregator::answering(out_amount));
        let state = Arc::new(RwLock::new(app_state(Arc::clone(&rpc), Arc::clone(&aggregator))));
        (state, rpc, aggregator)
    }

    /// Receive the next quote result and apply it.
    async fn apply_next_quote(state: &Arc<RwLock<AppState>>, rx: &Receiver<AppEvent>) -> u64 {
        match rx.recv().await.unwrap() {
            AppEvent::QuoteResult { seq, result } => {
                handle_quote_result(state, seq, result);
                seq
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_debounced_quote_updates_form() {
        let (state, _rpc, aggregator) = setup("150000000");
        let (tx, rx) = unbounded();
        let start = Instant::now();

        state.write().exchange.amount = "1".into();
        handle_amount_edited(&state, start);
        flush_due_quote(&state, &tx, start + Duration::from_millis(200));
        assert_eq!(aggregator.quote_calls.load(Ordering::SeqCst), 0);

        flush_due_quote(&state, &tx, start + Duration::from_millis(500));
        apply_next_quote(&state, &rx).await;

        let state = state.read();
        assert_eq!(state.exchange.output_amount, "150.000000");
        assert_eq!(state.exchange.rate_display().as_deref(), Some("150.00"));
        assert!(!state.exchange.quote_loading);
        assert_eq!(aggregator.quote_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_amount_clears_without_request() {
        let (state, _rpc, aggregator) = setup("150000000");
        let (tx, _rx) = unbounded();
        {
            let mut guard = state.write();
            guard.exchange.output_amount = "1.000000".into();
            guard.exchange.amount = "abc".into();
        }

        handle_amount_edited(&state, Instant::now());
        flush_due_quote(&state, &tx, Instant::now() + Duration::from_secs(1));

        assert!(state.read().exchange.output_amount.is_empty());
        assert_eq!(aggregator.quote_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_quote_is_discarded() {
        let (state, _rpc, _aggregator) = setup("150000000");
        let (tx, rx) = unbounded();
        state.write().exchange.amount = "1".into();

        request_quote(&state, &tx);
        let first = match rx.recv().await.unwrap() {
            AppEvent::QuoteResult { seq, result } => (seq, result),
            other => panic!("unexpected event {:?}", other),
        };
        request_quote(&state, &tx);
        let latest = apply_next_quote(&state, &rx).await;
        assert!(latest > first.0);

        state.write().exchange.output_amount = "current".into();
        handle_quote_result(&state, first.0, first.1);
        assert_eq!(state.read().exchange.output_amount, "current");
    }

    #[tokio::test]
    async fn test_edit_discards_quote_in_flight() {
        let (state, _rpc, _aggregator) = setup("150000000");
        let (tx, rx) = unbounded();
        state.write().exchange.amount = "1".into();
        request_quote(&state, &tx);
        let (seq, result) = match rx.recv().await.unwrap() {
            AppEvent::QuoteResult { seq, result } => (seq, result),
            other => panic!("unexpected event {:?}", other),
        };

        state.write().exchange.amount = "2".into();
        handle_amount_edited(&state, Instant::now());
        handle_quote_result(&state, seq, result);

        let state = state.read();
        assert_eq!(state.exchange.amount, "2");
        assert!(state.exchange.output_amount.is_empty());
        assert_eq!(state.exchange.rate_display(), None);
        assert!(!state.exchange.quote_loading);
        assert!(!state.exchange.can_swap(true));
    }

    #[tokio::test]
    async fn test_failed_quote_sets_error() {
        let rpc = Arc::new(CountingRpc::default());
        let aggregator = Arc::new(StubAggregator::failing(lib_core::AppError::http(Some(500), "boom")));
        let state = Arc::new(RwLock::new(app_state(rpc, aggregator)));
        let (tx, rx) = unbounded();
        {
            let mut guard = state.write();
            guard.exchange.amount = "1".into();
            guard.exchange.output_amount = "149.000000".into();
        }

        request_quote(&state, &tx);
        apply_next_quote(&state, &rx).await;

        let state = state.read();
        assert!(state.exchange.output_amount.is_empty());
        assert_eq!(state.exchange.error.as_deref(), Some("Error fetching quote. Ensure tokens are available."));
    }

    #[tokio::test]
    async fn test_flip_requotes_reversed_pair() {
        let (state, _rpc, _aggregator) = setup("6666666");
        let (tx, rx) = unbounded();
        {
            let mut guard = state.write();
            guard.exchange.amount = "1".into();
            guard.exchange.output_amount = "150.000000".into();
        }

        handle_flip(&state, &tx);
        apply_next_quote(&state, &rx).await;

        let state = state.read();
        assert_eq!(state.exchange.input.mint, USDC_MINT);
        assert_eq!(state.exchange.output.mint, SOL_MINT);
        assert_eq!(state.exchange.amount, "150.000000");
        let quote = state.exchange.quote.as_ref().unwrap();
        assert_eq!(quote.input_mint, USDC_MINT);
        assert_eq!(state.exchange.output_amount, "0.006667");
    }

    #[tokio::test]
    async fn test_refresh_defaults_to_one_unit() {
        let (state, _rpc, _aggregator) = setup("150000000");
        let (tx, rx) = unbounded();

        handle_refresh(&state, &tx);
        apply_next_quote(&state, &rx).await;

        let state = state.read();
        assert_eq!(state.exchange.amount, "1");
        assert_eq!(state.exchange.rate_display().as_deref(), Some("150.00"));
    }

    #[tokio::test]
    async fn test_swap_without_wallet_is_a_no_op() {
        let (state, rpc, aggregator) = setup("150000000");
        let (tx, rx) = unbounded();
        state.write().exchange.amount = "1".into();
        request_quote(&state, &tx);
        apply_next_quote(&state, &rx).await;
        let quotes_before = aggregator.quote_calls.load(Ordering::SeqCst);

        handle_swap(&state, &tx);

        assert!(!state.read().exchange.swapping);
        assert_eq!(rpc.calls(), 0);
        assert_eq!(aggregator.quote_calls.load(Ordering::SeqCst), quotes_before);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_swap_failure_keeps_form() {
        let (state, _rpc, _aggregator) = setup("150000000");
        {
            let mut guard = state.write();
            guard.exchange.amount = "1".into();
            guard.exchange.swapping = true;
        }

        handle_swap_finished(&state, Err(SwapError::Rejected));

        let mut state = state.write();
        assert!(!state.exchange.swapping);
        assert_eq!(state.exchange.amount, "1");
        assert_eq!(state.exchange.error.as_deref(), Some("Transaction rejected. Confirm in wallet."));
        assert_eq!(
            state.pending_notifications.pop(),
            Some(Notice::Error("Transaction rejected. Confirm in wallet.".into()))
        );
    }
}
