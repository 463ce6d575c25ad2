//! # Quote Task
//!
//! Fetches one quote and reports it under the sequence number it was issued
//! with. Overlapping requests are not cancelled; the receiver drops stale ones.

use crate::app::events::AppEvent;
use crate::app::state::QuoteFailure;
use async_channel::Sender;
use lib_core::dto::{QuoteRequest, QuoteView};
use lib_core::AppError;
use lib_solana::AggregatorApi;
use std::sync::Arc;
use tokio::spawn;
use tracing::{debug, warn};

/// Spawn a quote fetch for `request`.
pub(crate) fn fetch_quote(
    aggregator: Arc<dyn AggregatorApi>,
    request: QuoteRequest,
    seq: u64,
    event_tx: Sender<AppEvent>,
) {
    spawn(async move {
        let result = quote_outcome(aggregator.as_ref(), &request).await;
        let _ = event_tx.send(AppEvent::QuoteResult { seq, result }).await;
    });
}

/// Ask the aggregator and shape the answer for display.
pub(crate) async fn quote_outcome(
    aggregator: &dyn AggregatorApi,
    request: &QuoteRequest,
) -> Result<(QuoteView, Vec<String>), QuoteFailure> {
    let response = aggregator.quote(request).await.map_err(|e| {
        warn!("Quote {} -> {} failed: {}", request.input.symbol, request.output.symbol, e);
        match e {
            AppError::InvalidResponse(_) | AppError::Decoding(_) => QuoteFailure::InvalidResponse,
            _ => QuoteFailure::Network,
        }
    })?;

    let mut view = QuoteView::from_out_amount(request, &response.out_amount).map_err(|e| {
        warn!("Unusable outAmount: {}", e);
        QuoteFailure::InvalidResponse
    })?;
    view.price_impact_pct = response.price_impact();
    debug!("Quote {} {} -> {} {}", view.in_amount, request.input.symbol, view.out_amount, request.output.symbol);

    Ok((view, response.route_labels()))
}
