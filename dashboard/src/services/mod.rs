//! # Services
//!
//! The external clients the dashboard talks to, bundled per RPC endpoint.
//!
//! A [`ServiceSet`] is immutable. Changing the endpoint builds a new set; a
//! task that already captured the old one finishes against it.

pub mod wallet;

use lib_core::{Config, RpcEndpoint};
use lib_solana::jupiter::SwapOptions;
use lib_solana::{AggregatorApi, PortfolioService, RpcGateway, SolanaClient, SwapExecutor};
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceSet {
    pub endpoint: RpcEndpoint,
    pub rpc: Arc<dyn RpcGateway>,
    pub aggregator: Arc<dyn AggregatorApi>,
    /// Bumped on every rebuild so pollers can tell they are stale.
    pub generation: u64,
    pub swap_options: SwapOptions,
}

impl ServiceSet {
    /// Build the set for `endpoint`. The aggregator is shared across rebuilds
    /// so its token list memo survives endpoint changes.
    pub fn build(config: &Config, endpoint: &RpcEndpoint, aggregator: Arc<dyn AggregatorApi>, generation: u64) -> Self {
        let rpc: Arc<dyn RpcGateway> = Arc::new(SolanaClient::for_endpoint(endpoint, config));
        let mut services = Self::from_parts(endpoint.clone(), rpc, aggregator, generation);
        services.swap_options.as_legacy_transaction = config.as_legacy_transaction;
        services
    }

    pub fn from_parts(
        endpoint: RpcEndpoint,
        rpc: Arc<dyn RpcGateway>,
        aggregator: Arc<dyn AggregatorApi>,
        generation: u64,
    ) -> Self {
        Self { endpoint, rpc, aggregator, generation, swap_options: SwapOptions::default() }
    }

    pub fn portfolio(&self) -> PortfolioService {
        PortfolioService::new(Arc::clone(&self.rpc), Arc::clone(&self.aggregator))
    }

    pub fn swap_executor(&self) -> SwapExecutor {
        SwapExecutor::new(Arc::clone(&self.rpc), Arc::clone(&self.aggregator)).with_options(self.swap_options.clone())
    }
}
