//! # Solana Library
//!
//! Everything that talks to the outside world on behalf of the dashboard:
//!
//! - [`jupiter`]: quote, swap-build, price and strict token list endpoints
//! - [`client`]: the Solana JSON-RPC client behind the [`rpc::RpcGateway`] trait
//! - [`metadata`]: Metaplex token metadata lookups
//! - [`portfolio`]: wallet holdings assembly
//! - [`token_lookup`]: address to token resolution for the token page
//! - [`swap`]: the quote, build, simulate, sign and submit pipeline
//!
//! Services depend on the [`rpc::RpcGateway`] and [`jupiter::AggregatorApi`]
//! traits rather than on concrete clients, so every flow can be driven by
//! in-memory fakes in tests.

pub mod client;
pub mod jupiter;
pub mod metadata;
pub mod portfolio;
pub mod rpc;
pub mod swap;
pub mod token_lookup;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types from root for convenience
pub use client::SolanaClient;
pub use jupiter::{AggregatorApi, JupiterClient};
pub use portfolio::PortfolioService;
pub use rpc::RpcGateway;
pub use swap::{SignerError, SwapError, SwapExecutor, SwapReceipt, TransactionSigner};
pub use token_lookup::{lookup_token, LookupError};
