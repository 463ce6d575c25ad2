//! # Core Library
//!
//! Configuration, RPC endpoint selection, the shared error type and the DTOs
//! that flow between the Solana services and the dashboard.

pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use config::{Config, RpcEndpoint};
pub use error::{AppError, Result};
