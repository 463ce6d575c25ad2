//! # DEX Dashboard
//!
//! Desktop dashboard for Solana token swaps through the Jupiter aggregator:
//! exchange form, portfolio viewer, token lookup and a keypair or watch-only
//! wallet.
//!
//! - [`app`]: state, events, handlers and background tasks
//! - [`services`]: RPC and aggregator clients, wallet connector
//! - [`ui`]: egui screens and widgets

pub mod app;
pub mod logging;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use app::App;
