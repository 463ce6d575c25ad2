//! # Data Transfer Objects (DTOs)
//!
//! Transient records shared by the services and the UI. None of them are
//! persisted; they are recomputed from their inputs on every fetch.

pub mod portfolio;
pub mod quote;
pub mod token;

pub use portfolio::*;
pub use quote::*;
pub use token::*;
