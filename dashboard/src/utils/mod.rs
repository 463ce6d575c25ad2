//! # Utility Functions
//!
//! - **[`runtime`]**: the shared Tokio runtime

pub mod runtime;
