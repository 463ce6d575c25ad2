//! # Async Tasks
//!
//! Background work spawned on the Tokio runtime. Tasks never touch the state
//! lock; each one captures what it needs up front and reports back with an
//! [`AppEvent`](crate::app::AppEvent).

pub mod portfolio;
pub mod quote;
pub mod swap;
pub mod token;
pub mod wallet;
