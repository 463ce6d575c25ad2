//! # Event Handlers
//!
//! User action handlers organized by domain. Each takes the shared state and
//! holds the write lock only while it mutates; network work is handed to
//! [`tasks`](crate::app::tasks).

pub mod exchange;
pub mod navigation;
pub mod portfolio;
pub mod settings;
pub mod wallet;
