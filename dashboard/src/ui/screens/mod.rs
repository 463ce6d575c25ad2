//! # Screens
//!
//! One module per route.

pub mod exchange;
pub mod portfolio;
pub mod token_page;

pub use exchange::render_exchange;
pub use portfolio::render_portfolio;
pub use token_page::render_token_page;
