//! # Utilities Library
//!
//! Shared helpers for environment variables, base64 transport encoding,
//! token amount arithmetic, address formatting and input validation.

pub mod amount;
pub mod b64;
pub mod envs;
pub mod format;
pub mod validation;

// Re-export commonly used functions
pub use amount::{format_fixed, from_base_units, parse_amount, to_base_units};
pub use b64::{b64_decode, b64_encode};
pub use envs::{get_env, get_env_opt, get_env_parse, get_env_parse_or};
pub use format::{format_address, format_usd, mint_placeholder, short_address};
pub use validation::{validate_address, validate_not_empty, validate_slippage_bps, validate_url};
