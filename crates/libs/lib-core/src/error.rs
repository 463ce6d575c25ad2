//! # Centralized Error Handling
//!
//! [`AppError`] is the error type shared by the core and Solana libraries.
//! Each external call site produces the variant describing what actually
//! failed, so callers branch on the variant rather than on message text.
//!
//! ## Error Categories
//!
//! 1. **Startup**: [`Config`](AppError::Config) is the only fatal error.
//! 2. **Transport**: [`Rpc`](AppError::Rpc) and [`Http`](AppError::Http) for
//!    node and REST failures. An RPC 403 is tagged with `forbidden`.
//! 3. **Payload**: [`InvalidResponse`](AppError::InvalidResponse) and
//!    [`Decoding`](AppError::Decoding) for bodies that arrived but are unusable.
//! 4. **User input**: [`InvalidInput`](AppError::InvalidInput) and
//!    [`NotFound`](AppError::NotFound).
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_amount(raw: &str) -> Result<()> {
//!     if raw.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Enter an amount".to_string()));
//!     }
//!     Ok(())
//! }
//! # assert!(require_amount("").is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Missing or invalid configuration at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solana RPC failure. `forbidden` is set when the node answered 403.
    #[error("RPC error: {message}")]
    Rpc { message: String, forbidden: bool },

    /// HTTP failure talking to a REST API. `status` is absent for transport errors.
    #[error("HTTP error: {message}")]
    Http { status: Option<u16>, message: String },

    /// A response arrived but lacked required fields.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Data decoding error (base58, base64, bincode, borsh).
    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn rpc(message: impl Into<String>) -> Self {
        AppError::Rpc { message: message.into(), forbidden: false }
    }

    pub fn http(status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Http { status, message: message.into() }
    }

    /// True when an RPC node refused the request with 403.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AppError::Rpc { forbidden: true, .. })
    }

    /// Short message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            _ if self.is_forbidden() => {
                "Access to Solana RPC is restricted (403 Forbidden). Switch to a private RPC such as Helius.".to_string()
            }
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Rpc { message, .. } => format!("RPC request failed: {message}"),
            AppError::Http { .. } => "Service temporarily unavailable".to_string(),
            AppError::InvalidResponse(_) | AppError::Decoding(_) => "Unexpected response from service".to_string(),
            AppError::Config(msg) => msg.clone(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::amount::Error> for AppError {
    fn from(err: lib_utils::amount::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<lib_utils::b64::Error> for AppError {
    fn from(err: lib_utils::b64::Error) -> Self {
        AppError::Decoding(err.to_string())
    }
}
