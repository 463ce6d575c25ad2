//! # Swap Errors
//!
//! Every step of the pipeline produces a tagged variant, and
//! [`SwapError::user_message`] maps each one to the short text the exchange
//! screen shows.

use super::signer::SignerError;
use lib_core::AppError;
use thiserror::Error;

pub type SwapResult<T> = std::result::Result<T, SwapError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwapError {
    #[error("Insufficient SOL for fees: balance {balance} lamports")]
    InsufficientFunds { balance: u64 },

    #[error("Transaction rejected by user")]
    Rejected,

    /// The node refused the simulated transaction.
    #[error("Simulation failed: {detail}")]
    Simulation {
        /// The failure came from a program instruction.
        unsupported_instruction: bool,
        detail: String,
        logs: Vec<String>,
    },

    /// Transport or HTTP failure reaching the aggregator.
    #[error("Network error: {0}")]
    Network(String),

    /// The aggregator answered without the fields a swap needs.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transaction decode failed: {0}")]
    Decode(String),

    #[error("Fee payer {found} does not match wallet {expected}")]
    FeePayerMismatch { expected: String, found: String },

    #[error("Address lookup table {address}: {reason}")]
    LookupTable { address: String, reason: String },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl SwapError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SwapError::InsufficientFunds { .. } => "Insufficient SOL for fees. Request test SOL (2 SOL recommended).",
            SwapError::Rejected => "Transaction rejected. Confirm in wallet.",
            SwapError::Simulation { unsupported_instruction: true, .. } => {
                "Unsupported program or invalid transaction. Try different tokens or amount."
            }
            SwapError::InvalidResponse(_) => "Invalid quote response. Check token availability.",
            _ => "Swap failed. Check the log for details.",
        }
    }
}

impl From<AppError> for SwapError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http { .. } => SwapError::Network(err.to_string()),
            AppError::InvalidResponse(msg) => SwapError::InvalidResponse(msg),
            AppError::Decoding(msg) => SwapError::Decode(msg),
            AppError::Rpc { message, .. } => SwapError::Rpc(message),
            other => SwapError::Rpc(other.to_string()),
        }
    }
}

impl From<SignerError> for SwapError {
    fn from(err: SignerError) -> Self {
        match err {
            SignerError::Rejected => SwapError::Rejected,
            other => SwapError::Wallet(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SwapError::InsufficientFunds { balance: 0 }.user_message(),
            "Insufficient SOL for fees. Request test SOL (2 SOL recommended)."
        );
        assert_eq!(SwapError::Rejected.user_message(), "Transaction rejected. Confirm in wallet.");
        assert_eq!(
            SwapError::Simulation { unsupported_instruction: true, detail: String::new(), logs: vec![] }.user_message(),
            "Unsupported program or invalid transaction. Try different tokens or amount."
        );
        assert_eq!(
            SwapError::Simulation { unsupported_instruction: false, detail: String::new(), logs: vec![] }.user_message(),
            "Swap failed. Check the log for details."
        );
        assert_eq!(SwapError::Network("timeout".into()).user_message(), "Swap failed. Check the log for details.");
        assert_eq!(
            SwapError::InvalidResponse("no outAmount".into()).user_message(),
            "Invalid quote response. Check token availability."
        );
    }

    #[test]
    fn test_conversions_keep_their_tag() {
        assert!(matches!(SwapError::from(AppError::http(Some(502), "bad gateway")), SwapError::Network(_)));
        assert!(matches!(SwapError::from(AppError::InvalidResponse("x".into())), SwapError::InvalidResponse(_)));
        assert!(matches!(SwapError::from(AppError::rpc("down")), SwapError::Rpc(_)));
        assert_eq!(SwapError::from(SignerError::Rejected), SwapError::Rejected);
        assert!(matches!(SwapError::from(SignerError::Unavailable("watch-only".into())), SwapError::Wallet(_)));
    }
}
