//! # Transaction Signer
//!
//! The seam between the swap pipeline and whatever holds the private key.

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::VersionedTransaction;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    /// The user declined the signing prompt.
    #[error("Signing request rejected by user")]
    Rejected,

    /// No key is available, e.g. a watch-only connection.
    #[error("Signer unavailable: {0}")]
    Unavailable(String),

    #[error("Signing failed: {0}")]
    Failed(String),
}

/// Signs transactions for one public key.
///
/// Implementations may ask the user for approval and therefore may take
/// arbitrarily long to answer.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    fn pubkey(&self) -> Pubkey;

    /// Return `transaction` with this signer's signature in place.
    async fn sign_transaction(&self, transaction: VersionedTransaction) -> Result<VersionedTransaction, SignerError>;
}
