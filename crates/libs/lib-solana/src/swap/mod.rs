//! # Swap Execution
//!
//! Turns a quote request into a confirmed on-chain swap.
//!
//! ```text
//! balance -> quote -> /swap -> decode -> lookup tables -> blockhash
//!         -> fee payer check -> simulate -> sign -> send and confirm
//! ```

pub mod error;
pub mod executor;
pub mod lookup_table;
pub mod signer;

pub use error::{SwapError, SwapResult};
pub use executor::{decode_transaction, SwapExecutor, SwapReceipt, MIN_FEE_BALANCE_LAMPORTS};
pub use lookup_table::{resolve_lookup_tables, LookupTable};
pub use signer::{SignerError, TransactionSigner};
