//! # Wallet Service
//!
//! Wallet connections: a local keypair file that can sign, or a watch-only
//! address that can only be looked at.
//!
//! ## Keypair formats
//! - JSON array, as written by `solana-keygen`: 64 bytes (secret + public) or a 32-byte seed
//! - Base58 string of the same bytes

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::VersionedTransaction;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Wallet connection errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("No wallet connected")]
    NoWallet,

    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    #[error("Failed to read keypair file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Signing request rejected")]
    Rejected,

    /// The connection is an address only.
    #[error("Watch-only wallet cannot sign")]
    WatchOnly,

    #[error("Signing error: {0}")]
    Signing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Keypair,
    WatchOnly,
}

/// A connected wallet.
pub trait WalletAdapter: Send + Sync {
    fn pubkey(&self) -> Pubkey;

    fn kind(&self) -> WalletKind;

    fn sign(&self, transaction: VersionedTransaction) -> Result<VersionedTransaction, WalletError>;
}

// region: --- Keypair wallet

pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load a keypair file.
    pub fn from_file(path: &Path) -> Result<Self, WalletError> {
        let contents = fs::read_to_string(path)?;
        let keypair = parse_keypair(&contents)?;
        info!("Loaded keypair {} from {:?}", keypair.pubkey(), path);
        Ok(Self { keypair })
    }
}

impl WalletAdapter for KeypairWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn kind(&self) -> WalletKind {
        WalletKind::Keypair
    }

    fn sign(&self, transaction: VersionedTransaction) -> Result<VersionedTransaction, WalletError> {
        VersionedTransaction::try_new(transaction.message, &[&self.keypair])
            .map_err(|e| WalletError::Signing(e.to_string()))
    }
}

/// Parse keypair file contents in any supported format.
pub fn parse_keypair(contents: &str) -> Result<Keypair, WalletError> {
    let trimmed = contents.trim();

    let bytes: Vec<u8> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid JSON format: {}", e)))?
    } else {
        bs58::decode(trimmed)
            .into_vec()
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid base58: {}", e)))?
    };

    keypair_from_bytes(&bytes)
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, WalletError> {
    match bytes.len() {
        64 => Keypair::try_from(bytes).map_err(|e| WalletError::InvalidKeypair(e.to_string())),
        32 => {
            let mut seed = [0u8; 32];
            seed.copy_from_slice(bytes);
            Ok(Keypair::new_from_array(seed))
        }
        n => Err(WalletError::InvalidKeypair(format!("Expected 64 or 32 bytes, got {}", n))),
    }
}

// endregion: --- Keypair wallet

// region: --- Watch-only wallet

pub struct WatchOnlyWallet {
    pubkey: Pubkey,
}

impl WatchOnlyWallet {
    pub fn parse(address: &str) -> Result<Self, WalletError> {
        let pubkey = Pubkey::from_str(address.trim())
            .map_err(|e| WalletError::InvalidKeypair(format!("Invalid address: {}", e)))?;
        Ok(Self { pubkey })
    }
}

impl WalletAdapter for WatchOnlyWallet {
    fn pubkey(&self) -> Pubkey {
        self.pubkey
    }

    fn kind(&self) -> WalletKind {
        WalletKind::WatchOnly
    }

    fn sign(&self, _transaction: VersionedTransaction) -> Result<VersionedTransaction, WalletError> {
        Err(WalletError::WatchOnly)
    }
}

// endregion: --- Watch-only wallet

// region: --- Connector

/// Where a connection came from, kept so it can be re-established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSource {
    KeypairFile(PathBuf),
    WatchOnly(String),
}

/// Holds at most one active wallet connection.
#[derive(Default)]
pub struct WalletConnector {
    active: Option<Arc<dyn WalletAdapter>>,
    last_source: Option<WalletSource>,
}

impl WalletConnector {
    /// Connect from `source`, replacing any existing connection.
    pub fn connect(&mut self, source: WalletSource) -> Result<Pubkey, WalletError> {
        let adapter: Arc<dyn WalletAdapter> = match &source {
            WalletSource::KeypairFile(path) => Arc::new(KeypairWallet::from_file(path)?),
            WalletSource::WatchOnly(address) => Arc::new(WatchOnlyWallet::parse(address)?),
        };
        let pubkey = adapter.pubkey();
        self.active = Some(adapter);
        self.last_source = Some(source);
        Ok(pubkey)
    }

    /// Connect again from the most recent source.
    pub fn reconnect(&mut self) -> Result<Pubkey, WalletError> {
        let source = self.last_source.clone().ok_or(WalletError::NoWallet)?;
        debug!("Reconnecting wallet from {:?}", source);
        self.connect(source)
    }

    pub fn disconnect(&mut self) {
        if let Some(adapter) = self.active.take() {
            info!("Wallet {} disconnected", adapter.pubkey());
        }
    }

    /// True when a previous connection can be re-established.
    pub fn can_reconnect(&self) -> bool {
        self.last_source.is_some()
    }

    pub fn public_key(&self) -> Option<Pubkey> {
        self.active.as_ref().map(|a| a.pubkey())
    }

    pub fn adapter(&self) -> Option<Arc<dyn WalletAdapter>> {
        self.active.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    pub fn can_sign(&self) -> bool {
        self.active.as_ref().map(|a| a.kind() == WalletKind::Keypair).unwrap_or(false)
    }
}

// endregion: --- Connector

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::hash::Hash;
    use solana_sdk::message::{Message, VersionedMessage};
    use solana_sdk::signature::Signature;

    fn temp_keypair_file(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dex-dashboard-test-{}.json", Pubkey::new_unique()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_json_and_base58_keypairs() {
        let keypair = Keypair::new();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        assert_eq!(parse_keypair(&json).unwrap().pubkey(), keypair.pubkey());

        let b58 = bs58::encode(keypair.to_bytes()).into_string();
        assert_eq!(parse_keypair(&b58).unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_parse_seed_and_bad_lengths() {
        let seed = [7u8; 32];
        let json = serde_json::to_string(&seed.to_vec()).unwrap();
        assert_eq!(parse_keypair(&json).unwrap().pubkey(), Keypair::new_from_array(seed).pubkey());

        assert!(matches!(parse_keypair("[1,2,3]"), Err(WalletError::InvalidKeypair(_))));
        assert!(matches!(parse_keypair("not base58 0OIl"), Err(WalletError::InvalidKeypair(_))));
    }

    #[test]
    fn test_connector_lifecycle() {
        let keypair = Keypair::new();
        let path = temp_keypair_file(&serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap());
        let mut connector = WalletConnector::default();

        assert!(matches!(connector.reconnect(), Err(WalletError::NoWallet)));
        assert!(!connector.can_reconnect());

        let pubkey = connector.connect(WalletSource::KeypairFile(path.clone())).unwrap();
        assert_eq!(pubkey, keypair.pubkey());
        assert!(connector.can_sign());

        connector.disconnect();
        assert!(connector.public_key().is_none());
        assert_eq!(connector.reconnect().unwrap(), keypair.pubkey());

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut connector = WalletConnector::default();
        let err = connector
            .connect(WalletSource::KeypairFile(PathBuf::from("/nonexistent/id.json")))
            .unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
        assert!(!connector.is_connected());
    }

    #[test]
    fn test_watch_only_cannot_sign() {
        let address = Pubkey::new_unique();
        let mut connector = WalletConnector::default();
        connector.connect(WalletSource::WatchOnly(address.to_string())).unwrap();
        assert!(!connector.can_sign());

        let message = VersionedMessage::Legacy(Message::new(&[], Some(&address)));
        let tx = VersionedTransaction { signatures: vec![Signature::default()], message };
        let err = connector.adapter().unwrap().sign(tx).unwrap_err();
        assert!(matches!(err, WalletError::WatchOnly));
    }

    #[test]
    fn test_keypair_wallet_signs() {
        let keypair = Keypair::new();
        let payer = keypair.pubkey();
        let wallet = KeypairWallet::new(keypair);

        let mut message = Message::new(&[], Some(&payer));
        message.recent_blockhash = Hash::new_unique();
        let tx = VersionedTransaction { signatures: vec![Signature::default()], message: VersionedMessage::Legacy(message) };

        let signed = wallet.sign(tx).unwrap();
        assert_ne!(signed.signatures[0], Signature::default());
    }
}
