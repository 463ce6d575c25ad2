//! # Token Metadata
//!
//! Metaplex token metadata lookups for tokens missing from the known table.
//!
//! The metadata account lives at the PDA `["metadata", program, mint]` under
//! the Token Metadata program. Only the fixed header is decoded: key, update
//! authority, mint, then the borsh strings `name`, `symbol` and `uri`. The
//! program pads those strings with NUL bytes, so every field is trimmed.

use crate::rpc::RpcGateway;
use borsh::BorshDeserialize;
use lib_utils::mint_placeholder;
use solana_sdk::pubkey::Pubkey;
use tracing::{debug, warn};

/// Metaplex Token Metadata program.
pub const METADATA_PROGRAM_ID: Pubkey = Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Account key tag of a `MetadataV1` account.
const KEY_METADATA_V1: u8 = 4;

/// Display metadata for a mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub mint: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// False when the values are a placeholder rather than decoded on-chain data.
    pub has_valid: bool,
}

impl TokenMetadata {
    /// Placeholder shown when no metadata could be read.
    pub fn placeholder(mint: &str) -> Self {
        Self {
            mint: mint.to_string(),
            name: "Unknown".to_string(),
            symbol: mint_placeholder(mint),
            uri: String::new(),
            has_valid: false,
        }
    }
}

#[derive(BorshDeserialize)]
struct MetadataHeader {
    key: u8,
    _update_authority: [u8; 32],
    _mint: [u8; 32],
    name: String,
    symbol: String,
    uri: String,
}

/// Metadata account address for `mint`.
pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    let (address, _bump) = Pubkey::find_program_address(
        &[b"metadata", METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &METADATA_PROGRAM_ID,
    );
    address
}

/// Decode `(name, symbol, uri)` from raw metadata account data.
///
/// Trailing account bytes after the header are ignored.
pub fn decode_metadata(data: &[u8]) -> Option<(String, String, String)> {
    let mut cursor = data;
    let header = MetadataHeader::deserialize(&mut cursor).ok()?;
    if header.key != KEY_METADATA_V1 {
        return None;
    }
    Some((clean(&header.name), clean(&header.symbol), clean(&header.uri)))
}

fn clean(value: &str) -> String {
    value.trim_matches(|c: char| c == '\0' || c.is_whitespace()).to_string()
}

/// Read the metadata for `mint`, falling back to a placeholder on any failure.
pub async fn fetch_metadata(rpc: &dyn RpcGateway, mint: &Pubkey) -> TokenMetadata {
    let mint_str = mint.to_string();
    let address = metadata_address(mint);

    let account = match rpc.get_account(&address).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            debug!("No metadata account for {}", mint_str);
            return TokenMetadata::placeholder(&mint_str);
        }
        Err(e) => {
            warn!("Metadata fetch failed for {}: {}", mint_str, e);
            return TokenMetadata::placeholder(&mint_str);
        }
    };

    if account.owner != METADATA_PROGRAM_ID {
        warn!("Metadata account for {} has unexpected owner {}", mint_str, account.owner);
        return TokenMetadata::placeholder(&mint_str);
    }

    match decode_metadata(&account.data) {
        Some((name, symbol, uri)) if !symbol.is_empty() || !name.is_empty() => {
            let symbol = if symbol.is_empty() { mint_placeholder(&mint_str) } else { symbol };
            let name = if name.is_empty() { "Unknown".to_string() } else { name };
            TokenMetadata { mint: mint_str, name, symbol, uri, has_valid: true }
        }
        _ => {
            debug!("Undecodable metadata for {}", mint_str);
            TokenMetadata::placeholder(&mint_str)
        }
    }
}

#[cfg(test)]
pub(crate) fn encode_metadata(name: &str, symbol: &str, uri: &str) -> Vec<u8> {
    fn put_str(buf: &mut Vec<u8>, value: &str) {
        buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
        buf.extend_from_slice(value.as_bytes());
    }

    let mut data = vec![KEY_METADATA_V1];
    data.extend_from_slice(&[1u8; 32]);
    data.extend_from_slice(&[2u8; 32]);
    put_str(&mut data, name);
    put_str(&mut data, symbol);
    put_str(&mut data, uri);
    // seller fee and trailing fields, never read
    data.extend_from_slice(&[0u8; 16]);
    data
}
