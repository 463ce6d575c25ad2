//! # Address Lookup Tables
//!
//! Decoding of address lookup table accounts referenced by v0 transactions.
//!
//! Account layout: a 56-byte header (`u32` state discriminator, deactivation
//! slot, last extended slot, start index, optional authority, padding)
//! followed by the table's addresses, 32 bytes each.

use super::error::{SwapError, SwapResult};
use crate::rpc::RpcGateway;
use solana_sdk::message::VersionedMessage;
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

pub const LOOKUP_TABLE_META_SIZE: usize = 56;

/// Discriminator of an initialized lookup table.
const LOOKUP_TABLE_STATE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    pub key: Pubkey,
    pub addresses: Vec<Pubkey>,
}

impl LookupTable {
    /// Decode raw account data.
    pub fn decode(key: Pubkey, data: &[u8]) -> SwapResult<Self> {
        let fail = |reason: String| SwapError::LookupTable { address: key.to_string(), reason };

        if data.len() < LOOKUP_TABLE_META_SIZE {
            return Err(fail(format!("account data is {} bytes, shorter than the table header", data.len())));
        }
        let mut discriminator = [0u8; 4];
        discriminator.copy_from_slice(&data[..4]);
        if u32::from_le_bytes(discriminator) != LOOKUP_TABLE_STATE {
            return Err(fail("account is not an initialized lookup table".to_string()));
        }

        let body = &data[LOOKUP_TABLE_META_SIZE..];
        if body.len() % 32 != 0 {
            return Err(fail(format!("{} address bytes is not a multiple of 32", body.len())));
        }

        let addresses = body
            .chunks_exact(32)
            .map(|chunk| {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(chunk);
                Pubkey::new_from_array(bytes)
            })
            .collect();

        Ok(Self { key, addresses })
    }

    fn check_index(&self, index: u8) -> SwapResult<()> {
        if usize::from(index) >= self.addresses.len() {
            return Err(SwapError::LookupTable {
                address: self.key.to_string(),
                reason: format!("index {} out of range for {} addresses", index, self.addresses.len()),
            });
        }
        Ok(())
    }
}

/// Read and validate every lookup table `message` references.
///
/// Legacy messages reference none.
pub async fn resolve_lookup_tables(rpc: &dyn RpcGateway, message: &VersionedMessage) -> SwapResult<Vec<LookupTable>> {
    let Some(lookups) = message.address_table_lookups() else {
        return Ok(Vec::new());
    };

    let mut tables = Vec::with_capacity(lookups.len());
    for lookup in lookups {
        let account = rpc
            .get_account(&lookup.account_key)
            .await?
            .ok_or_else(|| SwapError::LookupTable {
                address: lookup.account_key.to_string(),
                reason: "account not found".to_string(),
            })?;

        let table = LookupTable::decode(lookup.account_key, &account.data)?;
        for index in lookup.writable_indexes.iter().chain(&lookup.readonly_indexes) {
            table.check_index(*index)?;
        }
        debug!("Resolved lookup table {} ({} addresses)", table.key, table.addresses.len());
        tables.push(table);
    }

    Ok(tables)
}

#[cfg(test)]
pub(crate) fn encode_table(addresses: &[Pubkey]) -> Vec<u8> {
    let mut data = vec![0u8; LOOKUP_TABLE_META_SIZE];
    data[..4].copy_from_slice(&LOOKUP_TABLE_STATE.to_le_bytes());
    data[4..12].copy_from_slice(&u64::MAX.to_le_bytes());
    for address in addresses {
        data.extend_from_slice(address.as_ref());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::AccountSnapshot;
    use crate::testing::MockRpc;
    use solana_sdk::hash::Hash;
    use solana_sdk::message::v0::{self, MessageAddressTableLookup};
    use solana_sdk::message::{Message, MessageHeader};

    fn v0_message(table: Pubkey, writable: Vec<u8>, readonly: Vec<u8>) -> VersionedMessage {
        VersionedMessage::V0(v0::Message {
            header: MessageHeader {
                num_required_signatures: 1,
                num_readonly_signed_accounts: 0,
                num_readonly_unsigned_accounts: 0,
            },
            account_keys: vec![Pubkey::new_unique()],
            recent_blockhash: Hash::default(),
            instructions: vec![],
            address_table_lookups: vec![MessageAddressTableLookup {
                account_key: table,
                writable_indexes: writable,
                readonly_indexes: readonly,
            }],
        })
    }

    #[test]
    fn test_decode_addresses() {
        let addresses = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let table = LookupTable::decode(Pubkey::new_unique(), &encode_table(&addresses)).unwrap();
        assert_eq!(table.addresses, addresses);
    }

    #[test]
    fn test_decode_rejects_short_and_misaligned_data() {
        let key = Pubkey::new_unique();
        assert!(matches!(LookupTable::decode(key, &[1, 0, 0, 0]), Err(SwapError::LookupTable { .. })));

        let mut misaligned = encode_table(&[Pubkey::new_unique()]);
        misaligned.push(0);
        assert!(matches!(LookupTable::decode(key, &misaligned), Err(SwapError::LookupTable { .. })));

        let mut uninitialized = encode_table(&[]);
        uninitialized[0] = 0;
        assert!(LookupTable::decode(key, &uninitialized).is_err());
    }

    #[tokio::test]
    async fn test_resolve_checks_indexes() {
        let rpc = MockRpc::default();
        let table = Pubkey::new_unique();
        rpc.insert_account(
            table,
            AccountSnapshot { lamports: 1, owner: Pubkey::new_unique(), data: encode_table(&[Pubkey::new_unique(), Pubkey::new_unique()]) },
        );

        let ok = resolve_lookup_tables(&rpc, &v0_message(table, vec![0], vec![1])).await.unwrap();
        assert_eq!(ok.len(), 1);

        let err = resolve_lookup_tables(&rpc, &v0_message(table, vec![2], vec![])).await.unwrap_err();
        assert!(matches!(err, SwapError::LookupTable { .. }));
    }

    #[tokio::test]
    async fn test_missing_table_and_legacy_message() {
        let rpc = MockRpc::default();
        let err = resolve_lookup_tables(&rpc, &v0_message(Pubkey::new_unique(), vec![0], vec![]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("account not found"));

        let legacy = VersionedMessage::Legacy(Message::new(&[], Some(&Pubkey::new_unique())));
        assert!(resolve_lookup_tables(&rpc, &legacy).await.unwrap().is_empty());
    }
}
