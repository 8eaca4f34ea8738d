//! Sui chain ids
//!
//! Sui networks are distinguished by the first 4 bytes of their genesis
//! checkpoint digest. The identifier sits right-aligned in the last 4 bytes
//! of the chain id; the middle bytes are zero.

use super::{decode_hex, ChainIdError, ChainIdOps, CHAIN_ID_LENGTH};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of the Sui network identifier
pub const SUI_IDENTIFIER_LENGTH: usize = 4;

/// Chain id of a Sui network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl SuiChainId {
    /// Creates a Sui chain id from the hex encoding of the 4-byte network
    /// identifier. Leading `0x` is optional.
    pub fn new(identifier: &str) -> Result<Self, ChainIdError> {
        let trimmed = identifier.strip_prefix("0x").unwrap_or(identifier);
        if trimmed.len() != 2 * SUI_IDENTIFIER_LENGTH {
            return Err(ChainIdError::Length {
                expected: 2 * SUI_IDENTIFIER_LENGTH,
                actual: trimmed.len(),
            });
        }
        let decoded = decode_hex(trimmed)?;
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[0] = Ecosystem::Sui.tag();
        inner[CHAIN_ID_LENGTH - SUI_IDENTIFIER_LENGTH..].copy_from_slice(&decoded);
        Ok(Self(inner))
    }

    /// Sui mainnet (identifier 35834a8a)
    pub const fn mainnet() -> Self {
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[0] = 0x01;
        inner[28] = 0x35;
        inner[29] = 0x83;
        inner[30] = 0x4a;
        inner[31] = 0x8a;
        Self(inner)
    }

    /// Sui testnet (identifier 4c78adac)
    pub const fn testnet() -> Self {
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[0] = 0x01;
        inner[28] = 0x4c;
        inner[29] = 0x78;
        inner[30] = 0xad;
        inner[31] = 0xac;
        Self(inner)
    }

    /// The chain identifier as it is meant in the Sui ecosystem, i.e. the hex
    /// encoded least significant 4 bytes without `0x`
    pub fn identifier(&self) -> String {
        hex::encode(&self.0[CHAIN_ID_LENGTH - SUI_IDENTIFIER_LENGTH..])
    }
}

impl ChainIdOps for SuiChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for SuiChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain_id::ChainId;

    #[test]
    fn test_identifier_from_factory_input() {
        for id in ["35834a8a", "0x4c78adac"] {
            let ch = SuiChainId::new(id).unwrap();
            assert_eq!(ch.identifier(), id.strip_prefix("0x").unwrap_or(id));
        }
    }

    #[test]
    fn test_identifier_from_full_chain_id() {
        let cases = [
            (
                "0x0100000000000000000000000000000000000000000000000000000035834a8a",
                "35834a8a",
            ),
            (
                "0x010000000000000000000000000000000000000000000000000000004c78adac",
                "4c78adac",
            ),
        ];
        for (chain_id, expected) in cases {
            match ChainId::from_hex(chain_id).unwrap() {
                ChainId::Sui(sui) => assert_eq!(sui.identifier(), expected),
                other => panic!("expected Sui chain id, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_matches_predefined() {
        assert_eq!(SuiChainId::new("0x35834a8a").unwrap(), SuiChainId::mainnet());
        assert_eq!(SuiChainId::new("4c78adac").unwrap(), SuiChainId::testnet());
    }

    #[test]
    fn test_rejects_wrong_identifier_length() {
        assert!(matches!(
            SuiChainId::new("0x35834a"),
            Err(ChainIdError::Length { expected: 8, actual: 6 })
        ));
        assert!(matches!(
            SuiChainId::new("35834a8a00"),
            Err(ChainIdError::Length { expected: 8, actual: 10 })
        ));
    }
}
