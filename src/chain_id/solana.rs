//! Solana chain ids
//!
//! Solana networks are identified by their base58 genesis hash. The full
//! 32-byte hash is used as-is with byte 0 overwritten by the ecosystem tag.
//! Overwriting discards one byte of hash entropy: two genesis hashes that
//! differ only in their first byte would collide. This is a deliberate
//! tradeoff to keep the tagging convention uniform across ecosystems.

use super::{ChainIdError, ChainIdOps, CHAIN_ID_LENGTH};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of a Solana genesis hash
pub const SOLANA_GENESIS_HASH_LENGTH: usize = 32;

/// Chain id of a Solana network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolanaChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl SolanaChainId {
    /// Creates a Solana chain id from the base58 genesis hash of the network
    pub fn new(genesis_hash: &str) -> Result<Self, ChainIdError> {
        let decoded = bs58::decode(genesis_hash).into_vec()?;
        if decoded.len() != SOLANA_GENESIS_HASH_LENGTH {
            return Err(ChainIdError::Length {
                expected: SOLANA_GENESIS_HASH_LENGTH,
                actual: decoded.len(),
            });
        }
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner.copy_from_slice(&decoded);
        inner[0] = Ecosystem::Solana.tag();
        Ok(Self(inner))
    }

    /// Solana mainnet-beta
    pub const fn mainnet() -> Self {
        Self([
            0x02, 0x29, 0x69, 0x98, 0xa6, 0xf8, 0xe2, 0xa7, 0x84, 0xdb, 0x5d, 0x9f, 0x95, 0xe1,
            0x8f, 0xc2, 0x3f, 0x70, 0x44, 0x1a, 0x10, 0x39, 0x44, 0x68, 0x01, 0x08, 0x98, 0x79,
            0xb0, 0x8c, 0x7e, 0xf0,
        ])
    }

    /// Solana devnet
    pub const fn devnet() -> Self {
        Self([
            0x02, 0x59, 0xdb, 0x50, 0x80, 0xfc, 0x2c, 0x6d, 0x3b, 0xcf, 0x7c, 0xa9, 0x07, 0x12,
            0xd3, 0xc2, 0xe5, 0xe6, 0xc2, 0x8f, 0x27, 0xf0, 0xdf, 0xbb, 0x99, 0x53, 0xbd, 0xb0,
            0x89, 0x4c, 0x03, 0xab,
        ])
    }
}

impl ChainIdOps for SolanaChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for SolanaChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
