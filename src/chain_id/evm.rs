//! EVM chain ids
//!
//! The discriminator is the numeric chain id of the network (EIP-155),
//! right-aligned big-endian in the payload and left-padded with zeros. Since
//! the EVM ecosystem tag is zero the whole value reads as the plain chain id.

use super::{decode_hex, ChainIdError, ChainIdOps, CHAIN_ID_LENGTH, CHAIN_ID_PAYLOAD_LENGTH};

use std::fmt;

/// Chain id of an EVM network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl EvmChainId {
    /// Creates the chain id of the EVM network with the given numeric chain id
    pub const fn new(chain_id: u64) -> Self {
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        let be = chain_id.to_be_bytes();
        let mut i = 0;
        while i < be.len() {
            inner[CHAIN_ID_LENGTH - be.len() + i] = be[i];
            i += 1;
        }
        Self(inner)
    }

    /// Creates an EVM chain id from the hex encoding of the numeric chain id.
    ///
    /// Leading `0x` is optional and odd-length inputs are accepted (`"0x038"`
    /// equals `"0x38"`). The value must fit the 31-byte payload; full 64-char
    /// inputs are accepted as long as their first byte is zero.
    pub fn from_hex(id: &str) -> Result<Self, ChainIdError> {
        let trimmed = id.strip_prefix("0x").unwrap_or(id);
        if trimmed.len() > 2 * CHAIN_ID_LENGTH {
            return Err(ChainIdError::MaxLength {
                max: 2 * CHAIN_ID_PAYLOAD_LENGTH,
                actual: trimmed.len(),
            });
        }
        let decoded = if trimmed.len() % 2 == 1 {
            decode_hex(&format!("0{trimmed}"))?
        } else {
            decode_hex(trimmed)?
        };
        if decoded.len() == CHAIN_ID_LENGTH && decoded[0] != 0 {
            return Err(ChainIdError::MaxLength {
                max: 2 * CHAIN_ID_PAYLOAD_LENGTH,
                actual: trimmed.len(),
            });
        }
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[CHAIN_ID_LENGTH - decoded.len()..].copy_from_slice(&decoded);
        Ok(Self(inner))
    }

    /// Ethereum mainnet (chain id 1)
    pub const fn ethereum() -> Self {
        Self::new(1)
    }

    /// Ethereum Sepolia testnet (chain id 11155111)
    pub const fn sepolia() -> Self {
        Self::new(0x00aa_36a7)
    }

    /// Ethereum Holesky testnet (chain id 17000)
    pub const fn holesky() -> Self {
        Self::new(0x4268)
    }

    /// Base mainnet (chain id 8453)
    pub const fn base() -> Self {
        Self::new(0x2105)
    }

    /// Base Sepolia testnet (chain id 84532)
    pub const fn base_sepolia() -> Self {
        Self::new(0x0001_4a34)
    }

    /// Binance Smart Chain mainnet (chain id 56)
    pub const fn binance_smart_chain() -> Self {
        Self::new(0x38)
    }
}

impl ChainIdOps for EvmChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for EvmChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
