//! Canonical 32-byte chain identifiers
//!
//! A chain id is exactly [`CHAIN_ID_LENGTH`] bytes, big-endian: byte 0 is the
//! [`Ecosystem`] tag, bytes 1..31 are an ecosystem-specific discriminator.
//! The [`ChainId`] factory inspects the tag byte and returns the matching
//! specialized variant, falling back to [`GenericChainId`] for tags without a
//! registered decoder, so construction never fails on an unsupported
//! ecosystem once the length check passes.
//!
//! Equality and hashing are defined over the canonical 32 bytes only, never
//! over the variant that holds them: two different concrete types carrying
//! identical bytes compare equal and hash identically, so every variant is
//! usable as the same map key.

mod bitcoin;
mod cosmos;
mod evm;
mod generic;
mod solana;
mod starknet;
mod sui;

pub use bitcoin::BitcoinChainId;
pub use cosmos::CosmosChainId;
pub use evm::EvmChainId;
pub use generic::GenericChainId;
pub use solana::SolanaChainId;
pub use starknet::{StarknetChainId, MAX_STARKNET_CHAIN_ID_HEX_LENGTH};
pub use sui::{SuiChainId, SUI_IDENTIFIER_LENGTH};

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::trace;

use crate::ecosystem::Ecosystem;

/// Total length of a chain id in bytes
pub const CHAIN_ID_LENGTH: usize = 32;

/// Bytes available to distinguish a chain within an ecosystem (everything
/// after the tag byte)
pub const CHAIN_ID_PAYLOAD_LENGTH: usize = CHAIN_ID_LENGTH - 1;

/// Errors produced while constructing or converting chain ids.
///
/// The enum itself is the general invalid-chain-id category; variants carry
/// the specific cause, so callers can match at either level.
#[derive(Debug, Error)]
pub enum ChainIdError {
    #[error("invalid chain id: wrong length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid chain id: length above maximum: at most {max}, got {actual}")]
    MaxLength { max: usize, actual: usize },

    #[error("invalid chain id: unsupported ecosystem: {0}")]
    UnsupportedEcosystem(u8),

    #[error("invalid chain id: hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid chain id: base58 decoding error: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("cannot create chain id from empty cosmos chain id")]
    EmptyCosmosChainId,

    #[error("invalid cosmos chain id {0:?}: expected `name-counter` format")]
    InvalidCosmosChainId(String),
}

/// Operations every chain id variant provides.
///
/// All behavior derives from the canonical byte array, so specialized and
/// generic variants are interchangeable wherever this trait is accepted.
pub trait ChainIdOps {
    /// Borrow of the canonical 32 bytes (big-endian)
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH];

    /// Copy of the bytes of the chain id
    fn bytes(&self) -> Vec<u8> {
        self.as_array().to_vec()
    }

    /// Copy of the bytes of the chain id as a fixed-size array
    fn fixed_bytes(&self) -> [u8; CHAIN_ID_LENGTH] {
        *self.as_array()
    }

    /// Hex encoding without the leading `0x`
    fn hex(&self) -> String {
        hex::encode(self.as_array())
    }

    /// Ecosystem the chain id belongs to, read from the tag byte
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::from(self.as_array()[0])
    }

    /// Byte-exact comparison, regardless of which concrete variant holds the
    /// other value
    fn equal(&self, other: &dyn ChainIdOps) -> bool {
        self.as_array() == other.as_array()
    }
}

/// Copies the input into a fixed array, enforcing the canonical length
pub(crate) fn copy_fixed(input: &[u8]) -> Result<[u8; CHAIN_ID_LENGTH], ChainIdError> {
    if input.len() != CHAIN_ID_LENGTH {
        return Err(ChainIdError::Length {
            expected: CHAIN_ID_LENGTH,
            actual: input.len(),
        });
    }
    let mut out = [0u8; CHAIN_ID_LENGTH];
    out.copy_from_slice(input);
    Ok(out)
}

/// Hex-decodes a chain id string, accepting an optional `0x` prefix
pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
}

/// A chain id of any supported or unknown ecosystem.
///
/// Produced by [`ChainId::from_bytes`] and [`ChainId::from_hex`], which
/// dispatch on the tag byte. Comparison and hashing ignore the variant and
/// use the canonical bytes only.
#[derive(Debug, Clone, Copy)]
pub enum ChainId {
    Evm(EvmChainId),
    Sui(SuiChainId),
    Solana(SolanaChainId),
    Cosmos(CosmosChainId),
    Starknet(StarknetChainId),
    Bitcoin(BitcoinChainId),
    Generic(GenericChainId),
}

impl ChainId {
    /// Creates a chain id from its big-endian bytes.
    ///
    /// The only failure mode is a length other than [`CHAIN_ID_LENGTH`]:
    /// unrecognized ecosystem tags produce a [`ChainId::Generic`] value.
    pub fn from_bytes(input: &[u8]) -> Result<Self, ChainIdError> {
        let inner = copy_fixed(input)?;
        Ok(Self::from_fixed(inner))
    }

    /// Creates a chain id from its hex encoding, with or without leading `0x`
    pub fn from_hex(s: &str) -> Result<Self, ChainIdError> {
        let decoded = decode_hex(s)?;
        Self::from_bytes(&decoded)
    }

    pub(crate) fn from_fixed(inner: [u8; CHAIN_ID_LENGTH]) -> Self {
        match Ecosystem::from(inner[0]) {
            Ecosystem::Evm => ChainId::Evm(EvmChainId(inner)),
            Ecosystem::Sui => ChainId::Sui(SuiChainId(inner)),
            Ecosystem::Solana => ChainId::Solana(SolanaChainId(inner)),
            Ecosystem::Cosmos => ChainId::Cosmos(CosmosChainId(inner)),
            Ecosystem::Starknet => ChainId::Starknet(StarknetChainId(inner)),
            Ecosystem::Bitcoin => ChainId::Bitcoin(BitcoinChainId(inner)),
            other => {
                trace!(tag = other.tag(), "no specialized decoder for ecosystem, using generic chain id");
                ChainId::Generic(GenericChainId(inner))
            }
        }
    }
}

impl ChainIdOps for ChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        match self {
            ChainId::Evm(id) => id.as_array(),
            ChainId::Sui(id) => id.as_array(),
            ChainId::Solana(id) => id.as_array(),
            ChainId::Cosmos(id) => id.as_array(),
            ChainId::Starknet(id) => id.as_array(),
            ChainId::Bitcoin(id) => id.as_array(),
            ChainId::Generic(id) => id.as_array(),
        }
    }
}

impl PartialEq for ChainId {
    fn eq(&self, other: &Self) -> bool {
        self.as_array() == other.as_array()
    }
}

impl Eq for ChainId {}

impl Hash for ChainId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Canonical bytes only, never the variant discriminant
        self.as_array().hash(state);
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}

impl From<EvmChainId> for ChainId {
    fn from(id: EvmChainId) -> Self {
        ChainId::Evm(id)
    }
}

impl From<SuiChainId> for ChainId {
    fn from(id: SuiChainId) -> Self {
        ChainId::Sui(id)
    }
}

impl From<SolanaChainId> for ChainId {
    fn from(id: SolanaChainId) -> Self {
        ChainId::Solana(id)
    }
}

impl From<CosmosChainId> for ChainId {
    fn from(id: CosmosChainId) -> Self {
        ChainId::Cosmos(id)
    }
}

impl From<StarknetChainId> for ChainId {
    fn from(id: StarknetChainId) -> Self {
        ChainId::Starknet(id)
    }
}

impl From<BitcoinChainId> for ChainId {
    fn from(id: BitcoinChainId) -> Self {
        ChainId::Bitcoin(id)
    }
}

impl From<GenericChainId> for ChainId {
    fn from(id: GenericChainId) -> Self {
        ChainId::Generic(id)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ChainId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
