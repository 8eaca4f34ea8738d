//! Ecosystem-typed account and contract addresses
//!
//! Each ecosystem treats addresses with different lengths and formats, so a
//! single gateway unifies them: [`Address::from_bytes`] and
//! [`Address::from_string`] validate the input against the rules of the
//! requested ecosystem and return the matching specialized variant. Bitcoin
//! and unrecognized ecosystems fall back to [`GenericAddress`], which accepts
//! any non-empty payload.
//!
//! Addresses are equal when both their ecosystem tag and their bytes match; a
//! generic wrapper around a specialized value compares equal to it. Values
//! with identical bytes but different ecosystems are never equal.

mod cosmos;
mod evm;
mod generic;
mod solana;
mod starknet;
mod sui;

pub use cosmos::{CosmosAddress, COSMOS_SDK_ADDRESS_LENGTH, COSMWASM_ADDRESS_LENGTH};
pub use evm::{EvmAddress, EVM_ADDRESS_LENGTH};
pub use generic::GenericAddress;
pub use solana::{SolanaAddress, SOLANA_ADDRESS_LENGTH};
pub use starknet::{StarknetAddress, STARKNET_ADDRESS_LENGTH};
pub use sui::{SuiAddress, SUI_ADDRESS_LENGTH};

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::trace;

use crate::ecosystem::Ecosystem;

/// Errors produced while constructing or converting addresses.
///
/// The enum itself is the general invalid-address category; variants carry
/// the specific cause, so callers can match at either level.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("{ecosystem} address invalid: wrong length: expected {expected} bytes, got {actual}")]
    Length {
        ecosystem: Ecosystem,
        expected: usize,
        actual: usize,
    },

    #[error("evm address invalid: wrong length: expected at least {expected} bytes, got {actual}")]
    MinLength { expected: usize, actual: usize },

    #[error("cosmos address invalid: wrong length: expected {sdk} or {wasm} bytes, got {actual}")]
    CosmosLength {
        sdk: usize,
        wasm: usize,
        actual: usize,
    },

    #[error("evm address invalid: truncated bytes are not zeroes")]
    TruncationRejected,

    #[error("address invalid: empty input")]
    EmptyAddress,

    #[error("{ecosystem} address invalid: hex decoding error: {source}")]
    Hex {
        ecosystem: Ecosystem,
        #[source]
        source: hex::FromHexError,
    },

    #[error("solana address invalid: base58 decoding error: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("wire buffer too small: need {expected} bytes, got {actual}")]
    Buffer { expected: usize, actual: usize },
}

/// Operations every address variant provides.
///
/// Equality requires both the ecosystem tag and the byte content to match;
/// comparisons across ecosystems are always false regardless of the bytes.
pub trait AddressOps {
    /// Borrow of the address bytes in the length and format of the ecosystem
    fn as_bytes(&self) -> &[u8];

    /// Ecosystem the address belongs to
    fn ecosystem(&self) -> Ecosystem;

    /// Copy of the address bytes, safe to modify
    fn bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Hex encoding of the address bytes without leading `0x`
    fn hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Length of the address in bytes
    fn length(&self) -> usize {
        self.as_bytes().len()
    }

    /// Reports whether the other address has the same ecosystem and bytes
    fn equal(&self, other: &dyn AddressOps) -> bool {
        self.ecosystem() == other.ecosystem() && self.as_bytes() == other.as_bytes()
    }
}

/// Hex-decodes address text, attributing failures to the given ecosystem
pub(crate) fn decode_hex(s: &str, ecosystem: Ecosystem) -> Result<Vec<u8>, AddressError> {
    hex::decode(s.strip_prefix("0x").unwrap_or(s))
        .map_err(|source| AddressError::Hex { ecosystem, source })
}

/// An address of any supported or unknown ecosystem.
///
/// Comparison and hashing use the `(ecosystem tag, bytes)` pair, never the
/// variant that holds them.
#[derive(Debug, Clone)]
pub enum Address {
    Evm(EvmAddress),
    Sui(SuiAddress),
    Solana(SolanaAddress),
    Cosmos(CosmosAddress),
    Starknet(StarknetAddress),
    Generic(GenericAddress),
}

impl Address {
    /// Creates an address from raw bytes, validated against the rules of the
    /// given ecosystem.
    ///
    /// EVM accepts slices of at least 20 bytes whose excess leading bytes are
    /// zero; Sui, Solana and Starknet require exactly 32 bytes; Cosmos
    /// accepts 20 or 32 bytes and canonicalizes zero-padded 32-byte values;
    /// Bitcoin and unrecognized ecosystems wrap any non-empty payload
    /// generically.
    pub fn from_bytes(input: &[u8], ecosystem: Ecosystem) -> Result<Self, AddressError> {
        match ecosystem {
            Ecosystem::Evm => EvmAddress::truncating(input).map(Address::Evm),
            Ecosystem::Sui => SuiAddress::from_bytes(input).map(Address::Sui),
            Ecosystem::Solana => SolanaAddress::from_bytes(input).map(Address::Solana),
            Ecosystem::Cosmos => CosmosAddress::from_bytes(input).map(Address::Cosmos),
            Ecosystem::Starknet => StarknetAddress::from_bytes(input).map(Address::Starknet),
            other => {
                trace!(tag = other.tag(), "no specialized address type for ecosystem, using generic address");
                GenericAddress::new(input, other).map(Address::Generic)
            }
        }
    }

    /// Creates an address from its textual form: base58 for Solana, hex with
    /// optional `0x` prefix (case-insensitive) for every other ecosystem
    pub fn from_string(address: &str, ecosystem: Ecosystem) -> Result<Self, AddressError> {
        if ecosystem == Ecosystem::Solana {
            return SolanaAddress::from_base58(address).map(Address::Solana);
        }
        let decoded = decode_hex(address, ecosystem)?;
        Self::from_bytes(&decoded, ecosystem)
    }

    /// The all-zero address of the canonical length for the ecosystem,
    /// used as a well-known sentinel (20 bytes for EVM and Cosmos, 32 for
    /// the others)
    pub fn zero(ecosystem: Ecosystem) -> Self {
        match ecosystem {
            Ecosystem::Evm => Address::Evm(EvmAddress([0u8; EVM_ADDRESS_LENGTH])),
            Ecosystem::Sui => Address::Sui(SuiAddress([0u8; SUI_ADDRESS_LENGTH])),
            Ecosystem::Solana => Address::Solana(SolanaAddress([0u8; SOLANA_ADDRESS_LENGTH])),
            Ecosystem::Cosmos => Address::Cosmos(CosmosAddress {
                inner: vec![0u8; COSMOS_SDK_ADDRESS_LENGTH],
            }),
            Ecosystem::Starknet => {
                Address::Starknet(StarknetAddress([0u8; STARKNET_ADDRESS_LENGTH]))
            }
            other => Address::Generic(GenericAddress {
                ecosystem: other,
                inner: vec![0u8; 32],
            }),
        }
    }

    fn as_ops(&self) -> &dyn AddressOps {
        match self {
            Address::Evm(a) => a,
            Address::Sui(a) => a,
            Address::Solana(a) => a,
            Address::Cosmos(a) => a,
            Address::Starknet(a) => a,
            Address::Generic(a) => a,
        }
    }
}

impl AddressOps for Address {
    fn as_bytes(&self) -> &[u8] {
        self.as_ops().as_bytes()
    }

    fn ecosystem(&self) -> Ecosystem {
        self.as_ops().ecosystem()
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other.as_ops())
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pair of tag and bytes, never the variant discriminant
        self.ecosystem().tag().hash(state);
        self.as_bytes().hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Evm(a) => a.fmt(f),
            Address::Sui(a) => a.fmt(f),
            Address::Solana(a) => a.fmt(f),
            Address::Cosmos(a) => a.fmt(f),
            Address::Starknet(a) => a.fmt(f),
            Address::Generic(a) => a.fmt(f),
        }
    }
}

impl From<EvmAddress> for Address {
    fn from(a: EvmAddress) -> Self {
        Address::Evm(a)
    }
}

impl From<SuiAddress> for Address {
    fn from(a: SuiAddress) -> Self {
        Address::Sui(a)
    }
}

impl From<SolanaAddress> for Address {
    fn from(a: SolanaAddress) -> Self {
        Address::Solana(a)
    }
}

impl From<CosmosAddress> for Address {
    fn from(a: CosmosAddress) -> Self {
        Address::Cosmos(a)
    }
}

impl From<StarknetAddress> for Address {
    fn from(a: StarknetAddress) -> Self {
        Address::Starknet(a)
    }
}

impl From<GenericAddress> for Address {
    fn from(a: GenericAddress) -> Self {
        Address::Generic(a)
    }
}

#[derive(Serialize, Deserialize)]
struct AddressRepr {
    ecosystem: u8,
    data: String,
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AddressRepr {
            ecosystem: self.ecosystem().tag(),
            data: self.hex(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = AddressRepr::deserialize(deserializer)?;
        let ecosystem = Ecosystem::from(repr.ecosystem);
        let decoded = decode_hex(&repr.data, ecosystem).map_err(serde::de::Error::custom)?;
        Address::from_bytes(&decoded, ecosystem).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_factory_dispatches_by_ecosystem() {
        let evm = Address::from_string(
            "0x8236a87084f8B84306f72007F36F2618A5634494",
            Ecosystem::Evm,
        )
        .unwrap();
        assert!(matches!(evm, Address::Evm(_)));
        assert_eq!(evm.to_string(), "0x8236a87084f8b84306f72007f36f2618a5634494");
        assert_eq!(evm.length(), 20);

        let sui = Address::from_string(
            "0xbfde966bacd4260852155f7b523ef157f0b75a0e1e8a0784e463c3ef0bb69deb",
            Ecosystem::Sui,
        )
        .unwrap();
        assert!(matches!(sui, Address::Sui(_)));
        assert_eq!(sui.length(), 32);

        let solana = Address::from_string(
            "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T",
            Ecosystem::Solana,
        )
        .unwrap();
        assert!(matches!(solana, Address::Solana(_)));
        assert_eq!(solana.length(), 32);

        let generic = Address::from_string("0x010203", Ecosystem::Other(17)).unwrap();
        assert!(matches!(generic, Address::Generic(_)));
        assert_eq!(generic.ecosystem(), Ecosystem::Other(17));
    }

    #[test]
    fn test_bitcoin_falls_back_to_generic() {
        let addr = Address::from_bytes(&[0x01; 21], Ecosystem::Bitcoin).unwrap();
        assert!(matches!(addr, Address::Generic(_)));
        assert_eq!(addr.ecosystem(), Ecosystem::Bitcoin);
        assert_eq!(addr.length(), 21);
    }

    #[test]
    fn test_cross_ecosystem_inequality() {
        let bytes = [0x11u8; 32];
        let sui = Address::from_bytes(&bytes, Ecosystem::Sui).unwrap();
        let starknet = Address::from_bytes(&bytes, Ecosystem::Starknet).unwrap();
        assert_eq!(sui.bytes(), starknet.bytes());
        assert_ne!(sui, starknet);
        assert!(!sui.equal(&starknet));
    }

    #[test]
    fn test_zero_addresses() {
        let evm = Address::zero(Ecosystem::Evm);
        assert_eq!(evm.length(), 20);
        assert_eq!(evm.to_string(), format!("0x{}", "00".repeat(20)));

        let sui = Address::zero(Ecosystem::Sui);
        assert_eq!(sui.length(), 32);

        let cosmos = Address::zero(Ecosystem::Cosmos);
        assert_eq!(cosmos.length(), 20);

        let other = Address::zero(Ecosystem::Other(99));
        assert_eq!(other.length(), 32);
        assert_eq!(other.ecosystem(), Ecosystem::Other(99));

        // The canonical zero sentinel equals the one parsed from bytes
        assert_eq!(
            Address::from_bytes(&[0u8; 20], Ecosystem::Evm).unwrap(),
            Address::zero(Ecosystem::Evm)
        );
    }

    #[test]
    fn test_usable_as_map_key() {
        let a = Address::from_string(
            "0x8236a87084f8B84306f72007F36F2618A5634494",
            Ecosystem::Evm,
        )
        .unwrap();
        let b = Address::from_string(&a.to_string(), Ecosystem::Evm).unwrap();

        let mut m = HashMap::new();
        m.insert(a.clone(), "ok");
        assert_eq!(m[&a], "ok");
        assert_eq!(m[&b], "ok");
    }

    #[test]
    fn test_serde_roundtrip() {
        let addr = Address::from_string(
            "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T",
            Ecosystem::Solana,
        )
        .unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);

        let generic = Address::from_bytes(&[1, 2, 3], Ecosystem::Other(42)).unwrap();
        let json = serde_json::to_string(&generic).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(generic, back);
    }
}
