//! Ecosystem tags shared by chain ids and addresses
//!
//! Each supported ecosystem is assigned a fixed numeric tag which is used as
//! the most significant byte of every chain id. Tags are stable and part of
//! the wire contract.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The family of chains sharing an address/identifier format.
///
/// The numeric tag of each variant matches the MSB of the chain id. Tags with
/// no specialized decoder are carried as [`Ecosystem::Other`]; `Other` never
/// holds a tag that has a named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Evm,
    Sui,
    Solana,
    Cosmos,
    Starknet,
    /// Sentinel for values whose ecosystem was never resolved (tag 254)
    Unknown,
    Bitcoin,
    /// Any tag without a registered decoder
    Other(u8),
}

impl Ecosystem {
    /// Numeric tag of the ecosystem, used as the MSB of chain ids
    pub const fn tag(self) -> u8 {
        match self {
            Ecosystem::Evm => 0,
            Ecosystem::Sui => 1,
            Ecosystem::Solana => 2,
            Ecosystem::Cosmos => 3,
            Ecosystem::Starknet => 4,
            Ecosystem::Unknown => 254,
            Ecosystem::Bitcoin => 255,
            Ecosystem::Other(tag) => tag,
        }
    }

    /// Reports whether a specialized decoder exists for this ecosystem.
    ///
    /// False for [`Ecosystem::Unknown`] and [`Ecosystem::Other`]; values with
    /// such tags are still representable through the generic variants.
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Ecosystem::Evm
                | Ecosystem::Sui
                | Ecosystem::Solana
                | Ecosystem::Cosmos
                | Ecosystem::Starknet
                | Ecosystem::Bitcoin
        )
    }

    /// Two-character lowercase hex encoding of the tag, used when a chain id
    /// is synthesized from a human-supplied identifier
    pub fn to_hex_byte(self) -> String {
        hex::encode([self.tag()])
    }
}

impl From<u8> for Ecosystem {
    fn from(tag: u8) -> Self {
        match tag {
            0 => Ecosystem::Evm,
            1 => Ecosystem::Sui,
            2 => Ecosystem::Solana,
            3 => Ecosystem::Cosmos,
            4 => Ecosystem::Starknet,
            254 => Ecosystem::Unknown,
            255 => Ecosystem::Bitcoin,
            other => Ecosystem::Other(other),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ecosystem::Evm => write!(f, "evm"),
            Ecosystem::Sui => write!(f, "sui"),
            Ecosystem::Solana => write!(f, "solana"),
            Ecosystem::Cosmos => write!(f, "cosmos"),
            Ecosystem::Starknet => write!(f, "starknet"),
            Ecosystem::Bitcoin => write!(f, "bitcoin"),
            // The placeholder format is a stable contract, tests assert on it
            other => write!(f, "ecosystem {}", other.tag()),
        }
    }
}

impl Serialize for Ecosystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for Ecosystem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Ecosystem::from(u8::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for tag in 0..=u8::MAX {
            assert_eq!(Ecosystem::from(tag).tag(), tag);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Ecosystem::Evm.to_string(), "evm");
        assert_eq!(Ecosystem::Sui.to_string(), "sui");
        assert_eq!(Ecosystem::Solana.to_string(), "solana");
        assert_eq!(Ecosystem::Cosmos.to_string(), "cosmos");
        assert_eq!(Ecosystem::Starknet.to_string(), "starknet");
        assert_eq!(Ecosystem::Bitcoin.to_string(), "bitcoin");
    }

    #[test]
    fn test_display_placeholder() {
        assert_eq!(Ecosystem::Other(17).to_string(), "ecosystem 17");
        assert_eq!(Ecosystem::Unknown.to_string(), "ecosystem 254");
    }

    #[test]
    fn test_is_supported() {
        assert!(Ecosystem::Evm.is_supported());
        assert!(Ecosystem::Sui.is_supported());
        assert!(Ecosystem::Solana.is_supported());
        assert!(Ecosystem::Cosmos.is_supported());
        assert!(Ecosystem::Starknet.is_supported());
        assert!(Ecosystem::Bitcoin.is_supported());
        assert!(!Ecosystem::Unknown.is_supported());
        assert!(!Ecosystem::Other(17).is_supported());
    }

    #[test]
    fn test_to_hex_byte() {
        assert_eq!(Ecosystem::Evm.to_hex_byte(), "00");
        assert_eq!(Ecosystem::Sui.to_hex_byte(), "01");
        assert_eq!(Ecosystem::Starknet.to_hex_byte(), "04");
        assert_eq!(Ecosystem::Bitcoin.to_hex_byte(), "ff");
    }

    #[test]
    fn test_serde_as_tag() {
        let json = serde_json::to_string(&Ecosystem::Starknet).unwrap();
        assert_eq!(json, "4");
        let back: Ecosystem = serde_json::from_str("255").unwrap();
        assert_eq!(back, Ecosystem::Bitcoin);
        let other: Ecosystem = serde_json::from_str("17").unwrap();
        assert_eq!(other, Ecosystem::Other(17));
    }
}
