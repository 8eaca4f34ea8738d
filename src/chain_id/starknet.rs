//! Starknet chain ids
//!
//! Starknet identifies networks with short ASCII names (`SN_MAIN`,
//! `SN_SEPOLIA`) conventionally exchanged as hex-encoded felts. Both the hex
//! form (right-aligned, zero-padded left) and the free-text name form
//! (left-aligned in the payload, zero-padded right) are accepted, capped at
//! the 31-byte payload capacity.

use super::{decode_hex, ChainIdError, ChainIdOps, CHAIN_ID_LENGTH, CHAIN_ID_PAYLOAD_LENGTH};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Maximum length of a Starknet chain id represented as a hex string.
///
/// Up to 31 bytes fit as-is in the chain id payload; currently deployed
/// networks use far less (`0x534e5f4d41494e` for mainnet,
/// `0x534e5f5345504f4c4941` for sepolia).
pub const MAX_STARKNET_CHAIN_ID_HEX_LENGTH: usize = 2 * CHAIN_ID_PAYLOAD_LENGTH;

/// Chain id of a Starknet network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarknetChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl StarknetChainId {
    /// Creates a Starknet chain id from the hex encoding of the network
    /// identifier, right-aligned and zero-padded. Leading `0x` is optional
    /// and odd-length inputs are accepted.
    pub fn new(id: &str) -> Result<Self, ChainIdError> {
        let trimmed = id.strip_prefix("0x").unwrap_or(id);
        if trimmed.len() > MAX_STARKNET_CHAIN_ID_HEX_LENGTH {
            return Err(ChainIdError::MaxLength {
                max: MAX_STARKNET_CHAIN_ID_HEX_LENGTH,
                actual: trimmed.len(),
            });
        }
        let decoded = if trimmed.len() % 2 == 1 {
            decode_hex(&format!("0{trimmed}"))?
        } else {
            decode_hex(trimmed)?
        };
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[0] = Ecosystem::Starknet.tag();
        inner[CHAIN_ID_LENGTH - decoded.len()..].copy_from_slice(&decoded);
        Ok(Self(inner))
    }

    /// Creates a Starknet chain id from the plain-text network name,
    /// left-aligned in the payload and zero-padded on the right.
    /// Surrounding whitespace is trimmed.
    pub fn from_name(name: &str) -> Result<Self, ChainIdError> {
        let trimmed = name.trim().as_bytes();
        if trimmed.len() > CHAIN_ID_PAYLOAD_LENGTH {
            return Err(ChainIdError::MaxLength {
                max: CHAIN_ID_PAYLOAD_LENGTH,
                actual: trimmed.len(),
            });
        }
        let mut inner = [0u8; CHAIN_ID_LENGTH];
        inner[0] = Ecosystem::Starknet.tag();
        inner[1..1 + trimmed.len()].copy_from_slice(trimmed);
        Ok(Self(inner))
    }

    /// Starknet mainnet (SN_MAIN)
    pub const fn mainnet() -> Self {
        Self([
            0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x53, 0x4e, 0x5f,
            0x4d, 0x41, 0x49, 0x4e,
        ])
    }

    /// Starknet sepolia testnet (SN_SEPOLIA)
    pub const fn sepolia() -> Self {
        Self([
            0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x53, 0x4e, 0x5f, 0x53, 0x45, 0x50,
            0x4f, 0x4c, 0x49, 0x41,
        ])
    }

    /// The textual identifier of the Starknet network.
    ///
    /// Network names all start with `SN`, so the payload is scanned for that
    /// literal and the text from there onward is returned with trailing zero
    /// padding stripped. If the literal is not found the whole payload is
    /// returned as a fallback.
    pub fn identifier(&self) -> String {
        let payload = &self.0[1..];
        let start = payload
            .windows(2)
            .position(|window| window == b"SN")
            .unwrap_or(0);
        let text = &payload[start..];
        let end = text.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        String::from_utf8_lossy(&text[..end]).into_owned()
    }
}

impl ChainIdOps for StarknetChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for StarknetChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
