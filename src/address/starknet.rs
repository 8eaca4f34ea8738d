//! Starknet addresses

use super::{decode_hex, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of a Starknet address
pub const STARKNET_ADDRESS_LENGTH: usize = 32;

/// Address of an account or contract on the Starknet L2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarknetAddress(pub(crate) [u8; STARKNET_ADDRESS_LENGTH]);

impl StarknetAddress {
    /// Creates a Starknet address from exactly 32 bytes
    pub fn from_bytes(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() != STARKNET_ADDRESS_LENGTH {
            return Err(AddressError::Length {
                ecosystem: Ecosystem::Starknet,
                expected: STARKNET_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let mut inner = [0u8; STARKNET_ADDRESS_LENGTH];
        inner.copy_from_slice(input);
        Ok(Self(inner))
    }

    /// Creates a Starknet address from an hex string, with or without leading
    /// `0x`
    pub fn from_hex(address: &str) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, Ecosystem::Starknet)?;
        Self::from_bytes(&decoded)
    }
}

impl AddressOps for StarknetAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Starknet
    }
}

impl fmt::Display for StarknetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
