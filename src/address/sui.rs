//! Sui addresses

use super::{decode_hex, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of a Sui address
pub const SUI_ADDRESS_LENGTH: usize = 32;

/// Address of an account or object on the Sui blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiAddress(pub(crate) [u8; SUI_ADDRESS_LENGTH]);

impl SuiAddress {
    /// Creates a Sui address from exactly 32 bytes
    pub fn from_bytes(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() != SUI_ADDRESS_LENGTH {
            return Err(AddressError::Length {
                ecosystem: Ecosystem::Sui,
                expected: SUI_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let mut inner = [0u8; SUI_ADDRESS_LENGTH];
        inner.copy_from_slice(input);
        Ok(Self(inner))
    }

    /// Creates a Sui address from an hex string, with or without leading `0x`
    pub fn from_hex(address: &str) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, Ecosystem::Sui)?;
        Self::from_bytes(&decoded)
    }
}

impl AddressOps for SuiAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Sui
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
