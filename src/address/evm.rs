//! EVM addresses

use super::{decode_hex, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of an EVM address
pub const EVM_ADDRESS_LENGTH: usize = 20;

/// Address of an account or contract on an EVM chain.
///
/// EIP-55 checksums are not enforced: hex input is accepted case-insensitively
/// and rendered lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(pub(crate) [u8; EVM_ADDRESS_LENGTH]);

impl EvmAddress {
    /// Creates an EVM address from exactly 20 bytes
    pub fn from_bytes(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() != EVM_ADDRESS_LENGTH {
            return Err(AddressError::Length {
                ecosystem: Ecosystem::Evm,
                expected: EVM_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let mut inner = [0u8; EVM_ADDRESS_LENGTH];
        inner.copy_from_slice(input);
        Ok(Self(inner))
    }

    /// Creates an EVM address from an hex string, with or without leading `0x`
    pub fn from_hex(address: &str) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, Ecosystem::Evm)?;
        Self::from_bytes(&decoded)
    }

    /// Creates an EVM address from a byte slice of at least 20 bytes by
    /// truncating the most significant ones, useful when reading an address
    /// out of an event topic which is always 32 bytes long.
    ///
    /// Fails if the slice is shorter than 20 bytes or if any truncated byte
    /// is non-zero.
    pub fn truncating(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() < EVM_ADDRESS_LENGTH {
            return Err(AddressError::MinLength {
                expected: EVM_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let cut = input.len() - EVM_ADDRESS_LENGTH;
        if input[..cut].iter().any(|&b| b != 0) {
            return Err(AddressError::TruncationRejected);
        }
        let mut inner = [0u8; EVM_ADDRESS_LENGTH];
        inner.copy_from_slice(&input[cut..]);
        Ok(Self(inner))
    }
}

impl AddressOps for EvmAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Evm
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
