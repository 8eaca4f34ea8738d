//! Solana addresses

use super::{decode_hex, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length in bytes of a Solana address
pub const SOLANA_ADDRESS_LENGTH: usize = 32;

/// Address of an account on the Solana blockchain.
///
/// Whether the bytes form a valid curve point is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolanaAddress(pub(crate) [u8; SOLANA_ADDRESS_LENGTH]);

impl SolanaAddress {
    /// Creates a Solana address from exactly 32 bytes
    pub fn from_bytes(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() != SOLANA_ADDRESS_LENGTH {
            return Err(AddressError::Length {
                ecosystem: Ecosystem::Solana,
                expected: SOLANA_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let mut inner = [0u8; SOLANA_ADDRESS_LENGTH];
        inner.copy_from_slice(input);
        Ok(Self(inner))
    }

    /// Creates a Solana address from an hex string, with or without leading
    /// `0x`
    pub fn from_hex(address: &str) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, Ecosystem::Solana)?;
        Self::from_bytes(&decoded)
    }

    /// Creates a Solana address from its base58 form
    pub fn from_base58(address: &str) -> Result<Self, AddressError> {
        let decoded = bs58::decode(address).into_vec()?;
        Self::from_bytes(&decoded)
    }
}

impl AddressOps for SolanaAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Solana
    }
}

impl fmt::Display for SolanaAddress {
    /// Base58, as common in the Solana ecosystem
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_B58: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
    const VALID_HEX: &str = "321cfa5add185e8893a5fd88013ec4d7e122ded46354cadff50d956395e75b60";

    #[test]
    fn test_base58_and_hex_agree() {
        let from_b58 = SolanaAddress::from_base58(VALID_B58).unwrap();
        let from_hex = SolanaAddress::from_hex(VALID_HEX).unwrap();
        assert!(from_b58.equal(&from_hex));
        assert_eq!(from_b58.hex(), VALID_HEX);
        assert_eq!(from_b58.ecosystem(), Ecosystem::Solana);
        assert_eq!(from_b58.length(), SOLANA_ADDRESS_LENGTH);
    }

    #[test]
    fn test_display_is_base58() {
        let addr = SolanaAddress::from_base58(VALID_B58).unwrap();
        assert_eq!(addr.to_string(), VALID_B58);
    }

    #[test]
    fn test_rejects_invalid_input() {
        // wrong decoded length
        assert!(matches!(
            SolanaAddress::from_base58("abc"),
            Err(AddressError::Length { .. })
        ));
        // characters outside the base58 alphabet
        assert!(matches!(
            SolanaAddress::from_base58("0OIl"),
            Err(AddressError::Base58(_))
        ));
        // wrong hex length
        assert!(matches!(
            SolanaAddress::from_hex(&VALID_HEX[..40]),
            Err(AddressError::Length { .. })
        ));
    }
}
