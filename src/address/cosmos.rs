//! Cosmos addresses
//!
//! Generic for Cosmos chains, NOT tied to a particular one. Both the 20-byte
//! Cosmos SDK account form and the 32-byte CosmWasm contract form are
//! accepted; a 32-byte value whose 12 leading bytes are zero is reduced to
//! the 20-byte form so both representations of the same account compare and
//! serialize identically. Bech32 prefixes and checksums are out of scope and
//! should be handled with SDK tooling.

use super::{decode_hex, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// Length of a contract address in CosmWasm without prefix and checksum
pub const COSMWASM_ADDRESS_LENGTH: usize = 32;

/// Length of an account address in a Cosmos SDK chain without prefix and
/// checksum
pub const COSMOS_SDK_ADDRESS_LENGTH: usize = 20;

/// Address of an account or contract on a Cosmos chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CosmosAddress {
    pub(crate) inner: Vec<u8>,
}

impl CosmosAddress {
    /// Creates a Cosmos address from 20 or 32 bytes, canonicalizing
    /// zero-padded 32-byte values to their 20-byte form
    pub fn from_bytes(input: &[u8]) -> Result<Self, AddressError> {
        if input.len() != COSMOS_SDK_ADDRESS_LENGTH && input.len() != COSMWASM_ADDRESS_LENGTH {
            return Err(AddressError::CosmosLength {
                sdk: COSMOS_SDK_ADDRESS_LENGTH,
                wasm: COSMWASM_ADDRESS_LENGTH,
                actual: input.len(),
            });
        }
        let pad = COSMWASM_ADDRESS_LENGTH - COSMOS_SDK_ADDRESS_LENGTH;
        let canonical = if input.len() == COSMWASM_ADDRESS_LENGTH
            && input[..pad].iter().all(|&b| b == 0)
        {
            &input[pad..]
        } else {
            input
        };
        Ok(Self {
            inner: canonical.to_vec(),
        })
    }

    /// Creates a Cosmos address from an hex string, with or without leading
    /// `0x`
    pub fn from_hex(address: &str) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, Ecosystem::Cosmos)?;
        Self::from_bytes(&decoded)
    }
}

impl AddressOps for CosmosAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Cosmos
    }
}

impl fmt::Display for CosmosAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded_canonicalization() {
        let sdk = [0x42u8; COSMOS_SDK_ADDRESS_LENGTH];
        let mut padded = [0u8; COSMWASM_ADDRESS_LENGTH];
        padded[12..].copy_from_slice(&sdk);

        let from_sdk = CosmosAddress::from_bytes(&sdk).unwrap();
        let from_padded = CosmosAddress::from_bytes(&padded).unwrap();
        assert_eq!(from_sdk, from_padded);
        assert!(from_sdk.equal(&from_padded));
        assert_eq!(from_padded.length(), COSMOS_SDK_ADDRESS_LENGTH);
        assert_eq!(from_padded.bytes(), sdk.to_vec());
    }

    #[test]
    fn test_contract_address_keeps_full_length() {
        let mut contract = [0x42u8; COSMWASM_ADDRESS_LENGTH];
        contract[0] = 0x01;
        let addr = CosmosAddress::from_bytes(&contract).unwrap();
        assert_eq!(addr.length(), COSMWASM_ADDRESS_LENGTH);
        assert_eq!(addr.bytes(), contract.to_vec());
    }

    #[test]
    fn test_rejects_other_lengths() {
        for len in [0usize, 19, 21, 31, 33] {
            let input = vec![0x01u8; len];
            assert!(
                matches!(
                    CosmosAddress::from_bytes(&input),
                    Err(AddressError::CosmosLength { sdk: 20, wasm: 32, actual }) if actual == len
                ),
                "length {len}"
            );
        }
    }

    #[test]
    fn test_hex_form() {
        let addr = CosmosAddress::from_bytes(&[0xabu8; 20]).unwrap();
        assert_eq!(addr.hex(), "ab".repeat(20));
        assert_eq!(addr.to_string(), format!("0x{}", "ab".repeat(20)));

        let roundtrip = CosmosAddress::from_hex(&addr.to_string()).unwrap();
        assert!(addr.equal(&roundtrip));
    }
}
