//! Generic addresses and the wire serialization contract
//!
//! [`GenericAddress`] carries an arbitrary non-empty payload tagged with an
//! explicit ecosystem. It serves both as the fallback for ecosystems without
//! a specialized address type and as an explicit wrapper to move a concrete
//! address around generically. It also implements the flat-byte wire
//! contract: `marshal`, `marshal_to`, `unmarshal` and `size`. The wire form
//! does not carry the ecosystem tag, so unmarshaled values come back tagged
//! [`Ecosystem::Unknown`].

use super::{decode_hex, Address, AddressError, AddressOps};
use crate::ecosystem::Ecosystem;

use std::fmt;

/// An address of any ecosystem, without specialized validation beyond being
/// non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericAddress {
    pub(crate) ecosystem: Ecosystem,
    pub(crate) inner: Vec<u8>,
}

impl GenericAddress {
    /// Creates a generic address from a non-empty byte slice and an explicit
    /// ecosystem tag
    pub fn new(input: &[u8], ecosystem: Ecosystem) -> Result<Self, AddressError> {
        if input.is_empty() {
            return Err(AddressError::EmptyAddress);
        }
        Ok(Self {
            ecosystem,
            inner: input.to_vec(),
        })
    }

    /// Creates a generic address from an hex string, with or without leading
    /// `0x`
    pub fn from_hex(address: &str, ecosystem: Ecosystem) -> Result<Self, AddressError> {
        let decoded = decode_hex(address, ecosystem)?;
        Self::new(&decoded, ecosystem)
    }

    /// Wraps any address generically, copying its bytes and ecosystem tag
    /// without retaining a reference to it
    pub fn from_address(address: &dyn AddressOps) -> Self {
        Self {
            ecosystem: address.ecosystem(),
            inner: address.bytes(),
        }
    }

    /// Converts the payload into the specialized address type of the given
    /// ecosystem, applying its validation rules
    pub fn to_ecosystem(&self, ecosystem: Ecosystem) -> Result<Address, AddressError> {
        Address::from_bytes(&self.inner, ecosystem)
    }

    /// Serializes the address into its native-length bytes
    pub fn marshal(&self) -> Vec<u8> {
        self.bytes()
    }

    /// Serializes the address into the provided buffer, returning the number
    /// of bytes written
    pub fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, AddressError> {
        if buf.len() < self.inner.len() {
            return Err(AddressError::Buffer {
                expected: self.inner.len(),
                actual: buf.len(),
            });
        }
        buf[..self.inner.len()].copy_from_slice(&self.inner);
        Ok(self.inner.len())
    }

    /// Deserializes the address from its wire bytes.
    ///
    /// The wire form carries no ecosystem tag, so the value comes back
    /// tagged [`Ecosystem::Unknown`].
    pub fn unmarshal(&mut self, data: &[u8]) -> Result<(), AddressError> {
        if data.is_empty() {
            return Err(AddressError::EmptyAddress);
        }
        self.ecosystem = Ecosystem::Unknown;
        self.inner = data.to_vec();
        Ok(())
    }

    /// Size of the serialized address in bytes
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}

impl Default for GenericAddress {
    fn default() -> Self {
        Self {
            ecosystem: Ecosystem::Unknown,
            inner: Vec::new(),
        }
    }
}

impl AddressOps for GenericAddress {
    fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }
}

impl fmt::Display for GenericAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
