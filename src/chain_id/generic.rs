//! Generic chain ids and the wire serialization contract
//!
//! [`GenericChainId`] carries the base functionality of a chain id without
//! any check on the ecosystem tag, so values with unrecognized tags are never
//! rejected. It also implements the flat-byte wire contract used to embed
//! chain ids in protobuf custom fields: `marshal`, `marshal_to`, `unmarshal`
//! and `size`.

use super::{copy_fixed, decode_hex, ChainId, ChainIdError, ChainIdOps, CHAIN_ID_LENGTH};

use std::fmt;

/// A chain id of any ecosystem, supported or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GenericChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl GenericChainId {
    /// Creates a generic chain id from its big-endian bytes
    pub fn new(input: &[u8]) -> Result<Self, ChainIdError> {
        Ok(Self(copy_fixed(input)?))
    }

    /// Creates a generic chain id from its hex encoding, with or without
    /// leading `0x`
    pub fn from_hex(s: &str) -> Result<Self, ChainIdError> {
        let decoded = decode_hex(s)?;
        Self::new(&decoded)
    }

    /// Wraps any chain id generically, copying its bytes
    pub fn from_chain_id(id: &dyn ChainIdOps) -> Self {
        Self(*id.as_array())
    }

    /// Re-dispatches to the specialized variant for the embedded tag.
    ///
    /// Useful after an ecosystem gains a specialized decoder; fails with
    /// [`ChainIdError::UnsupportedEcosystem`] if the tag still has none.
    pub fn to_ecosystem(&self) -> Result<ChainId, ChainIdError> {
        let ecosystem = self.ecosystem();
        if !ecosystem.is_supported() {
            return Err(ChainIdError::UnsupportedEcosystem(ecosystem.tag()));
        }
        Ok(ChainId::from_fixed(self.0))
    }

    /// Serializes the chain id into its canonical 32 bytes
    pub fn marshal(&self) -> Vec<u8> {
        self.bytes()
    }

    /// Serializes the chain id into the provided buffer, returning the number
    /// of bytes written
    pub fn marshal_to(&self, buf: &mut [u8]) -> Result<usize, ChainIdError> {
        if buf.len() < CHAIN_ID_LENGTH {
            return Err(ChainIdError::Length {
                expected: CHAIN_ID_LENGTH,
                actual: buf.len(),
            });
        }
        buf[..CHAIN_ID_LENGTH].copy_from_slice(&self.0);
        Ok(CHAIN_ID_LENGTH)
    }

    /// Deserializes the chain id from its canonical 32 bytes.
    ///
    /// The ecosystem tag is whatever byte 0 contains; it is not re-validated.
    pub fn unmarshal(&mut self, data: &[u8]) -> Result<(), ChainIdError> {
        self.0 = copy_fixed(data)?;
        Ok(())
    }

    /// Size of the serialized chain id in bytes
    pub fn size(&self) -> usize {
        CHAIN_ID_LENGTH
    }
}

impl ChainIdOps for GenericChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for GenericChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain_id::EvmChainId;
    use crate::ecosystem::Ecosystem;

    const GENERIC_HEX: &str =
        "0x1100000000000000000000000000000000000000000000000000000000000001";

    fn generic() -> GenericChainId {
        match ChainId::from_hex(GENERIC_HEX).unwrap() {
            ChainId::Generic(g) => g,
            other => panic!("expected generic chain id, got {other:?}"),
        }
    }

    #[test]
    fn test_marshal_unmarshal_roundtrip() {
        let g = generic();
        assert_eq!(g.to_string(), GENERIC_HEX);
        assert_eq!(g.hex(), &GENERIC_HEX[2..]);
        assert_eq!(g.ecosystem(), Ecosystem::Other(0x11));

        let wire = g.marshal();
        assert_eq!(wire.len(), CHAIN_ID_LENGTH);
        assert_eq!(g.size(), CHAIN_ID_LENGTH);

        let mut back = GenericChainId::default();
        back.unmarshal(&wire).unwrap();
        assert_eq!(back, g);
        assert!(back.equal(&g));
    }

    #[test]
    fn test_unmarshal_length_errors() {
        let mut g = GenericChainId::default();
        assert!(matches!(
            g.unmarshal(&[0u8; CHAIN_ID_LENGTH - 1]),
            Err(ChainIdError::Length { .. })
        ));
        assert!(matches!(
            g.unmarshal(&[0u8; CHAIN_ID_LENGTH + 1]),
            Err(ChainIdError::Length { .. })
        ));
    }

    #[test]
    fn test_marshal_to() {
        let g = generic();

        let mut buf = [0u8; CHAIN_ID_LENGTH];
        let written = g.marshal_to(&mut buf).unwrap();
        assert_eq!(written, CHAIN_ID_LENGTH);
        assert_eq!(buf.to_vec(), g.bytes());

        let mut small = [0u8; CHAIN_ID_LENGTH - 1];
        assert!(matches!(
            g.marshal_to(&mut small),
            Err(ChainIdError::Length { .. })
        ));
    }

    #[test]
    fn test_to_ecosystem_unsupported() {
        assert!(matches!(
            generic().to_ecosystem(),
            Err(ChainIdError::UnsupportedEcosystem(0x11))
        ));
    }

    #[test]
    fn test_to_ecosystem_supported() {
        let g = GenericChainId::from_chain_id(&EvmChainId::ethereum());
        let specialized = g.to_ecosystem().unwrap();
        assert!(matches!(specialized, ChainId::Evm(_)));
        assert!(specialized.equal(&g));
    }

    #[test]
    fn test_new_copies_input() {
        let mut input = [0u8; CHAIN_ID_LENGTH];
        input[0] = 0xab;
        input[CHAIN_ID_LENGTH - 1] = 0x01;
        let g = GenericChainId::new(&input).unwrap();
        assert_eq!(g.ecosystem(), Ecosystem::Other(0xab));

        input[1] = 0xff;
        assert_eq!(g.bytes()[1], 0x00);
    }

    #[test]
    fn test_from_chain_id_wraps_equal() {
        let base = EvmChainId::ethereum();
        let g = GenericChainId::from_chain_id(&base);
        assert_eq!(g.ecosystem(), base.ecosystem());
        assert!(g.equal(&base));
        assert!(base.equal(&g));
    }
}
