//! Cosmos chain ids
//!
//! Chain ids in the Cosmos ecosystem carry a restart counter after the last
//! dash (e.g. `cosmoshub-4`), so only the chain name before it is considered:
//! the canonical value is the SHA-256 digest of the name with byte 0
//! overwritten by the ecosystem tag. `cosmoshub-3` and `cosmoshub-4` thereby
//! map to the same chain id.

use super::{ChainIdError, ChainIdOps, CHAIN_ID_LENGTH};
use crate::ecosystem::Ecosystem;

use std::fmt;

use sha2::{Digest, Sha256};

/// Chain id of a Cosmos chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CosmosChainId(pub(crate) [u8; CHAIN_ID_LENGTH]);

impl CosmosChainId {
    /// Creates a Cosmos chain id from a chain id string of the form
    /// `name-counter`.
    ///
    /// The separator is mandatory and both sides must be non-empty; the
    /// counter itself is ignored, only its presence is validated.
    pub fn new(chain_id: &str) -> Result<Self, ChainIdError> {
        if chain_id.is_empty() {
            return Err(ChainIdError::EmptyCosmosChainId);
        }
        let (name, counter) = chain_id
            .rsplit_once('-')
            .ok_or_else(|| ChainIdError::InvalidCosmosChainId(chain_id.to_string()))?;
        if name.is_empty() || counter.is_empty() {
            return Err(ChainIdError::InvalidCosmosChainId(chain_id.to_string()));
        }
        let mut digest: [u8; CHAIN_ID_LENGTH] = Sha256::digest(name.as_bytes()).into();
        digest[0] = Ecosystem::Cosmos.tag();
        Ok(Self(digest))
    }
}

impl ChainIdOps for CosmosChainId {
    fn as_array(&self) -> &[u8; CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl fmt::Display for CosmosChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.hex())
    }
}
