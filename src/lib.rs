//! Multichain-ID: Canonical Chain Identity and Address Types
//!
//! This crate provides a unified identity model for blockchain entities across
//! heterogeneous ecosystems (EVM, Sui, Solana, Cosmos, Starknet, Bitcoin and
//! arbitrary unknown ones):
//!
//! - **ChainId** - a fixed 32-byte chain identifier whose most significant byte
//!   tags the ecosystem and whose remaining 31 bytes carry a chain-specific
//!   discriminator
//! - **Address** - an ecosystem-typed byte sequence identifying an account or
//!   contract, with per-ecosystem length and normalization rules
//! - **Ecosystem** - the tag enumeration shared by both
//!
//! All values are immutable after construction, compare byte-exact and return
//! defensive copies from every accessor, so they are safe to share across
//! threads and to use as map keys.
//!
//! ## Usage
//!
//! ```
//! use multichain_id::{Address, ChainId, ChainIdOps, AddressOps, Ecosystem};
//!
//! let btc = ChainId::from_hex(
//!     "0xff0000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
//! ).unwrap();
//! assert_eq!(btc.ecosystem(), Ecosystem::Bitcoin);
//!
//! let addr = Address::from_string(
//!     "0x8236a87084f8B84306f72007F36F2618A5634494",
//!     Ecosystem::Evm,
//! ).unwrap();
//! assert_eq!(addr.length(), 20);
//! ```

pub mod address;
pub mod chain_id;
pub mod ecosystem;

pub use address::{
    Address, AddressError, AddressOps, CosmosAddress, EvmAddress, GenericAddress, SolanaAddress,
    StarknetAddress, SuiAddress,
};
pub use chain_id::{
    BitcoinChainId, ChainId, ChainIdError, ChainIdOps, CosmosChainId, EvmChainId, GenericChainId,
    SolanaChainId, StarknetChainId, SuiChainId, CHAIN_ID_LENGTH, CHAIN_ID_PAYLOAD_LENGTH,
};
pub use ecosystem::Ecosystem;
