//! Proof-of-work algorithm registry for mining pools
//!
//! This crate maps an algorithm key to everything a pool needs to validate
//! shares for a coin mined with it:
//! - A hash function factory that binds per-coin parameters once
//! - A difficulty multiplier normalizing output distributions across algorithms
//! - A static target for verify-style algorithms (Equihash)
//!
//! The digests themselves come from a [`primitives::HashPrimitives`] backend.
//!
//! # Example
//!
//! ```rust
//! use pow_algorithms::algorithms::get_algorithm;
//! use pow_algorithms::config::CoinConfig;
//!
//! let coin = CoinConfig::from_json_str(r#"{"nValue": 1024, "rValue": 1}"#).unwrap();
//! let scrypt = get_algorithm("scrypt").unwrap();
//! assert_eq!(scrypt.multiplier(), 65536);
//!
//! let hasher = scrypt.hasher(&coin).unwrap();
//! let digest = hasher.as_digest().unwrap();
//! let hash = digest(&[0u8; 80], 0).unwrap();
//! assert_eq!(hash.len(), 32);
//! ```

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod primitives;

// Re-export commonly used types
pub use algorithms::{
    get_algorithm, hasher_for_coin, AlgorithmDescriptor, AlgorithmError, AlgorithmRegistry,
    HashCallable,
};
pub use config::{CoinConfig, EquihashParams, KeccakMode, ScryptParams};
pub use primitives::{DigestAlgorithm, HashPrimitives, NativePrimitives, PrimitiveError};
