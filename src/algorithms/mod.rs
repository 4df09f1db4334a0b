//! Proof-of-work algorithm registry
//!
//! Maps an algorithm key to its descriptor: a hash function factory, a
//! difficulty multiplier and, for verify-style algorithms, a static target.

pub mod factory;
pub mod multiplier;
pub mod registry;
pub mod target;

use thiserror::Error;

pub use factory::{build_hasher, AlgorithmFamily, CallableKind, DigestFn, HashCallable, VerifyFn};
pub use multiplier::{normalize_multipliers, DEFAULT_MULTIPLIER};
pub use registry::{
    get_algorithm, global_registry, hasher_for_coin, AlgorithmDescriptor, AlgorithmEntry,
    AlgorithmRegistry, ALGORITHM_TABLE,
};
pub use target::{meets_target, target_hex, EQUIHASH_STATIC_TARGET};

/// Algorithm registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    #[error("Invalid {algorithm} parameters: {reason}")]
    InvalidAlgorithmParameters { algorithm: String, reason: String },
}

impl AlgorithmError {
    pub(crate) fn invalid_parameters(algorithm: &str, reason: String) -> Self {
        AlgorithmError::InvalidAlgorithmParameters {
            algorithm: algorithm.to_string(),
            reason,
        }
    }
}
