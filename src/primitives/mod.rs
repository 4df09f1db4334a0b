//! Native proof-of-work primitives
//!
//! The registry never hashes anything itself. Every digest and every
//! verification is delegated to an implementation of [`HashPrimitives`],
//! which stands in for the native hashing library a pool links against.

pub mod native;

use crate::config::{EquihashParams, ScryptParams};
use std::fmt;
use thiserror::Error;

pub use native::{double_sha256, keccak256, NativePrimitives};

/// Errors raised by a primitive backend
///
/// These are handed back to the caller untouched by every hash callable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("Primitive not available in this backend: {0}")]
    Unavailable(DigestAlgorithm),
    #[error("Unsupported primitive parameters: {0}")]
    Unsupported(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Fixed-parameter digest algorithms exposed by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256d,
    C11,
    X11,
    X13,
    X15,
    X16r,
    X16rv2,
    Nist5,
    Quark,
    Keccak,
    Blake,
    Neoscrypt,
    Skein,
    Groestl,
    Fugue,
    Qubit,
}

impl DigestAlgorithm {
    /// Name of the primitive as used by pool configuration
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256d => "sha256d",
            DigestAlgorithm::C11 => "c11",
            DigestAlgorithm::X11 => "x11",
            DigestAlgorithm::X13 => "x13",
            DigestAlgorithm::X15 => "x15",
            DigestAlgorithm::X16r => "x16r",
            DigestAlgorithm::X16rv2 => "x16rv2",
            DigestAlgorithm::Nist5 => "nist5",
            DigestAlgorithm::Quark => "quark",
            DigestAlgorithm::Keccak => "keccak",
            DigestAlgorithm::Blake => "blake",
            DigestAlgorithm::Neoscrypt => "neoscrypt",
            DigestAlgorithm::Skein => "skein",
            DigestAlgorithm::Groestl => "groestl",
            DigestAlgorithm::Fugue => "fugue",
            DigestAlgorithm::Qubit => "qubit",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of opaque hashing primitives the registry orchestrates
///
/// Implementations must be stateless with respect to individual calls so a
/// single backend can be shared by every callable on every thread.
pub trait HashPrimitives: Send + Sync {
    /// Compute a fixed-parameter digest of `data`
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, PrimitiveError>;

    /// Compute the scrypt proof-of-work hash of `data` with the given costs
    fn scrypt(&self, data: &[u8], params: ScryptParams) -> Result<Vec<u8>, PrimitiveError>;

    /// Check an Equihash `solution` against a full block `header`
    fn equihash_verify(
        &self,
        header: &[u8],
        solution: &[u8],
        params: &EquihashParams,
    ) -> Result<bool, PrimitiveError>;
}
