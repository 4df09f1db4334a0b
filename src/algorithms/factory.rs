//! Hash function factory
//!
//! Turns an algorithm family plus a coin configuration into a ready-to-call
//! [`HashCallable`]. All parameter resolution happens here, once; the
//! returned closures only forward to the primitive backend.

use super::AlgorithmError;
use crate::config::{CoinConfig, EquihashParams, KeccakMode, ScryptParams};
use crate::primitives::{DigestAlgorithm, HashPrimitives, PrimitiveError};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Digest callable: `(header, ntime) -> digest`
///
/// `ntime` is the header timestamp. Only timestamp-bound Keccak reads it.
pub type DigestFn = Arc<dyn Fn(&[u8], u32) -> Result<Vec<u8>, PrimitiveError> + Send + Sync>;

/// Verify callable: `(header, solution) -> valid`
pub type VerifyFn = Arc<dyn Fn(&[u8], &[u8]) -> Result<bool, PrimitiveError> + Send + Sync>;

/// The per-coin hashing artifact
///
/// Digest algorithms yield bytes to compare against a target; verify
/// algorithms only answer whether a solution is valid.
#[derive(Clone)]
pub enum HashCallable {
    Digest(DigestFn),
    Verify(VerifyFn),
}

/// Shape of a [`HashCallable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    Digest,
    Verify,
}

impl HashCallable {
    pub fn kind(&self) -> CallableKind {
        match self {
            HashCallable::Digest(_) => CallableKind::Digest,
            HashCallable::Verify(_) => CallableKind::Verify,
        }
    }

    /// The digest function, if this is a digest callable
    pub fn as_digest(&self) -> Option<&DigestFn> {
        match self {
            HashCallable::Digest(f) => Some(f),
            HashCallable::Verify(_) => None,
        }
    }

    /// The verify function, if this is a verify callable
    pub fn as_verify(&self) -> Option<&VerifyFn> {
        match self {
            HashCallable::Verify(f) => Some(f),
            HashCallable::Digest(_) => None,
        }
    }
}

impl fmt::Debug for HashCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashCallable::{:?}", self.kind())
    }
}

/// How an algorithm's callable is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    /// Pass-through to a fixed-parameter digest; coin configuration unused
    Fixed(DigestAlgorithm),
    /// Scrypt with per-coin N and r costs
    Scrypt,
    /// Keccak, plain or timestamp-bound per coin
    Keccak,
    /// Equihash solution verification with per-coin N, K and personalization
    Equihash,
}

impl AlgorithmFamily {
    /// Shape of the callable this family produces
    pub fn callable_kind(&self) -> CallableKind {
        match self {
            AlgorithmFamily::Equihash => CallableKind::Verify,
            _ => CallableKind::Digest,
        }
    }
}

/// Build the callable for `family` and `coin`
pub fn build_hasher(
    family: AlgorithmFamily,
    coin: &CoinConfig,
    primitives: Arc<dyn HashPrimitives>,
) -> Result<HashCallable, AlgorithmError> {
    match family {
        AlgorithmFamily::Fixed(algorithm) => Ok(fixed_digest(algorithm, primitives)),
        AlgorithmFamily::Scrypt => Ok(scrypt_digest(ScryptParams::resolve(coin)?, primitives)),
        AlgorithmFamily::Keccak => Ok(keccak_digest(KeccakMode::resolve(coin), primitives)),
        AlgorithmFamily::Equihash => Ok(equihash_verify(EquihashParams::resolve(coin)?, primitives)),
    }
}

fn fixed_digest(algorithm: DigestAlgorithm, primitives: Arc<dyn HashPrimitives>) -> HashCallable {
    debug!("Built {} hasher", algorithm);

    let digest: DigestFn = Arc::new(move |data: &[u8], _ntime: u32| primitives.digest(algorithm, data));
    HashCallable::Digest(digest)
}

fn scrypt_digest(params: ScryptParams, primitives: Arc<dyn HashPrimitives>) -> HashCallable {
    debug!("Built scrypt hasher (N={}, r={})", params.n, params.r);

    let digest: DigestFn = Arc::new(move |data: &[u8], _ntime: u32| primitives.scrypt(data, params));
    HashCallable::Digest(digest)
}

fn keccak_digest(mode: KeccakMode, primitives: Arc<dyn HashPrimitives>) -> HashCallable {
    debug!("Built keccak hasher ({:?})", mode);

    let digest: DigestFn = match mode {
        KeccakMode::Plain => {
            Arc::new(move |data: &[u8], _ntime: u32| primitives.digest(DigestAlgorithm::Keccak, data))
        }
        KeccakMode::TimestampBound => Arc::new(move |data: &[u8], ntime: u32| {
            let mut input = data.to_vec();
            input.extend_from_slice(&ntime_bytes(ntime)?);

            let first = primitives.digest(DigestAlgorithm::Keccak, &input)?;
            primitives.digest(DigestAlgorithm::Keccak, &first)
        }),
    };

    HashCallable::Digest(digest)
}

fn equihash_verify(params: EquihashParams, primitives: Arc<dyn HashPrimitives>) -> HashCallable {
    debug!(
        "Built equihash verifier (N={}, K={}, personalization={})",
        params.n, params.k, params.personalization
    );

    let verify: VerifyFn = Arc::new(move |header: &[u8], solution: &[u8]| {
        primitives.equihash_verify(header, solution, &params)
    });
    HashCallable::Verify(verify)
}

/// Timestamp bytes appended by timestamp-bound Keccak: the big-endian hex
/// form of `ntime`, left-padded to an even number of digits
///
/// An odd digit count gains a leading zero instead of losing its last
/// nibble, so `0xabc` encodes as `[0x0a, 0xbc]`, not `[0xab]`. Eight-digit
/// timestamps (every `ntime` since 1978) encode to their four bytes either way.
fn ntime_bytes(ntime: u32) -> Result<Vec<u8>, PrimitiveError> {
    let mut digits = format!("{:x}", ntime);
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }
    hex::decode(&digits).map_err(|e| PrimitiveError::MalformedInput(e.to_string()))
}
