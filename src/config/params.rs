//! Algorithm parameter resolution
//!
//! Each tunable algorithm gets an explicit parameter struct and a pure
//! `resolve` function. Absent fields fall back to the documented defaults;
//! fields that are present but outside the algorithm's domain are rejected.

use super::coin::CoinConfig;
use crate::algorithms::AlgorithmError;
use crate::primitives::native::SCRYPT_OUTPUT_LEN;

/// Default scrypt N cost (Litecoin)
pub const DEFAULT_SCRYPT_N: u32 = 1024;

/// Default scrypt r cost (Litecoin)
pub const DEFAULT_SCRYPT_R: u32 = 1;

/// Default Equihash N (Zcash)
pub const DEFAULT_EQUIHASH_N: u32 = 200;

/// Default Equihash K (Zcash)
pub const DEFAULT_EQUIHASH_K: u32 = 9;

/// Default Equihash BLAKE2b personalization prefix (Zcash)
pub const DEFAULT_EQUIHASH_PERSONALIZATION: &str = "ZcashPoW";

/// Largest scrypt working set (128 * r * N bytes) a coin may configure
pub const MAX_SCRYPT_MEMORY: u64 = 1 << 30;

/// Widest Equihash solution index the verifier accepts, in bits
const MAX_EQUIHASH_INDEX_BITS: u32 = 32;

/// Resolved scrypt costs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptParams {
    pub n: u32,
    pub r: u32,
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            n: DEFAULT_SCRYPT_N,
            r: DEFAULT_SCRYPT_R,
        }
    }
}

impl ScryptParams {
    /// Resolve `nValue` / `rValue` from a coin configuration
    pub fn resolve(coin: &CoinConfig) -> Result<Self, AlgorithmError> {
        let n = match coin.n_value {
            Some(value) => positive_u32("scrypt", "nValue", value)?,
            None => DEFAULT_SCRYPT_N,
        };
        let r = match coin.r_value {
            Some(value) => positive_u32("scrypt", "rValue", value)?,
            None => DEFAULT_SCRYPT_R,
        };

        if n < 2 || !n.is_power_of_two() {
            return Err(AlgorithmError::invalid_parameters(
                "scrypt",
                format!("nValue must be a power of two greater than 1, got {}", n),
            ));
        }

        let params = Self { n, r };

        scrypt::Params::new(params.log_n(), r, 1, SCRYPT_OUTPUT_LEN).map_err(|e| {
            AlgorithmError::invalid_parameters("scrypt", format!("N={} r={}: {}", n, r, e))
        })?;

        if params.memory_bytes() > MAX_SCRYPT_MEMORY {
            return Err(AlgorithmError::invalid_parameters(
                "scrypt",
                format!(
                    "N={} r={} needs {} bytes, limit is {}",
                    n,
                    r,
                    params.memory_bytes(),
                    MAX_SCRYPT_MEMORY
                ),
            ));
        }

        Ok(params)
    }

    /// Working memory one hash allocates
    pub fn memory_bytes(&self) -> u64 {
        128 * u64::from(self.r) * u64::from(self.n)
    }

    /// Base-2 logarithm of N
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }
}

/// Keccak hashing mode of a coin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeccakMode {
    /// Single Keccak pass over the header
    #[default]
    Plain,
    /// Double Keccak over the header followed by its hex-encoded timestamp
    TimestampBound,
}

impl KeccakMode {
    /// Only an explicit `normalHashing: true` selects the timestamp-bound mode
    pub fn resolve(coin: &CoinConfig) -> Self {
        match coin.normal_hashing {
            Some(true) => KeccakMode::TimestampBound,
            _ => KeccakMode::Plain,
        }
    }
}

/// Resolved Equihash parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquihashParams {
    pub n: u32,
    pub k: u32,
    pub personalization: String,
}

impl Default for EquihashParams {
    fn default() -> Self {
        Self {
            n: DEFAULT_EQUIHASH_N,
            k: DEFAULT_EQUIHASH_K,
            personalization: DEFAULT_EQUIHASH_PERSONALIZATION.to_string(),
        }
    }
}

impl EquihashParams {
    /// Resolve `parameters.{N, K, personalization}`, defaulting each one
    /// individually
    pub fn resolve(coin: &CoinConfig) -> Result<Self, AlgorithmError> {
        let mut params = Self::default();

        if let Some(config) = &coin.parameters {
            if let Some(n) = config.n {
                params.n = positive_u32("equihash", "N", n)?;
            }
            if let Some(k) = config.k {
                params.k = positive_u32("equihash", "K", k)?;
            }
            if let Some(personalization) = &config.personalization {
                params.personalization = personalization.clone();
            }
        }

        params.validate()?;
        Ok(params)
    }

    /// Number of bits that must collide at each of the K rounds
    pub fn collision_bit_length(&self) -> u32 {
        self.n / (self.k + 1)
    }

    /// Byte length of a minimal-encoded solution: 2^K indices of
    /// `collision_bit_length() + 1` bits each
    pub fn solution_len(&self) -> Option<usize> {
        let indices = 1usize.checked_shl(self.k)?;
        let index_bits = (self.collision_bit_length() + 1) as usize;
        indices.checked_mul(index_bits).map(|bits| bits / 8)
    }

    fn validate(&self) -> Result<(), AlgorithmError> {
        let invalid = |reason: String| Err(AlgorithmError::invalid_parameters("equihash", reason));

        if self.n % 8 != 0 {
            return invalid(format!("N must be a multiple of 8, got {}", self.n));
        }
        if self.k < 3 || self.k >= self.n {
            return invalid(format!("K must be in 3..N, got N={} K={}", self.n, self.k));
        }
        if self.n % (self.k + 1) != 0 {
            return invalid(format!("N={} is not divisible by K+1={}", self.n, self.k + 1));
        }
        if self.collision_bit_length() + 1 > MAX_EQUIHASH_INDEX_BITS {
            return invalid(format!(
                "N={} K={} needs {}-bit solution indices",
                self.n,
                self.k,
                self.collision_bit_length() + 1
            ));
        }
        if self.solution_len().is_none() {
            return invalid(format!("N={} K={} solutions are too large", self.n, self.k));
        }
        if self.personalization.len() != 8 {
            return invalid(format!(
                "personalization must be 8 bytes, got {:?}",
                self.personalization
            ));
        }

        Ok(())
    }
}

fn positive_u32(algorithm: &str, field: &str, value: i64) -> Result<u32, AlgorithmError> {
    if value <= 0 {
        return Err(AlgorithmError::invalid_parameters(
            algorithm,
            format!("{} must be positive, got {}", field, value),
        ));
    }

    u32::try_from(value).map_err(|_| {
        AlgorithmError::invalid_parameters(algorithm, format!("{} is out of range: {}", field, value))
    })
}
