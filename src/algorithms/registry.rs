//! Algorithm registry
//!
//! The set of supported algorithms is compiled in. A registry is built from
//! [`ALGORITHM_TABLE`] once, multipliers are normalized during that build,
//! and the result is read-only from then on.

use super::factory::{build_hasher, AlgorithmFamily, CallableKind, HashCallable};
use super::multiplier::{normalize_multipliers, DEFAULT_MULTIPLIER};
use super::target::EQUIHASH_STATIC_TARGET;
use super::AlgorithmError;
use crate::config::CoinConfig;
use crate::primitives::{DigestAlgorithm, HashPrimitives, NativePrimitives};
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Compiled-in table row, before multiplier normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmEntry {
    pub key: &'static str,
    pub multiplier: Option<u32>,
    pub family: AlgorithmFamily,
    pub static_difficulty_target: Option<[u8; 32]>,
}

const fn fixed(key: &'static str, multiplier: Option<u32>, algorithm: DigestAlgorithm) -> AlgorithmEntry {
    AlgorithmEntry {
        key,
        multiplier,
        family: AlgorithmFamily::Fixed(algorithm),
        static_difficulty_target: None,
    }
}

/// Every supported algorithm
pub const ALGORITHM_TABLE: [AlgorithmEntry; 18] = [
    fixed("sha256d", None, DigestAlgorithm::Sha256d),
    AlgorithmEntry {
        key: "scrypt",
        multiplier: Some(1 << 16),
        family: AlgorithmFamily::Scrypt,
        static_difficulty_target: None,
    },
    fixed("c11", None, DigestAlgorithm::C11),
    fixed("x11", None, DigestAlgorithm::X11),
    fixed("x13", None, DigestAlgorithm::X13),
    fixed("x15", None, DigestAlgorithm::X15),
    fixed("x16r", Some(1 << 8), DigestAlgorithm::X16r),
    fixed("x16rv2", Some(1 << 8), DigestAlgorithm::X16rv2),
    fixed("nist5", None, DigestAlgorithm::Nist5),
    fixed("quark", None, DigestAlgorithm::Quark),
    AlgorithmEntry {
        key: "keccak",
        multiplier: Some(1 << 8),
        family: AlgorithmFamily::Keccak,
        static_difficulty_target: None,
    },
    fixed("blake", Some(1 << 8), DigestAlgorithm::Blake),
    fixed("neoscrypt", Some(1 << 5), DigestAlgorithm::Neoscrypt),
    fixed("skein", None, DigestAlgorithm::Skein),
    fixed("groestl", Some(1 << 8), DigestAlgorithm::Groestl),
    fixed("fugue", Some(1 << 8), DigestAlgorithm::Fugue),
    fixed("qubit", None, DigestAlgorithm::Qubit),
    AlgorithmEntry {
        key: "equihash",
        multiplier: Some(1),
        family: AlgorithmFamily::Equihash,
        static_difficulty_target: Some(EQUIHASH_STATIC_TARGET),
    },
];

/// A registered algorithm
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    key: &'static str,
    multiplier: u32,
    family: AlgorithmFamily,
    static_difficulty_target: Option<[u8; 32]>,
    primitives: Arc<dyn HashPrimitives>,
}

impl AlgorithmDescriptor {
    fn new(entry: AlgorithmEntry, primitives: Arc<dyn HashPrimitives>) -> Self {
        Self {
            key: entry.key,
            multiplier: entry.multiplier.unwrap_or(DEFAULT_MULTIPLIER),
            family: entry.family,
            static_difficulty_target: entry.static_difficulty_target,
            primitives,
        }
    }

    /// Registry key
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Difficulty multiplier, always positive
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn family(&self) -> AlgorithmFamily {
        self.family
    }

    /// Fixed proof-of-work ceiling for verify-style algorithms (big-endian)
    pub fn static_difficulty_target(&self) -> Option<&[u8; 32]> {
        self.static_difficulty_target.as_ref()
    }

    /// Whether [`hasher`](Self::hasher) yields a verify callable
    pub fn is_verify(&self) -> bool {
        self.family.callable_kind() == CallableKind::Verify
    }

    /// Build this algorithm's callable for a coin
    pub fn hasher(&self, coin: &CoinConfig) -> Result<HashCallable, AlgorithmError> {
        build_hasher(self.family, coin, Arc::clone(&self.primitives))
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("key", &self.key)
            .field("multiplier", &self.multiplier)
            .field("family", &self.family)
            .field("static_difficulty_target", &self.static_difficulty_target.map(hex::encode))
            .finish()
    }
}

/// Immutable lookup table of algorithm descriptors
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    descriptors: Vec<AlgorithmDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl AlgorithmRegistry {
    /// Build the registry over the native primitive backend
    pub fn new() -> Self {
        Self::with_primitives(Arc::new(NativePrimitives::new()))
    }

    /// Build the registry over a custom primitive backend
    pub fn with_primitives(primitives: Arc<dyn HashPrimitives>) -> Self {
        let mut entries = ALGORITHM_TABLE.to_vec();
        normalize_multipliers(&mut entries);

        let descriptors: Vec<AlgorithmDescriptor> = entries
            .into_iter()
            .map(|entry| AlgorithmDescriptor::new(entry, Arc::clone(&primitives)))
            .collect();

        let index = descriptors
            .iter()
            .enumerate()
            .map(|(i, descriptor)| (descriptor.key, i))
            .collect();

        info!("Algorithm registry built with {} algorithms", descriptors.len());

        Self { descriptors, index }
    }

    /// Look up an algorithm by key
    pub fn lookup(&self, key: &str) -> Result<&AlgorithmDescriptor, AlgorithmError> {
        self.index
            .get(key)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| AlgorithmError::UnsupportedAlgorithm(key.to_string()))
    }

    /// Whether `key` names a supported algorithm
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Supported keys in table order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| d.key)
    }

    /// Descriptors in table order
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<AlgorithmRegistry> = OnceLock::new();

/// The process-wide registry over the native backend, built on first use
pub fn global_registry() -> &'static AlgorithmRegistry {
    GLOBAL_REGISTRY.get_or_init(AlgorithmRegistry::new)
}

/// Look up an algorithm in the process-wide registry
pub fn get_algorithm(key: &str) -> Result<&'static AlgorithmDescriptor, AlgorithmError> {
    global_registry().lookup(key)
}

/// Build the callable for the algorithm a coin configuration names
pub fn hasher_for_coin(coin: &CoinConfig) -> Result<HashCallable, AlgorithmError> {
    let key = coin.algorithm.as_deref().unwrap_or_default();
    let descriptor = get_algorithm(key)?;

    info!(
        "Building {} hasher for coin {}",
        descriptor.key(),
        coin.name.as_deref().unwrap_or("<unnamed>")
    );

    descriptor.hasher(coin)
}
