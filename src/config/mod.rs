//! Coin configuration and algorithm parameter resolution
//!
//! This module provides:
//! - The per-coin configuration a pool loads from its coin definition files
//! - Pure resolution of the optional algorithm fields into explicit,
//!   validated parameter structs

pub mod coin;
pub mod params;

pub use coin::{CoinConfig, ConfigError, EquihashConfig};
pub use params::{
    EquihashParams, KeccakMode, ScryptParams, DEFAULT_EQUIHASH_K, DEFAULT_EQUIHASH_N,
    DEFAULT_EQUIHASH_PERSONALIZATION, DEFAULT_SCRYPT_N, DEFAULT_SCRYPT_R,
};
