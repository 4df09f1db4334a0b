//! Per-coin configuration
//!
//! Coin definitions are JSON documents owned by the pool. Only the fields the
//! algorithm layer understands are modelled here; anything else is ignored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufReader};
use std::path::Path;
use thiserror::Error;

/// Coin configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Equihash section of a coin definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquihashConfig {
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    #[serde(rename = "K", default, skip_serializing_if = "Option::is_none")]
    pub k: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalization: Option<String>,
}

/// Coin configuration as supplied by the pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinConfig {
    /// Coin name, e.g. "Litecoin"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ticker symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Registry key of the coin's proof-of-work algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Scrypt N cost
    #[serde(rename = "nValue", default, skip_serializing_if = "Option::is_none")]
    pub n_value: Option<i64>,
    /// Scrypt r cost
    #[serde(rename = "rValue", default, skip_serializing_if = "Option::is_none")]
    pub r_value: Option<i64>,
    /// Selects timestamp-bound double Keccak
    #[serde(rename = "normalHashing", default, skip_serializing_if = "Option::is_none")]
    pub normal_hashing: Option<bool>,
    /// Equihash parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<EquihashConfig>,
}

impl CoinConfig {
    /// Create an empty configuration (every parameter defaulted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that only names the algorithm
    pub fn for_algorithm(algorithm: &str) -> Self {
        Self {
            algorithm: Some(algorithm.to_string()),
            ..Default::default()
        }
    }

    /// Parse a coin definition from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a coin definition from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_scrypt_coin() {
        let json = r#"{
            "name": "Litecoin",
            "symbol": "LTC",
            "algorithm": "scrypt",
            "nValue": 1024,
            "rValue": 1,
            "peerMagic": "fbc0b6db"
        }"#;

        let coin = CoinConfig::from_json_str(json).unwrap();
        assert_eq!(coin.symbol.as_deref(), Some("LTC"));
        assert_eq!(coin.algorithm.as_deref(), Some("scrypt"));
        assert_eq!(coin.n_value, Some(1024));
        assert_eq!(coin.r_value, Some(1));
        assert_eq!(coin.normal_hashing, None);
        assert_eq!(coin.parameters, None);
    }

    #[test]
    fn test_parse_partial_equihash_parameters() {
        let json = r#"{"algorithm": "equihash", "parameters": {"K": 7}}"#;

        let coin = CoinConfig::from_json_str(json).unwrap();
        let params = coin.parameters.unwrap();
        assert_eq!(params.n, None);
        assert_eq!(params.k, Some(7));
        assert_eq!(params.personalization, None);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = CoinConfig::from_json_str("{\"nValue\": \"lots\"}");
        assert!(matches!(result, Err(ConfigError::SerializationError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"algorithm": "keccak", "normalHashing": true}}"#).unwrap();

        let coin = CoinConfig::from_file(file.path()).unwrap();
        assert_eq!(coin.algorithm.as_deref(), Some("keccak"));
        assert_eq!(coin.normal_hashing, Some(true));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CoinConfig::from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let coin = CoinConfig::for_algorithm("x11");
        assert_eq!(serde_json::to_string(&coin).unwrap(), r#"{"algorithm":"x11"}"#);
    }
}
