//! CLI commands for the algorithm registry
//!
//! Implements all command handlers for the `algos` binary.

use crate::algorithms::{
    get_algorithm, global_registry, target_hex, AlgorithmDescriptor, CallableKind,
    HashCallable,
};
use crate::config::CoinConfig;
use std::path::Path;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Load the coin configuration for a command
///
/// Without a file every parameter takes its default. The algorithm given on
/// the command line always wins over the one in the file.
pub fn load_coin_config(path: Option<&Path>, algorithm: &str) -> CliResult<CoinConfig> {
    let mut coin = match path {
        Some(path) => CoinConfig::from_file(path)?,
        None => CoinConfig::new(),
    };
    coin.algorithm = Some(algorithm.to_string());
    Ok(coin)
}

/// Decode a hex argument, tolerating a `0x` prefix
pub fn decode_hex_arg(name: &str, value: &str) -> CliResult<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).map_err(|e| format!("invalid hex in --{}: {}", name, e).into())
}

fn kind_label(descriptor: &AlgorithmDescriptor) -> &'static str {
    match descriptor.family().callable_kind() {
        CallableKind::Digest => "digest",
        CallableKind::Verify => "verify",
    }
}

/// List every supported algorithm
pub fn cmd_list() -> CliResult<()> {
    let registry = global_registry();

    println!("🧮 Supported algorithms ({})", registry.len());
    println!("   {:<12} {:>10}  {}", "KEY", "MULTIPLIER", "KIND");
    for descriptor in registry.iter() {
        println!(
            "   {:<12} {:>10}  {}",
            descriptor.key(),
            descriptor.multiplier(),
            kind_label(descriptor)
        );
    }

    Ok(())
}

/// Show a single algorithm
pub fn cmd_info(key: &str) -> CliResult<()> {
    let descriptor = get_algorithm(key)?;

    println!("🧮 Algorithm: {}", descriptor.key());
    println!("   ├─ Multiplier: {}", descriptor.multiplier());
    println!("   ├─ Family: {:?}", descriptor.family());
    match descriptor.static_difficulty_target() {
        Some(target) => {
            println!("   ├─ Kind: {}", kind_label(descriptor));
            println!("   └─ Static target: {}", target_hex(target));
        }
        None => println!("   └─ Kind: {}", kind_label(descriptor)),
    }

    Ok(())
}

/// Hash data with a digest algorithm
pub fn cmd_hash(key: &str, config: Option<&Path>, data: &str, ntime: u32) -> CliResult<()> {
    let coin = load_coin_config(config, key)?;
    let descriptor = get_algorithm(key)?;
    let data = decode_hex_arg("data", data)?;

    let digest = match descriptor.hasher(&coin)? {
        HashCallable::Digest(digest) => digest(&data, ntime)?,
        HashCallable::Verify(_) => {
            return Err(format!("{} verifies solutions, use the verify command", key).into())
        }
    };

    println!("🔨 {} digest of {} bytes", descriptor.key(), data.len());
    println!("   ├─ Hash: {}", hex::encode(&digest));
    println!("   └─ Multiplier: {}", descriptor.multiplier());

    Ok(())
}

/// Verify an Equihash-style solution
pub fn cmd_verify(key: &str, config: Option<&Path>, header: &str, solution: &str) -> CliResult<()> {
    let coin = load_coin_config(config, key)?;
    let descriptor = get_algorithm(key)?;
    let header = decode_hex_arg("header", header)?;
    let solution = decode_hex_arg("solution", solution)?;

    let valid = match descriptor.hasher(&coin)? {
        HashCallable::Verify(verify) => verify(&header, &solution)?,
        HashCallable::Digest(_) => {
            return Err(format!("{} produces digests, use the hash command", key).into())
        }
    };

    if valid {
        println!("✅ Solution is valid for {}", descriptor.key());
    } else {
        println!("❌ Solution is NOT valid for {}", descriptor.key());
    }

    if let Some(target) = descriptor.static_difficulty_target() {
        println!("   └─ Static target: {}", target_hex(target));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_hex_arg() {
        assert_eq!(decode_hex_arg("data", "0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex_arg("data", "ff").unwrap(), vec![0xff]);
        assert!(decode_hex_arg("data", "xyz").is_err());
    }

    #[test]
    fn test_load_coin_config_default() {
        let coin = load_coin_config(None, "scrypt").unwrap();
        assert_eq!(coin.algorithm.as_deref(), Some("scrypt"));
        assert_eq!(coin.n_value, None);
    }

    #[test]
    fn test_load_coin_config_file_overrides_algorithm() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"algorithm": "x11", "nValue": 2048}}"#).unwrap();

        let coin = load_coin_config(Some(file.path()), "scrypt").unwrap();
        assert_eq!(coin.algorithm.as_deref(), Some("scrypt"));
        assert_eq!(coin.n_value, Some(2048));
    }

    #[test]
    fn test_cmd_hash() {
        assert!(cmd_hash("sha256d", None, "00", 0).is_ok());
        assert!(cmd_hash("x17", None, "00", 0).is_err());
        assert!(cmd_hash("equihash", None, "00", 0).is_err());
        // primitive failure surfaces to the caller
        assert!(cmd_hash("x11", None, "00", 0).is_err());
    }

    #[test]
    fn test_cmd_verify_rejects_digest_algorithm() {
        assert!(cmd_verify("scrypt", None, "00", "00").is_err());
        assert!(cmd_verify("equihash", None, &"00".repeat(140), &"00".repeat(1344)).is_ok());
    }

    #[test]
    fn test_cmd_list_and_info() {
        assert!(cmd_list().is_ok());
        assert!(cmd_info("equihash").is_ok());
        assert!(cmd_info("nope").is_err());
    }
}
