//! Difficulty multiplier normalization
//!
//! Algorithms whose output distribution differs from SHA-256d declare a
//! power-of-two multiplier so share difficulty stays comparable across
//! coins. Everything that declares nothing scales by one.

use super::registry::AlgorithmEntry;

/// Multiplier assigned to algorithms that do not declare one
pub const DEFAULT_MULTIPLIER: u32 = 1;

/// Give every entry a multiplier
///
/// Unset and zero multipliers become [`DEFAULT_MULTIPLIER`]; declared ones
/// are left alone, so running the pass again changes nothing.
pub fn normalize_multipliers(entries: &mut [AlgorithmEntry]) {
    for entry in entries.iter_mut() {
        match entry.multiplier {
            Some(m) if m > 0 => {}
            _ => entry.multiplier = Some(DEFAULT_MULTIPLIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::factory::AlgorithmFamily;
    use crate::primitives::DigestAlgorithm;

    fn entry(key: &'static str, multiplier: Option<u32>) -> AlgorithmEntry {
        AlgorithmEntry {
            key,
            multiplier,
            family: AlgorithmFamily::Fixed(DigestAlgorithm::Sha256d),
            static_difficulty_target: None,
        }
    }

    #[test]
    fn test_unset_multiplier_defaults_to_one() {
        let mut entries = vec![entry("plain", None), entry("zero", Some(0))];
        normalize_multipliers(&mut entries);

        assert_eq!(entries[0].multiplier, Some(1));
        assert_eq!(entries[1].multiplier, Some(1));
    }

    #[test]
    fn test_declared_multiplier_kept() {
        let mut entries = vec![entry("wide", Some(256)), entry("scrypt", Some(1 << 16))];
        normalize_multipliers(&mut entries);

        assert_eq!(entries[0].multiplier, Some(256));
        assert_eq!(entries[1].multiplier, Some(65536));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let mut entries = vec![entry("plain", None), entry("wide", Some(256))];
        normalize_multipliers(&mut entries);
        let first = entries.clone();

        normalize_multipliers(&mut entries);
        assert_eq!(entries, first);
    }
}
