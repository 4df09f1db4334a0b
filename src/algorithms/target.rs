//! Proof-of-work targets

/// Baseline Equihash target `0x0007ffff...ff`, big-endian
pub const EQUIHASH_STATIC_TARGET: [u8; 32] = {
    let mut target = [0xff; 32];
    target[0] = 0x00;
    target[1] = 0x07;
    target
};

/// Checks whether `hash` is at or below `target`
///
/// Both values are big-endian and must have the same width.
pub fn meets_target(hash: &[u8], target: &[u8]) -> bool {
    hash.len() == target.len() && hash <= target
}

/// Hex form of a target
pub fn target_hex(target: &[u8]) -> String {
    hex::encode(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equihash_static_target() {
        assert_eq!(
            target_hex(&EQUIHASH_STATIC_TARGET),
            "0007ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_meets_target() {
        let mut hash = [0xffu8; 32];
        hash[0] = 0x00;
        hash[1] = 0x06;
        assert!(meets_target(&hash, &EQUIHASH_STATIC_TARGET));

        hash[1] = 0x08;
        assert!(!meets_target(&hash, &EQUIHASH_STATIC_TARGET));

        assert!(meets_target(&EQUIHASH_STATIC_TARGET, &EQUIHASH_STATIC_TARGET));
    }

    #[test]
    fn test_meets_target_width_mismatch() {
        assert!(!meets_target(&[0u8; 31], &EQUIHASH_STATIC_TARGET));
    }
}
