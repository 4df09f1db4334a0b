//! Default primitive backend
//!
//! Delegates to the RustCrypto and Zcash crates for SHA-256d, Keccak-256,
//! scrypt and Equihash verification. The chained X-family digests and the
//! coin-specific variants of Blake, Skein, Groestl and the rest (extra rounds,
//! truncation, SHA-256 finalization) are left to the embedding backend: they
//! report [`PrimitiveError::Unavailable`] here, and pools that mine those
//! coins plug in their own [`HashPrimitives`].

use super::{DigestAlgorithm, HashPrimitives, PrimitiveError};
use crate::config::{EquihashParams, ScryptParams, DEFAULT_EQUIHASH_PERSONALIZATION};
use log::debug;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Length of the nonce that terminates an Equihash block header
pub const EQUIHASH_NONCE_LEN: usize = 32;

/// Output length of the scrypt proof-of-work hash
pub const SCRYPT_OUTPUT_LEN: usize = 32;

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes double SHA-256 hash (SHA-256 of SHA-256)
pub fn double_sha256(data: &[u8]) -> Vec<u8> {
    sha256(&sha256(data))
}

/// Computes the original (pre-NIST) Keccak-256 hash
pub fn keccak256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Primitive backend built on the crates linked into this library
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrimitives;

impl NativePrimitives {
    pub fn new() -> Self {
        Self
    }
}

impl HashPrimitives for NativePrimitives {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        match algorithm {
            DigestAlgorithm::Sha256d => Ok(double_sha256(data)),
            DigestAlgorithm::Keccak => Ok(keccak256(data)),
            other => Err(PrimitiveError::Unavailable(other)),
        }
    }

    fn scrypt(&self, data: &[u8], params: ScryptParams) -> Result<Vec<u8>, PrimitiveError> {
        // Litecoin-style scrypt: the header is both password and salt, p = 1
        let scrypt_params = scrypt::Params::new(params.log_n(), params.r, 1, SCRYPT_OUTPUT_LEN)
            .map_err(|e| {
                PrimitiveError::Unsupported(format!("scrypt N={} r={}: {}", params.n, params.r, e))
            })?;

        let mut output = vec![0u8; SCRYPT_OUTPUT_LEN];
        scrypt::scrypt(data, data, &scrypt_params, &mut output)
            .map_err(|e| PrimitiveError::Backend(e.to_string()))?;

        Ok(output)
    }

    fn equihash_verify(
        &self,
        header: &[u8],
        solution: &[u8],
        params: &EquihashParams,
    ) -> Result<bool, PrimitiveError> {
        if params.personalization != DEFAULT_EQUIHASH_PERSONALIZATION {
            return Err(PrimitiveError::Unsupported(format!(
                "equihash personalization {:?}",
                params.personalization
            )));
        }

        if header.len() < EQUIHASH_NONCE_LEN {
            return Err(PrimitiveError::MalformedInput(format!(
                "equihash header is {} bytes, need at least {}",
                header.len(),
                EQUIHASH_NONCE_LEN
            )));
        }

        let expected_len = params.solution_len().ok_or_else(|| {
            PrimitiveError::Unsupported(format!("equihash N={} K={}", params.n, params.k))
        })?;
        if solution.len() != expected_len {
            return Err(PrimitiveError::MalformedInput(format!(
                "equihash solution is {} bytes, expected {}",
                solution.len(),
                expected_len
            )));
        }

        let (input, nonce) = header.split_at(header.len() - EQUIHASH_NONCE_LEN);

        // With lengths checked, any remaining failure is a wrong solution
        match equihash::is_valid_solution(params.n, params.k, input, nonce, solution) {
            Ok(()) => Ok(true),
            Err(e) => {
                debug!("Equihash solution rejected: {:?}", e);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        assert_eq!(
            hex::encode(sha256(b"hello world")),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_double_sha256() {
        let data = b"hello world";
        let hash = double_sha256(data);
        assert_eq!(hash.len(), 32);
        assert_eq!(hash, sha256(&sha256(data)));
    }

    #[test]
    fn test_keccak256_empty() {
        // Keccak-256, not SHA3-256
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_native_digest_dispatch() {
        let backend = NativePrimitives::new();
        assert_eq!(
            backend.digest(DigestAlgorithm::Sha256d, b"abc").unwrap(),
            double_sha256(b"abc")
        );
        assert_eq!(
            backend.digest(DigestAlgorithm::Keccak, b"abc").unwrap(),
            keccak256(b"abc")
        );
    }

    #[test]
    fn test_native_unavailable_primitive() {
        let backend = NativePrimitives::new();
        assert_eq!(
            backend.digest(DigestAlgorithm::X11, b"abc"),
            Err(PrimitiveError::Unavailable(DigestAlgorithm::X11))
        );
    }

    #[test]
    fn test_scrypt_rfc7914_vector() {
        // RFC 7914 section 12, first vector: P = "", S = "", N = 16, r = 1, p = 1
        let backend = NativePrimitives::new();
        let hash = backend.scrypt(b"", ScryptParams { n: 16, r: 1 }).unwrap();
        assert_eq!(
            hex::encode(hash),
            "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442"
        );
    }

    #[test]
    fn test_equihash_short_header() {
        let backend = NativePrimitives::new();
        let result = backend.equihash_verify(&[0u8; 8], &[], &EquihashParams::default());
        assert!(matches!(result, Err(PrimitiveError::MalformedInput(_))));
    }

    #[test]
    fn test_equihash_foreign_personalization() {
        let backend = NativePrimitives::new();
        let params = EquihashParams {
            personalization: "BgoldPoW".to_string(),
            ..EquihashParams::default()
        };
        let result = backend.equihash_verify(&[0u8; 140], &[0u8; 1344], &params);
        assert!(matches!(result, Err(PrimitiveError::Unsupported(_))));
    }

    #[test]
    fn test_equihash_wrong_solution_length() {
        let backend = NativePrimitives::new();
        let params = EquihashParams::default();

        for solution in [&[][..], &[0u8; 3][..], &[0u8; 1343][..], &[0u8; 1345][..]] {
            let result = backend.equihash_verify(&[0u8; 140], solution, &params);
            assert!(matches!(result, Err(PrimitiveError::MalformedInput(_))));
        }
    }

    #[test]
    fn test_equihash_garbage_solution_rejected() {
        let backend = NativePrimitives::new();
        let valid = backend
            .equihash_verify(&[0u8; 140], &[0u8; 1344], &EquihashParams::default())
            .unwrap();
        assert!(!valid);
    }
}
