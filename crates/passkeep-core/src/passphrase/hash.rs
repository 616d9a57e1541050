//! scrypt key derivation for stored passphrases.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::config::ScryptCost;
use crate::error::{PasskeepError, Result};
use crate::secret::SecretBuffer;

/// Minimum pepper length in bytes.
pub const MIN_PEPPER_LENGTH: usize = 32;

/// Output length recorded in the scrypt parameter set. The derived key length
/// comes from the output buffer, so this only has to be a value scrypt accepts.
const PARAMS_LEN: usize = 32;

/// Derive a key from `secret` and return it as padded standard base64.
///
/// The salting material is `salt ++ pepper`. Length checks on salt and
/// pepper are the caller's concern; this only validates the cost.
pub(crate) fn derive(
    secret: &SecretBuffer,
    salt: &[u8],
    pepper: &[u8],
    cost: &ScryptCost,
) -> Result<String> {
    let params = scrypt_params(cost)?;

    let password = utf8_bytes(secret);
    let mut salting = Zeroizing::new(Vec::with_capacity(salt.len() + pepper.len()));
    salting.extend_from_slice(salt);
    salting.extend_from_slice(pepper);

    let mut digest = Zeroizing::new(vec![0u8; cost.key_length]);
    scrypt::scrypt(&password, &salting, &params, &mut digest)
        .map_err(|e| PasskeepError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(STANDARD.encode(&*digest))
}

/// Validate `cost` and convert it into scrypt parameters.
fn scrypt_params(cost: &ScryptCost) -> Result<scrypt::Params> {
    if cost.cpu_cost < 1 || cost.memory_cost < 1 || cost.parallelism < 1 || cost.key_length < 1 {
        return Err(PasskeepError::InvalidParameter(format!(
            "cost parameters must all be at least 1 (got N={}, r={}, p={}, len={})",
            cost.cpu_cost, cost.memory_cost, cost.parallelism, cost.key_length
        )));
    }
    if !cost.cpu_cost.is_power_of_two() {
        return Err(PasskeepError::InvalidParameter(format!(
            "cpu cost must be a power of two (got {})",
            cost.cpu_cost
        )));
    }
    let log_n = cost.cpu_cost.trailing_zeros() as u8;

    scrypt::Params::new(log_n, cost.memory_cost, cost.parallelism, PARAMS_LEN).map_err(|e| {
        PasskeepError::InvalidParameter(format!(
            "scrypt rejected N={}, r={}, p={}: {}",
            cost.cpu_cost, cost.memory_cost, cost.parallelism, e
        ))
    })
}

/// UTF-8 encoding of the secret in a zeroizing buffer.
fn utf8_bytes(secret: &SecretBuffer) -> Zeroizing<Vec<u8>> {
    let size = secret.as_chars().iter().map(|c| c.len_utf8()).sum();
    let mut bytes = Zeroizing::new(Vec::with_capacity(size));
    let mut scratch = [0u8; 4];
    for c in secret.as_chars() {
        bytes.extend_from_slice(c.encode_utf8(&mut scratch).as_bytes());
    }
    scratch.fill(0);
    std::hint::black_box(&scratch);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: ScryptCost = ScryptCost {
        cpu_cost: 16,
        memory_cost: 8,
        parallelism: 1,
        key_length: 32,
    };

    #[test]
    fn test_derive_deterministic() {
        let secret = SecretBuffer::from("aBCdef123");
        let salt = [7u8; 16];
        let pepper = [9u8; 32];

        let first = derive(&secret, &salt, &pepper, &FAST).unwrap();
        let second = derive(&secret, &salt, &pepper, &FAST).unwrap();
        assert_eq!(first, second);
        // 32 bytes of base64 with padding
        assert_eq!(first.len(), 44);
        assert!(first.ends_with('='));
    }

    #[test]
    fn test_pepper_changes_digest() {
        let secret = SecretBuffer::from("aBCdef123");
        let salt = [7u8; 16];

        let first = derive(&secret, &salt, &[1u8; 32], &FAST).unwrap();
        let second = derive(&secret, &salt, &[2u8; 32], &FAST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_salt_then_pepper_concatenation() {
        // Moving a byte across the salt/pepper boundary keeps the combined
        // salting material identical, so the digest must not change.
        let secret = SecretBuffer::from("aBCdef123");
        let mut combined = vec![3u8; 16];
        combined.extend_from_slice(&[5u8; 33]);

        let first = derive(&secret, &combined[..16], &combined[16..], &FAST).unwrap();
        let second = derive(&secret, &combined[..17], &combined[17..], &FAST).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_parameters_rejected() {
        for cost in [
            ScryptCost::new(0, 8, 1, 32),
            ScryptCost::new(16, 0, 1, 32),
            ScryptCost::new(16, 8, 0, 32),
            ScryptCost::new(16, 8, 1, 0),
        ] {
            assert!(matches!(
                scrypt_params(&cost),
                Err(PasskeepError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_non_power_of_two_cpu_cost_rejected() {
        let result = scrypt_params(&ScryptCost::new(1000, 8, 1, 32));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("power of two"));
    }

    #[test]
    fn test_utf8_bytes_matches_string_encoding() {
        let secret = SecretBuffer::from("你好abc");
        assert_eq!(utf8_bytes(&secret).as_slice(), "你好abc".as_bytes());
    }
}
