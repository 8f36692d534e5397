use sha2::{Digest, Sha256};

/// Derive the random value delivered to a consumer from an operator seed.
///
/// `value = u128_be( sha256( seed || request_id_u64_be )[0..16] )`
///
/// Mixing the request id into the digest keeps two requests fulfilled from
/// the same seed from receiving the same value.
pub fn derive_random_value(seed: &[u8], request_id: u64) -> u128 {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.update(request_id.to_be_bytes());
    let digest: [u8; 32] = hasher.finalize().into();

    let mut value_bytes = [0u8; 16];
    value_bytes.copy_from_slice(&digest[0..16]);
    u128::from_be_bytes(value_bytes)
}
