//! Sharding Router
//!
//! Maps keys to shards and shards to bucket file names.
//!
//! ## Responsibilities
//! - Hash a key's raw bytes with FNV-1a (64-bit)
//! - Select a shard by masking the hash with `shard_count - 1`
//! - Name the backing file for a shard id
//!
//! The mapping is a pure function of the key bytes: no process-specific
//! seeding, so the same key lands in the same shard across restarts. All
//! records for a key therefore live in exactly one bucket file, and a query
//! never has to consult more than one shard.

/// FNV-1a 64-bit offset basis
const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime
const FNV_PRIME: u64 = 0x100000001b3;

/// Compute the FNV-1a 64-bit hash of a byte slice.
///
/// Each byte is XORed into the state, then the state is multiplied by the
/// FNV prime. Total over all inputs, including the empty slice.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Select the shard for a key.
///
/// `shard_count` must be a power of two; the hash is masked rather than
/// reduced modulo. Validated once at [`Config::validate`](crate::Config),
/// not here.
pub fn shard_id(key: &[u8], shard_count: usize) -> usize {
    (fnv1a64(key) & (shard_count as u64 - 1)) as usize
}

/// File name for a shard's bucket, e.g. `bucket_3.dat`.
pub fn shard_file_name(id: usize) -> String {
    format!("bucket_{}.dat", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-answer vectors for FNV-1a 64-bit.
    #[test]
    fn fnv1a64_known_vectors() {
        assert_eq!(fnv1a64(b""), 0xcbf29ce484222325);
        assert_eq!(fnv1a64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a64(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn shard_id_is_deterministic() {
        for key in [&b"alice"[..], b"bob", b"", b"some longer key bytes"] {
            let first = shard_id(key, 8);
            for _ in 0..10 {
                assert_eq!(shard_id(key, 8), first);
            }
            assert!(first < 8);
        }
    }

    #[test]
    fn shard_id_stays_in_range() {
        for count in [1, 2, 4, 8, 16, 64] {
            for i in 0..500u32 {
                let key = format!("key-{}", i);
                assert!(shard_id(key.as_bytes(), count) < count);
            }
        }
    }

    #[test]
    fn shard_file_name_format() {
        assert_eq!(shard_file_name(0), "bucket_0.dat");
        assert_eq!(shard_file_name(7), "bucket_7.dat");
    }
}
