//! Key functions the contracts hand to the map containers.

use core::cmp::Ordering;

use sha2::{Digest, Sha256};
use types::address::Address;

pub fn address_eq(left: &Address, right: &Address) -> bool {
    left == right
}

/// Bucket key for an account id: SHA-256 of the raw bytes, folded to the
/// first eight bytes little-endian. Equal addresses hash equal, as the map
/// contract demands.
pub fn address_hash(key: &Address) -> u64 {
    let digest = Sha256::digest(key.0);
    u64::from_le_bytes(digest[..8].try_into().unwrap())
}

/// Lexicographic byte order over account ids.
pub fn address_cmp(left: &Address, right: &Address) -> Ordering {
    left.0.cmp(&right.0)
}
