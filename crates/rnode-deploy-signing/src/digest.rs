//! BLAKE2b-256 digest of the canonical deploy bytes.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use blake2::Digest;

/// BLAKE2b parameterized to 32 bytes of output.
type Blake2b256 = Blake2b<U32>;

/// Hash the canonical deploy bytes. This digest is the value the
/// signature covers.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}
