//! Content checksums for the scan cache.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// Hex digest of `content`.
///
/// Unseeded, so digests are stable across runs and can be persisted.
pub fn checksum(content: &[u8]) -> String {
    let mut hasher = FxHasher::default();
    hasher.write_usize(content.len());
    hasher.write(content);
    format!("{:016x}", hasher.finish())
}
