//! Hash lab: the same bytes through three digests.
//!
//! The lab runs one input through SHA-256, SHA3-256, and BLAKE2b-256
//! side by side, then counts avalanche bits between two inputs so a
//! player can watch a single flipped bit scramble half the output.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use sha2::Sha256;
use sha3::Sha3_256;

type Blake2b256 = Blake2b<U32>;

/// One row of the lab's digest table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestReport {
    /// Algorithm label, e.g. `"SHA-256"`.
    pub algorithm: &'static str,
    /// The 32-byte digest.
    pub digest: [u8; 32],
}

impl DigestReport {
    /// The digest as lowercase hex.
    pub fn hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// SHA-256 of the input.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// SHA3-256 of the input.
pub fn sha3_256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// BLAKE2b with a 256-bit output of the input.
pub fn blake2b_256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Runs the input through all three lab hashes, in a fixed order.
pub fn digest_report(input: &[u8]) -> Vec<DigestReport> {
    vec![
        DigestReport {
            algorithm: "SHA-256",
            digest: sha256(input),
        },
        DigestReport {
            algorithm: "SHA3-256",
            digest: sha3_256(input),
        },
        DigestReport {
            algorithm: "BLAKE2b-256",
            digest: blake2b_256(input),
        },
    ]
}

/// Counts differing bits between two equal-length digests.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn avalanche_bits(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len(), "digests must be the same length");
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}
