//! Polynomial-commitment lab: commit, open, verify.
//!
//! A pedagogical stand-in for real polynomial commitment schemes. The
//! commitment is a domain-separated BLAKE2b digest over the modulus,
//! the reduced coefficients, and a blinding nonce: binding comes from
//! the hash, hiding from the nonce. The opening reveals the whole
//! polynomial, and that lack of succinctness is the lesson the lab
//! ends on.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use rand::Rng;

use crate::modmath::{add_mod, mul_mod};

type Blake2b256 = Blake2b<U32>;

const COMMIT_DOMAIN: &[u8] = b"ZKCLASH_POLY_COMMIT_V1";

/// A sealed commitment to one polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialCommitment {
    digest: [u8; 32],
}

impl PolynomialCommitment {
    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.digest
    }

    /// The digest as lowercase hex.
    pub fn hex(&self) -> String {
        hex::encode(self.digest)
    }
}

/// A revealed opening: everything needed to re-derive the commitment
/// and check one claimed evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialOpening {
    /// Coefficients in ascending degree, reduced mod `modulus`.
    pub coefficients: Vec<u64>,
    /// The field modulus.
    pub modulus: u64,
    /// The nonce that was folded into the commitment.
    pub blinding: [u8; 32],
    /// The evaluation point.
    pub point: u64,
    /// The claimed value of the polynomial at `point`.
    pub value: u64,
}

/// Draws a fresh 32-byte blinding nonce.
pub fn random_blinding<R: Rng + ?Sized>(rng: &mut R) -> [u8; 32] {
    let mut blinding = [0u8; 32];
    rng.fill(&mut blinding[..]);
    blinding
}

/// Evaluates the polynomial at `x` by Horner's rule, mod `modulus`.
/// An empty coefficient list is the zero polynomial.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn eval_polynomial(coefficients: &[u64], x: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    let mut acc = 0u64;
    for &c in coefficients.iter().rev() {
        acc = add_mod(mul_mod(acc, x, modulus), c, modulus);
    }
    acc
}

/// Commits to a polynomial under a blinding nonce.
///
/// Coefficients are reduced before hashing, so two descriptions of the
/// same field polynomial commit identically. The coefficient count is
/// hashed too: trailing zero coefficients produce a different
/// commitment, because they produce a different description.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn commit_polynomial(
    coefficients: &[u64],
    modulus: u64,
    blinding: &[u8; 32],
) -> PolynomialCommitment {
    assert!(modulus != 0, "modulus must be non-zero");
    let mut hasher = Blake2b256::new();
    hasher.update(COMMIT_DOMAIN);
    hasher.update(modulus.to_le_bytes());
    hasher.update((coefficients.len() as u64).to_le_bytes());
    for &c in coefficients {
        hasher.update((c % modulus).to_le_bytes());
    }
    hasher.update(blinding);
    PolynomialCommitment {
        digest: hasher.finalize().into(),
    }
}

/// Opens a commitment at a point: reveals the reduced coefficients,
/// the blinding, and the evaluation there.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn open_polynomial(
    coefficients: &[u64],
    modulus: u64,
    blinding: [u8; 32],
    point: u64,
) -> PolynomialOpening {
    let point = point % modulus;
    PolynomialOpening {
        coefficients: coefficients.iter().map(|c| c % modulus).collect(),
        modulus,
        blinding,
        point,
        value: eval_polynomial(coefficients, point, modulus),
    }
}

/// Checks an opening against a commitment: the digest must re-derive
/// and the claimed value must match the revealed polynomial.
pub fn verify_opening(commitment: &PolynomialCommitment, opening: &PolynomialOpening) -> bool {
    if opening.modulus == 0 {
        return false;
    }
    let rederived = commit_polynomial(&opening.coefficients, opening.modulus, &opening.blinding);
    if rederived != *commitment {
        log::debug!("[COMMIT] opening does not re-derive the digest");
        return false;
    }
    eval_polynomial(&opening.coefficients, opening.point, opening.modulus) == opening.value
}
