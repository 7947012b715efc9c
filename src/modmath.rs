//! Modular arithmetic for the math labs.
//!
//! Everything works on plain `u64` values with widening through `u128`,
//! so no operation here can silently wrap. Preconditions are asserted
//! rather than returned: a zero modulus is a caller bug, not a runtime
//! condition to handle.

use rand::Rng;

/// Greatest common divisor by Euclid's algorithm. `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y == g` where
/// `g` is `gcd(a, b)`. Intended for non-negative inputs.
pub fn ext_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let mut old_r = a;
    let mut r = b;
    let mut old_s: i128 = 1;
    let mut s: i128 = 0;
    let mut old_t: i128 = 0;
    let mut t: i128 = 1;
    while r != 0 {
        let q = old_r / r;
        let tmp = old_r - q * r;
        old_r = r;
        r = tmp;
        let tmp = old_s - q * s;
        old_s = s;
        s = tmp;
        let tmp = old_t - q * t;
        old_t = t;
        t = tmp;
    }
    (old_r, old_s, old_t)
}

/// `(a + b) mod m`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    assert!(m != 0, "modulus must be non-zero");
    ((u128::from(a) + u128::from(b)) % u128::from(m)) as u64
}

/// `(a - b) mod m`, always in `0..m`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    assert!(m != 0, "modulus must be non-zero");
    let m128 = u128::from(m);
    ((u128::from(a) % m128 + m128 - u128::from(b) % m128) % m128) as u64
}

/// `(a * b) mod m`.
///
/// # Panics
///
/// Panics if `m` is zero.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    assert!(m != 0, "modulus must be non-zero");
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

/// `base^exp mod modulus` by square-and-multiply. `0^0` is 1.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "modulus must be non-zero");
    if modulus == 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut result: u128 = 1;
    let mut b = u128::from(base) % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }
    result as u64
}

/// The multiplicative inverse of `a` modulo `modulus`, or `None` when
/// `gcd(a, modulus) != 1` and no inverse exists.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_inv(a: u64, modulus: u64) -> Option<u64> {
    assert!(modulus != 0, "modulus must be non-zero");
    let (g, x, _) = ext_gcd(i128::from(a % modulus), i128::from(modulus));
    if g != 1 {
        return None;
    }
    let m = i128::from(modulus);
    Some(((x % m + m) % m) as u64)
}

// Witness set that makes Miller-Rabin deterministic for all u64.
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin primality test, exact for all `u64`.
pub fn is_probable_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in MILLER_RABIN_BASES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }
    'witness: for a in MILLER_RABIN_BASES {
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

// Moduli the practice generators draw from.
const PRACTICE_PRIMES: [u64; 14] = [11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61];

/// A modular-exponentiation exercise with its expected answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowPractice {
    /// Base of the exponentiation.
    pub base: u64,
    /// Exponent.
    pub exponent: u64,
    /// Prime modulus.
    pub modulus: u64,
    /// `base^exponent mod modulus`.
    pub answer: u64,
}

/// Draws a fresh exponentiation exercise over a small prime modulus.
pub fn random_pow_practice<R: Rng + ?Sized>(rng: &mut R) -> PowPractice {
    let modulus = PRACTICE_PRIMES[rng.gen_range(0..PRACTICE_PRIMES.len())];
    let base = rng.gen_range(2..modulus);
    let exponent = rng.gen_range(2..=40);
    PowPractice {
        base,
        exponent,
        modulus,
        answer: mod_pow(base, exponent, modulus),
    }
}

/// An inverse-finding exercise with its expected answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InversePractice {
    /// Value to invert.
    pub value: u64,
    /// Prime modulus.
    pub modulus: u64,
    /// The `x` in `value * x = 1 (mod modulus)`.
    pub answer: u64,
}

/// Draws a fresh inversion exercise over a small prime modulus.
pub fn random_inverse_practice<R: Rng + ?Sized>(rng: &mut R) -> InversePractice {
    let modulus = PRACTICE_PRIMES[rng.gen_range(0..PRACTICE_PRIMES.len())];
    let value = rng.gen_range(2..modulus);
    let answer = mod_inv(value, modulus).expect("modulus drawn from a prime table");
    InversePractice {
        value,
        modulus,
        answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 31), 1);
        assert_eq!(gcd(462, 1071), 21);
    }

    #[test]
    fn ext_gcd_satisfies_bezout() {
        for (a, b) in [(240i128, 46i128), (17, 31), (0, 5), (1_000_003, 77)] {
            let (g, x, y) = ext_gcd(a, b);
            assert_eq!(a * x + b * y, g);
            assert_eq!(g, i128::from(gcd(a as u64, b as u64)));
        }
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(3, 5, 7), 5);
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(2, 10, 1024), 0);
        assert_eq!(mod_pow(5, 0, 7), 1);
        assert_eq!(mod_pow(0, 0, 7), 1);
        assert_eq!(mod_pow(999, 999, 1), 0);
        // Fermat's little theorem at a large prime.
        let p = 1_000_000_007;
        assert_eq!(mod_pow(31, p - 1, p), 1);
    }

    #[test]
    fn mod_inv_round_trips_over_a_prime() {
        let m = 11;
        for a in 1..m {
            let inv = mod_inv(a, m).unwrap();
            assert_eq!(mul_mod(a, inv, m), 1);
        }
    }

    #[test]
    fn mod_inv_rejects_shared_factors() {
        assert_eq!(mod_inv(4, 8), None);
        assert_eq!(mod_inv(6, 9), None);
        assert_eq!(mod_inv(3, 7), Some(5));
    }

    #[test]
    fn sub_mod_stays_in_range() {
        assert_eq!(sub_mod(3, 10, 7), 0);
        assert_eq!(sub_mod(0, 1, 5), 4);
        assert_eq!(sub_mod(9, 2, 5), 2);
    }

    #[test]
    fn test_primality() {
        for p in [2u64, 3, 5, 7, 11, 13, 97, 7919, 1_000_000_007, 2_305_843_009_213_693_951] {
            assert!(is_probable_prime(p), "{p} is prime");
        }
        for c in [0u64, 1, 4, 9, 91, 561, 7918, 3_215_031_751] {
            assert!(!is_probable_prime(c), "{c} is composite");
        }
    }

    #[test]
    fn practice_answers_check_out() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = random_pow_practice(&mut rng);
            assert!(is_probable_prime(p.modulus));
            assert!(p.base >= 2 && p.base < p.modulus);
            assert_eq!(p.answer, mod_pow(p.base, p.exponent, p.modulus));

            let inv = random_inverse_practice(&mut rng);
            assert_eq!(mul_mod(inv.value, inv.answer, inv.modulus), 1);
        }
    }
}
