//! Elliptic-curve lab: a toy short-Weierstrass curve over `F_p`.
//!
//! Group law only, sized for blackboard numbers. Nothing here is
//! constant-time or fit for real keys; the lab exists so a player can
//! add points by hand and check their answers against the engine.

use std::collections::BTreeMap;

use crate::modmath::{add_mod, is_probable_prime, mod_inv, mul_mod, sub_mod};

/// A point on a toy curve: affine coordinates or the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePoint {
    /// The group identity.
    Infinity,
    /// An affine point with coordinates in `0..p`.
    Affine {
        /// x-coordinate.
        x: u64,
        /// y-coordinate.
        y: u64,
    },
}

/// The curve `y^2 = x^3 + a*x + b` over `F_p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToyCurve {
    a: u64,
    b: u64,
    p: u64,
}

impl ToyCurve {
    /// Builds a curve, reducing `a` and `b` modulo `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not a prime greater than 3, or if the curve is
    /// singular (`4a^3 + 27b^2 = 0 (mod p)`).
    pub fn new(a: u64, b: u64, p: u64) -> ToyCurve {
        assert!(
            p > 3 && is_probable_prime(p),
            "p must be a prime greater than 3"
        );
        let a = a % p;
        let b = b % p;
        let a_cubed = mul_mod(a, mul_mod(a, a, p), p);
        let discriminant = add_mod(
            mul_mod(4, a_cubed, p),
            mul_mod(27, mul_mod(b, b, p), p),
            p,
        );
        assert!(discriminant != 0, "curve is singular");
        ToyCurve { a, b, p }
    }

    /// Coefficient `a`.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> u64 {
        self.b
    }

    /// The field prime `p`.
    pub fn prime(&self) -> u64 {
        self.p
    }

    /// Whether the point satisfies the curve equation.
    pub fn contains(&self, point: CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                if x >= self.p || y >= self.p {
                    return false;
                }
                let lhs = mul_mod(y, y, self.p);
                let x_cubed = mul_mod(x, mul_mod(x, x, self.p), self.p);
                let rhs = add_mod(add_mod(x_cubed, mul_mod(self.a, x, self.p), self.p), self.b, self.p);
                lhs == rhs
            }
        }
    }

    /// The inverse of a point, mirrored across the x-axis.
    pub fn negate(&self, point: CurvePoint) -> CurvePoint {
        match point {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x,
                y: (self.p - y) % self.p,
            },
        }
    }

    /// Adds two points with the chord-and-tangent rule.
    pub fn add(&self, lhs: CurvePoint, rhs: CurvePoint) -> CurvePoint {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (CurvePoint::Infinity, q) => return q,
            (q, CurvePoint::Infinity) => return q,
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };
        if x1 == x2 && add_mod(y1, y2, self.p) == 0 {
            // Vertical chord: P plus its mirror image.
            return CurvePoint::Infinity;
        }
        let slope = if x1 == x2 {
            // Tangent. The vertical case above already caught y = 0.
            let numer = add_mod(mul_mod(3, mul_mod(x1, x1, self.p), self.p), self.a, self.p);
            let denom = mul_mod(2, y1, self.p);
            mul_mod(numer, self.inverse(denom), self.p)
        } else {
            let numer = sub_mod(y2, y1, self.p);
            let denom = sub_mod(x2, x1, self.p);
            mul_mod(numer, self.inverse(denom), self.p)
        };
        let x3 = sub_mod(
            sub_mod(mul_mod(slope, slope, self.p), x1, self.p),
            x2,
            self.p,
        );
        let y3 = sub_mod(mul_mod(slope, sub_mod(x1, x3, self.p), self.p), y1, self.p);
        CurvePoint::Affine { x: x3, y: y3 }
    }

    /// Doubles a point.
    pub fn double(&self, point: CurvePoint) -> CurvePoint {
        self.add(point, point)
    }

    /// `k * point` by double-and-add. `0 * point` is infinity.
    pub fn scalar_mul(&self, mut k: u64, point: CurvePoint) -> CurvePoint {
        let mut result = CurvePoint::Infinity;
        let mut addend = point;
        while k > 0 {
            if k & 1 == 1 {
                result = self.add(result, addend);
            }
            addend = self.add(addend, addend);
            k >>= 1;
        }
        result
    }

    /// The order of a point: the smallest `n > 0` with `n * point`
    /// equal to infinity.
    ///
    /// # Panics
    ///
    /// Panics if the point is not on the curve, since the walk is only
    /// guaranteed to terminate for group members.
    pub fn order_of(&self, point: CurvePoint) -> u64 {
        assert!(self.contains(point), "point is not on the curve");
        if point == CurvePoint::Infinity {
            return 1;
        }
        let mut n = 1;
        let mut acc = point;
        while acc != CurvePoint::Infinity {
            acc = self.add(acc, point);
            n += 1;
        }
        n
    }

    /// Every point of the group, infinity first, then affine points in
    /// ascending `(x, y)` order. Brute force, for blackboard-size `p`.
    pub fn points(&self) -> Vec<CurvePoint> {
        let mut roots_of: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
        for y in 0..self.p {
            roots_of.entry(mul_mod(y, y, self.p)).or_default().push(y);
        }
        let mut points = vec![CurvePoint::Infinity];
        for x in 0..self.p {
            let x_cubed = mul_mod(x, mul_mod(x, x, self.p), self.p);
            let rhs = add_mod(add_mod(x_cubed, mul_mod(self.a, x, self.p), self.p), self.b, self.p);
            if let Some(ys) = roots_of.get(&rhs) {
                for &y in ys {
                    points.push(CurvePoint::Affine { x, y });
                }
            }
        }
        points
    }

    fn inverse(&self, v: u64) -> u64 {
        mod_inv(v, self.p).expect("nonzero element of a prime field")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y^2 = x^3 + 2x + 2 over F_17: a 19-element group generated by
    // (5, 1). Standard blackboard curve.
    fn curve() -> ToyCurve {
        ToyCurve::new(2, 2, 17)
    }

    fn g() -> CurvePoint {
        CurvePoint::Affine { x: 5, y: 1 }
    }

    #[test]
    fn test_contains() {
        let c = curve();
        assert!(c.contains(CurvePoint::Infinity));
        assert!(c.contains(g()));
        assert!(!c.contains(CurvePoint::Affine { x: 0, y: 0 }));
        assert!(!c.contains(CurvePoint::Affine { x: 99, y: 1 }));
    }

    #[test]
    fn test_group_law_basics() {
        let c = curve();
        assert_eq!(c.add(CurvePoint::Infinity, g()), g());
        assert_eq!(c.add(g(), CurvePoint::Infinity), g());
        assert_eq!(c.add(g(), c.negate(g())), CurvePoint::Infinity);
        // Textbook doubling: 2 * (5,1) = (6,3).
        assert_eq!(c.double(g()), CurvePoint::Affine { x: 6, y: 3 });
    }

    #[test]
    fn addition_is_associative_on_samples() {
        let c = curve();
        let p2 = c.double(g());
        let p3 = c.add(p2, g());
        assert_eq!(c.add(c.add(g(), p2), p3), c.add(g(), c.add(p2, p3)));
    }

    #[test]
    fn test_scalar_mul_and_order() {
        let c = curve();
        assert_eq!(c.scalar_mul(0, g()), CurvePoint::Infinity);
        assert_eq!(c.scalar_mul(1, g()), g());
        assert_eq!(c.scalar_mul(2, g()), c.double(g()));
        assert_eq!(c.order_of(g()), 19);
        assert_eq!(c.scalar_mul(19, g()), CurvePoint::Infinity);
        assert_eq!(c.scalar_mul(20, g()), g());
        // Every multiple lands on the curve.
        for k in 0..19 {
            assert!(c.contains(c.scalar_mul(k, g())));
        }
    }

    #[test]
    fn point_census_matches_the_known_order() {
        let c = curve();
        let points = c.points();
        assert_eq!(points.len(), 19);
        assert!(points.iter().all(|&p| c.contains(p)));
        assert_eq!(points[0], CurvePoint::Infinity);
    }

    #[test]
    fn two_torsion_doubles_to_infinity() {
        // y^2 = x^3 + 1 over F_7 contains (6, 0), its own mirror.
        let c = ToyCurve::new(0, 1, 7);
        let t = CurvePoint::Affine { x: 6, y: 0 };
        assert!(c.contains(t));
        assert_eq!(c.double(t), CurvePoint::Infinity);
    }

    #[test]
    #[should_panic(expected = "singular")]
    fn singular_curve_is_rejected() {
        let _ = ToyCurve::new(0, 0, 17);
    }

    #[test]
    #[should_panic(expected = "not on the curve")]
    fn order_of_rejects_foreign_points() {
        let _ = curve().order_of(CurvePoint::Affine { x: 1, y: 1 });
    }
}
