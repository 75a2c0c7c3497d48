use crate::affine::{AffinePoint, ALPHA, BETA, BETA_TIMES_3};
use crate::error::CurveError;
use crate::{Felt, Group};
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Projective point on the STARK curve.
/// Represents a point in projective coordinates (X:Y:Z) where (x,y) = (X/Z, Y/Z).
/// The point at infinity is represented as (0:1:0).
#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint {
    pub x: Felt,
    pub y: Felt,
    pub z: Felt,
}

impl ProjectivePoint {
    /// The point at infinity (identity element): (0:1:0)
    pub const INFINITY: Self = ProjectivePoint {
        x: Felt::ZERO,
        y: Felt::ONE,
        z: Felt::ZERO,
    };

    pub fn new(x: Felt, y: Felt, z: Felt) -> Self {
        ProjectivePoint { x, y, z }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates. The point at infinity has no affine
    /// form and yields [`CurveError::Degenerate`].
    pub fn to_affine(&self) -> Result<AffinePoint, CurveError> {
        let z_inv = self.z.inverse().ok_or(CurveError::Degenerate)?;
        Ok(AffinePoint::new_unchecked(self.x * z_inv, self.y * z_inv))
    }

    pub fn from_affine(point: &AffinePoint) -> Self {
        ProjectivePoint::new(point.x, point.y, Felt::ONE)
    }

    /// Check if a point is on the curve: Y^2*Z = X^3 + a*X*Z^2 + b*Z^3.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }

        let z2 = self.z.square();
        let lhs = self.y.square() * self.z;
        let rhs = self.x.square() * self.x
            + ALPHA * self.x * z2
            + BETA * z2 * self.z;

        lhs == rhs
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for ProjectivePoint {}

impl Group for ProjectivePoint {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    fn negate(&self) -> Self {
        ProjectivePoint::new(self.x, -self.y, self.z)
    }

    #[inline]
    fn conditional_swap(a: &mut Self, b: &mut Self, swap: bool) {
        Felt::conditional_swap(&mut a.x, &mut b.x, swap);
        Felt::conditional_swap(&mut a.y, &mut b.y, swap);
        Felt::conditional_swap(&mut a.z, &mut b.z, swap);
    }
}

// Complete addition for short Weierstrass curves with arbitrary a
// (Renes, Costello, Batina 2016, algorithm 1). Valid for doubling and for
// the identity on either side, with no data-dependent branches.
impl Add for ProjectivePoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);

        let mut t0 = x1 * x2;
        let mut t1 = y1 * y2;
        let mut t2 = z1 * z2;
        let mut t3 = (x1 + y1) * (x2 + y2);
        let mut t4 = t0 + t1;
        t3 -= t4;
        t4 = (x1 + z1) * (x2 + z2);
        let mut t5 = t0 + t2;
        t4 -= t5;
        t5 = (y1 + z1) * (y2 + z2);
        let mut x3 = t1 + t2;
        t5 -= x3;

        let mut z3 = ALPHA * t4;
        x3 = BETA_TIMES_3 * t2;
        z3 += x3;
        x3 = t1 - z3;
        z3 += t1;
        let mut y3 = x3 * z3;

        t1 = t0 + t0 + t0;
        t2 = ALPHA * t2;
        t4 = BETA_TIMES_3 * t4;
        t1 += t2;
        t2 = ALPHA * (t0 - t2);
        t4 += t2;

        t0 = t1 * t4;
        y3 += t0;
        t0 = t5 * t4;
        x3 = t3 * x3 - t0;
        t0 = t3 * t1;
        z3 = t5 * z3 + t0;

        ProjectivePoint::new(x3, y3, z3)
    }
}

impl AddAssign for ProjectivePoint {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for ProjectivePoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for ProjectivePoint {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for ProjectivePoint {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GENERATOR;
    use crate::{double_scalar_mul, Scalar};

    fn g() -> ProjectivePoint {
        ProjectivePoint::from_affine(&GENERATOR)
    }

    #[test]
    fn test_identity() {
        let inf = ProjectivePoint::INFINITY;
        assert!(inf.is_identity());
        assert!(inf.is_on_curve());
        assert_eq!(g() + inf, g());
        assert_eq!(inf + g(), g());
        assert!((inf + inf).is_identity());
        assert_eq!(inf.to_affine(), Err(CurveError::Degenerate));
    }

    #[test]
    fn test_add_matches_affine() {
        let g2 = GENERATOR.try_double().unwrap();
        let g3 = g2.try_add(&GENERATOR).unwrap();
        assert_eq!(g().double().to_affine().unwrap(), g2);
        assert_eq!((g() + g() + g()).to_affine().unwrap(), g3);
    }

    #[test]
    fn test_scaled_coordinates() {
        let k = Felt::from_u64(7);
        let scaled = ProjectivePoint::new(GENERATOR.x * k, GENERATOR.y * k, k);
        assert_eq!(scaled, g());
        assert!(scaled.is_on_curve());
        assert_eq!(scaled.double(), g().double());
    }

    #[test]
    fn test_inverse_sums_to_identity() {
        assert!((g() - g()).is_identity());
        assert!((g() + -g()).is_identity());
    }

    #[test]
    fn test_ladder_matches_double_and_add() {
        let scalar = Scalar::from_u64(123_456_789_123_456_789);
        let ladder = g().mul_ct(&scalar);
        let vartime = g().mul_vartime(&scalar);
        assert_eq!(ladder, vartime);
        assert!(ladder.is_on_curve());
    }

    #[test]
    fn test_mul_by_order_is_identity() {
        assert!(g().mul_vartime(&crate::scalarfield::CURVE_ORDER).is_identity());
        assert!(g().mul_ct(&Scalar::ZERO).is_identity());
        assert_eq!(g().mul_ct(&Scalar::ONE), g());
    }

    #[test]
    fn test_associativity() {
        let a = Scalar::from_u64(3);
        let b = Scalar::from_u64(5);
        assert_eq!(g().mul_vartime(&(a + b)), g().mul_vartime(&a) + g().mul_vartime(&b));
        assert_eq!(g().mul_u64(8), g().double().double().double());
    }

    #[test]
    fn test_double_scalar_mul() {
        let h = g().mul_u64(11);
        let a = Scalar::from_u64(0x1234_5678_9abc);
        let b = -Scalar::from_u64(99);
        let expected = g().mul_vartime(&a) + h.mul_vartime(&b);
        assert_eq!(double_scalar_mul(&a, &g(), &b, &h), expected);
    }
}
