// STARK curve: y^2 = x^3 + alpha*x + beta over GF(2^251 + 17*2^192 + 1)
// alpha = 1
// beta = 0x6f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89
// Curve order n = 0x800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f
// Cofactor: 1

use crate::error::{CurveError, Error};
use crate::group::{Group, ScalarBits};
use crate::projective::ProjectivePoint;
use crate::Felt;
use serde::{Deserialize, Serialize};

/// The `alpha` coefficient: 1.
pub const ALPHA: Felt = Felt::ONE;

/// The `beta` coefficient.
pub const BETA: Felt = Felt::from_raw([
    0xf4cdfcb99cee9e89,
    0x609ad26c15c915c1,
    0x150e596d72f7a8c5,
    0x06f21413efbe40de,
]);

/// `3 * beta`, used by the complete projective addition formula.
pub(crate) const BETA_TIMES_3: Felt = Felt::from_raw([
    0xde69f62cd6cbdb99,
    0x21d07744415b4145,
    0x3f2b0c4858e6fa50,
    0x04d63c3bcf3ac278,
]);

/// Size of the uncompressed encoding: `0x04 || x || y`.
pub const UNCOMPRESSED_SIZE: usize = 65;

/// Size of the compressed encoding: `0x02 | 0x03 || x`.
pub const COMPRESSED_SIZE: usize = 33;

const TAG_UNCOMPRESSED: u8 = 0x04;
const TAG_EVEN: u8 = 0x02;
const TAG_ODD: u8 = 0x03;

/// Which of the two square roots to take when recovering `y` from `x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YParity {
    #[default]
    Even,
    Odd,
}

impl YParity {
    fn of(y: &Felt) -> Self {
        if y.is_odd() {
            YParity::Odd
        } else {
            YParity::Even
        }
    }
}

/// Affine point on the STARK curve.
///
/// There is no affine point at infinity: operations whose result would be the
/// identity return [`CurveError::Degenerate`].
///
/// Deserialization checks the curve equation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Coordinates")]
pub struct AffinePoint {
    pub x: Felt,
    pub y: Felt,
}

#[derive(Deserialize)]
struct Coordinates {
    x: Felt,
    y: Felt,
}

impl TryFrom<Coordinates> for AffinePoint {
    type Error = CurveError;

    fn try_from(coordinates: Coordinates) -> Result<Self, Self::Error> {
        AffinePoint::new(coordinates.x, coordinates.y)
    }
}

impl AffinePoint {
    /// Create a point without checking the curve equation.
    pub const fn new_unchecked(x: Felt, y: Felt) -> Self {
        AffinePoint { x, y }
    }

    /// Create a point, rejecting coordinates that are not on the curve.
    pub fn new(x: Felt, y: Felt) -> Result<Self, CurveError> {
        let point = AffinePoint { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + alpha*x + beta.
    pub fn is_on_curve(&self) -> bool {
        self.y.square() == Self::curve_rhs(&self.x)
    }

    #[inline]
    fn curve_rhs(x: &Felt) -> Felt {
        x.square() * *x + ALPHA * *x + BETA
    }

    /// Recover a point from its x-coordinate, choosing the root by parity.
    pub fn from_x(x: &Felt, parity: YParity) -> Result<Self, CurveError> {
        let y = Self::curve_rhs(x).sqrt().ok_or(CurveError::NotOnCurve)?;
        let y = if YParity::of(&y) == parity { y } else { -y };
        Ok(AffinePoint { x: *x, y })
    }

    pub fn parity(&self) -> YParity {
        YParity::of(&self.y)
    }

    /// Point addition. Equal points dispatch to doubling; a point plus its
    /// negation has no affine result.
    pub fn try_add(&self, other: &Self) -> Result<Self, CurveError> {
        if self.x == other.x {
            if self.y == other.y {
                return self.try_double();
            }
            return Err(CurveError::Degenerate);
        }

        // λ = (y2 - y1) / (x2 - x1)
        let denominator = (other.x - self.x).inverse().ok_or(CurveError::Degenerate)?;
        let lambda = (other.y - self.y) * denominator;

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Ok(AffinePoint::new_unchecked(x_r, y_r))
    }

    /// Point doubling: 2*P.
    pub fn try_double(&self) -> Result<Self, CurveError> {
        // λ = (3x^2 + alpha) / (2y)
        let denominator = self.y.double().inverse().ok_or(CurveError::Degenerate)?;
        let x2 = self.x.square();
        let lambda = (x2 + x2 + x2 + ALPHA) * denominator;

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Ok(AffinePoint::new_unchecked(x_r, y_r))
    }

    pub fn negate(&self) -> Self {
        AffinePoint::new_unchecked(self.x, -self.y)
    }

    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::from_affine(self)
    }

    /// Scalar multiplication for public scalars (variable time).
    pub fn mul_vartime<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Result<Self, CurveError> {
        self.to_projective().mul_vartime(scalar).to_affine()
    }

    /// Scalar multiplication for secret scalars (fixed-length ladder).
    pub fn mul_ct<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Result<Self, CurveError> {
        self.to_projective().mul_ct(scalar).to_affine()
    }

    /// Uncompressed encoding: `0x04 || x || y`, coordinates big-endian.
    pub fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_SIZE] {
        let mut out = [0u8; UNCOMPRESSED_SIZE];
        out[0] = TAG_UNCOMPRESSED;
        out[1..33].copy_from_slice(&self.x.to_be_bytes());
        out[33..].copy_from_slice(&self.y.to_be_bytes());
        out
    }

    /// Compressed encoding: a parity tag followed by the big-endian x-coordinate.
    pub fn to_compressed_bytes(&self) -> [u8; COMPRESSED_SIZE] {
        let mut out = [0u8; COMPRESSED_SIZE];
        out[0] = match self.parity() {
            YParity::Even => TAG_EVEN,
            YParity::Odd => TAG_ODD,
        };
        out[1..].copy_from_slice(&self.x.to_be_bytes());
        out
    }

    /// Decode either encoding. The result is always checked against the curve
    /// equation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match (bytes.first(), bytes.len()) {
            (Some(&TAG_UNCOMPRESSED), UNCOMPRESSED_SIZE) => {
                let x = coordinate(&bytes[1..33])?;
                let y = coordinate(&bytes[33..])?;
                Ok(AffinePoint::new(x, y)?)
            }
            (Some(&TAG_EVEN), COMPRESSED_SIZE) => {
                Ok(AffinePoint::from_x(&coordinate(&bytes[1..])?, YParity::Even)?)
            }
            (Some(&TAG_ODD), COMPRESSED_SIZE) => {
                Ok(AffinePoint::from_x(&coordinate(&bytes[1..])?, YParity::Odd)?)
            }
            (Some(tag), len) => Err(Error::InvalidInput(format!(
                "unsupported point encoding: tag {tag:#04x}, {len} bytes"
            ))),
            (None, _) => Err(Error::InvalidInput("empty point encoding".into())),
        }
    }
}

fn coordinate(bytes: &[u8]) -> Result<Felt, Error> {
    let mut word = [0u8; 32];
    word.copy_from_slice(bytes);
    Felt::from_be_bytes(&word)
        .ok_or_else(|| Error::InvalidInput("coordinate is not below the field modulus".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::hex_to_bytes;
    use crate::params::{GENERATOR, PEDERSEN_POINTS, SHIFT_POINT};
    use crate::Scalar;

    #[test]
    fn test_constants_on_curve() {
        assert!(GENERATOR.is_on_curve());
        assert!(SHIFT_POINT.is_on_curve());
        for point in PEDERSEN_POINTS.iter() {
            assert!(point.is_on_curve());
        }
    }

    #[test]
    fn test_new_rejects_off_curve() {
        let moved = AffinePoint::new(GENERATOR.x, GENERATOR.y + Felt::ONE);
        assert_eq!(moved, Err(CurveError::NotOnCurve));
        assert_eq!(AffinePoint::new(GENERATOR.x, GENERATOR.y), Ok(GENERATOR));
    }

    #[test]
    fn test_point_doubling() {
        let g2 = GENERATOR.try_double().unwrap();
        assert!(g2.is_on_curve());
        assert_eq!(GENERATOR.try_add(&GENERATOR).unwrap(), g2);
    }

    #[test]
    fn test_point_addition() {
        let g2 = GENERATOR.try_double().unwrap();
        let g3 = GENERATOR.try_add(&g2).unwrap();
        assert!(g3.is_on_curve());
        assert_eq!(g2.try_add(&GENERATOR).unwrap(), g3);
        assert_eq!(GENERATOR.mul_vartime(&3u64).unwrap(), g3);
    }

    #[test]
    fn test_add_inverse_is_degenerate() {
        let neg = GENERATOR.negate();
        assert!(neg.is_on_curve());
        assert_eq!(GENERATOR.try_add(&neg), Err(CurveError::Degenerate));
    }

    #[test]
    fn test_double_with_zero_y_is_degenerate() {
        let point = AffinePoint::new_unchecked(Felt::from_u64(5), Felt::ZERO);
        assert_eq!(point.try_double(), Err(CurveError::Degenerate));
    }

    #[test]
    fn test_scalar_mul_variants_agree() {
        let k = Scalar::from_u64(0xfeed_f00d);
        let ct = GENERATOR.mul_ct(&k).unwrap();
        assert_eq!(GENERATOR.mul_vartime(&k).unwrap(), ct);
        assert!(ct.is_on_curve());
        assert_eq!(GENERATOR.mul_ct(&Scalar::ZERO), Err(CurveError::Degenerate));
    }

    #[test]
    fn test_from_x_parity() {
        let even = AffinePoint::from_x(&GENERATOR.x, YParity::Even).unwrap();
        let odd = AffinePoint::from_x(&GENERATOR.x, YParity::Odd).unwrap();
        assert!(!even.y.is_odd());
        assert!(odd.y.is_odd());
        assert_eq!(even.negate(), odd);
        assert!(even == GENERATOR || odd == GENERATOR);
    }

    #[test]
    fn test_from_x_without_root() {
        // x = 0 gives y^2 = beta, which is not a square.
        assert!(!BETA.is_square());
        assert_eq!(
            AffinePoint::from_x(&Felt::ZERO, YParity::Even),
            Err(CurveError::NotOnCurve)
        );
    }

    #[test]
    fn test_uncompressed_vector() {
        let bytes = hex_to_bytes(
            "04033f45f07e1bd1a51b45fc24ec8c8c9908db9e42191be9e169bfcac0c0d997450319d0f53f6ca077c4fa5207819144a2a4165daef6ee47a7c1d06c0dcaa3e456",
        )
        .unwrap();
        let point = AffinePoint::from_bytes(&bytes).unwrap();
        assert!(point.is_on_curve());
        assert_eq!(point.to_uncompressed_bytes().to_vec(), bytes);
    }

    #[test]
    fn test_deserialize_checks_curve() {
        let off_curve = r#"{"x":"0x1","y":"0x1"}"#;
        assert!(serde_json::from_str::<AffinePoint>(off_curve).is_err());

        let json = serde_json::to_string(&GENERATOR).unwrap();
        assert_eq!(serde_json::from_str::<AffinePoint>(&json).unwrap(), GENERATOR);

        let moved = AffinePoint::new_unchecked(GENERATOR.x, GENERATOR.y + Felt::ONE);
        let json = serde_json::to_string(&moved).unwrap();
        assert!(serde_json::from_str::<AffinePoint>(&json).is_err());
    }

    #[test]
    fn test_encoding_roundtrip() {
        for k in [1u64, 2, 7, 0xdead_beef] {
            let point = GENERATOR.mul_vartime(&k).unwrap();
            let full = point.to_uncompressed_bytes();
            let short = point.to_compressed_bytes();
            assert_eq!(AffinePoint::from_bytes(&full).unwrap(), point);
            assert_eq!(AffinePoint::from_bytes(&short).unwrap(), point);
        }
    }

    #[test]
    fn test_from_bytes_rejects_malformed() {
        let mut bytes = GENERATOR.to_uncompressed_bytes();
        assert!(AffinePoint::from_bytes(&bytes[..64]).is_err());
        assert!(AffinePoint::from_bytes(&[]).is_err());

        bytes[64] ^= 1;
        assert!(matches!(
            AffinePoint::from_bytes(&bytes),
            Err(Error::Curve(CurveError::NotOnCurve))
        ));

        let mut wrong_tag = GENERATOR.to_compressed_bytes();
        wrong_tag[0] = 0x05;
        assert!(matches!(
            AffinePoint::from_bytes(&wrong_tag),
            Err(Error::InvalidInput(_))
        ));
    }
}
