//! Curve parameters: the generator and the Pedersen constant points.
//!
//! The field moduli and curve coefficients are fixed by the field types. The
//! points are values so that a deployment can load them from configuration;
//! [`CurveParams::default`] carries the StarkNet constants.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::affine::AffinePoint;
use crate::encoding::Encoded;
use crate::error::Error;
use crate::group::Group;
use crate::scalarfield::CURVE_ORDER;
use crate::{Felt, Scalar};

/// Generator of the prime-order group.
pub const GENERATOR: AffinePoint = AffinePoint::new_unchecked(
    Felt::from_raw([
        0x3d723d8bc943cfca,
        0xdeacfd9b0d1819e0,
        0x7beced415a40f0c7,
        0x01ef15c18599971b,
    ]),
    Felt::from_raw([
        0x2873000c36e8dc1f,
        0xde53ecd11abe43a3,
        0xb7be4801df46ec62,
        0x005668060aa49730,
    ]),
);

/// Starting accumulator of the Pedersen hash.
pub const SHIFT_POINT: AffinePoint = AffinePoint::new_unchecked(
    Felt::from_raw([
        0x551fde4050ca6804,
        0x716b0b1022947733,
        0x00ee1b87eb599f16,
        0x049ee3eba8c16007,
    ]),
    Felt::from_raw([
        0xd0405d266e10268a,
        0x4e621062c0e056c1,
        0xf346d49d06ea0ed3,
        0x03ca0cfe4b3bc6dd,
    ]),
);

/// Pedersen window points: low and high window of the first input, then of
/// the second.
pub const PEDERSEN_POINTS: [AffinePoint; 4] = [
    AffinePoint::new_unchecked(
        Felt::from_raw([
            0x1080d17957ebe47b,
            0x8fa8120b6d56eb0c,
            0x969c748655fca9e5,
            0x0234287dcbaffe7f,
        ]),
        Felt::from_raw([
            0x6ed0268ee89e5615,
            0x940135dd7a6c94cc,
            0x1e889527d41f4e39,
            0x03b056f100f96fb2,
        ]),
    ),
    AffinePoint::new_unchecked(
        Felt::from_raw([
            0xb7a6932dba8aa378,
            0x99099ec1de5e3018,
            0x3f9dab2656558f33,
            0x04fa56f376c83db3,
        ]),
        Felt::from_raw([
            0x5168f4e80ff5b54d,
            0x562761f92a7a23b4,
            0x8113e0c0e47e4401,
            0x03fa0984c931c9e3,
        ]),
    ),
    AffinePoint::new_unchecked(
        Felt::from_raw([
            0x3aa372f0bd2d6997,
            0x40c690c74709e90f,
            0x764910f75b45f74b,
            0x04ba4cc166be8dec,
        ]),
        Felt::from_raw([
            0x48151f27b24b219c,
            0xcac5c59a5ce5ae7c,
            0x4b971e46c4ede85f,
            0x0040301cf5c1751f,
        ]),
    ),
    AffinePoint::new_unchecked(
        Felt::from_raw([
            0xd36ff12c49a58202,
            0x2ca65048d53fb325,
            0x6e44cca8f61a63bb,
            0x054302dcb0e6cc1c,
        ]),
        Felt::from_raw([
            0x879dcc77e99c2426,
            0xce98ad783c25561a,
            0xb348046268d8ae25,
            0x01b77b3e37d13504,
        ]),
    ),
];

/// A point as it appears in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointConfig {
    pub x: Encoded,
    pub y: Encoded,
}

impl PointConfig {
    fn to_point(&self, name: &str) -> Result<AffinePoint, Error> {
        let coordinate = |value: &Encoded, axis: &str| {
            value
                .to_felt()
                .map_err(|err| Error::Config(format!("{name}.{axis}: {err}")))
        };
        let x = coordinate(&self.x, "x")?;
        let y = coordinate(&self.y, "y")?;
        AffinePoint::new(x, y).map_err(|err| Error::Config(format!("{name}: {err}")))
    }
}

impl From<&AffinePoint> for PointConfig {
    fn from(point: &AffinePoint) -> Self {
        PointConfig {
            x: Encoded::from(&point.x),
            y: Encoded::from(&point.y),
        }
    }
}

/// Deserialized constant-point configuration. The generator may be omitted,
/// in which case the standard one is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedersenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<PointConfig>,
    pub shift_point: PointConfig,
    pub pedersen_points: [PointConfig; 4],
}

/// Validated, immutable curve parameters. Build once and share by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    generator: AffinePoint,
    shift_point: AffinePoint,
    pedersen_points: [AffinePoint; 4],
}

impl CurveParams {
    /// Checks every point against the curve equation and that the generator
    /// has the expected order.
    pub fn new(
        generator: AffinePoint,
        shift_point: AffinePoint,
        pedersen_points: [AffinePoint; 4],
    ) -> Result<Self, Error> {
        if !generator.is_on_curve() {
            return Err(Error::Config("generator is not on the curve".into()));
        }
        if !shift_point.is_on_curve() {
            return Err(Error::Config("shift point is not on the curve".into()));
        }
        for (i, point) in pedersen_points.iter().enumerate() {
            if !point.is_on_curve() {
                return Err(Error::Config(format!(
                    "pedersen point {i} is not on the curve"
                )));
            }
        }
        if !generator.to_projective().mul_vartime(&CURVE_ORDER).is_identity() {
            return Err(Error::Config(
                "generator order does not match the curve order".into(),
            ));
        }

        debug!(generator = %generator.x, shift = %shift_point.x, "curve parameters validated");
        Ok(CurveParams {
            generator,
            shift_point,
            pedersen_points,
        })
    }

    pub fn from_config(config: &PedersenConfig) -> Result<Self, Error> {
        let generator = match &config.generator {
            Some(point) => point.to_point("generator")?,
            None => GENERATOR,
        };
        let shift_point = config.shift_point.to_point("shift_point")?;
        let mut pedersen_points = [GENERATOR; 4];
        for (i, (slot, point)) in pedersen_points
            .iter_mut()
            .zip(config.pedersen_points.iter())
            .enumerate()
        {
            *slot = point.to_point(&format!("pedersen_points[{i}]"))?;
        }
        Self::new(generator, shift_point, pedersen_points)
    }

    pub fn to_config(&self) -> PedersenConfig {
        PedersenConfig {
            generator: Some(PointConfig::from(&self.generator)),
            shift_point: PointConfig::from(&self.shift_point),
            pedersen_points: [
                PointConfig::from(&self.pedersen_points[0]),
                PointConfig::from(&self.pedersen_points[1]),
                PointConfig::from(&self.pedersen_points[2]),
                PointConfig::from(&self.pedersen_points[3]),
            ],
        }
    }

    #[inline]
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    #[inline]
    pub fn shift_point(&self) -> &AffinePoint {
        &self.shift_point
    }

    #[inline]
    pub fn pedersen_points(&self) -> &[AffinePoint; 4] {
        &self.pedersen_points
    }

    /// Base field modulus `P`.
    pub fn modulus(&self) -> BigUint {
        Felt::modulus()
    }

    /// Curve order `N`.
    pub fn order(&self) -> BigUint {
        Scalar::modulus()
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        CurveParams {
            generator: GENERATOR,
            shift_point: SHIFT_POINT,
            pedersen_points: PEDERSEN_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::hex_to_biguint;

    #[test]
    fn test_default_validates() {
        let params = CurveParams::new(GENERATOR, SHIFT_POINT, PEDERSEN_POINTS).unwrap();
        assert_eq!(params, CurveParams::default());
    }

    #[test]
    fn test_generator_value() {
        let expected =
            hex_to_biguint("0x1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca")
                .unwrap();
        assert_eq!(GENERATOR.x.to_biguint(), expected);
    }

    #[test]
    fn test_moduli() {
        let params = CurveParams::default();
        let p = (BigUint::from(1u32) << 251) + (BigUint::from(17u32) << 192) + 1u32;
        assert_eq!(params.modulus(), p);
        assert!(params.order() < params.modulus());
        assert!(params.modulus() < params.order() * 2u32);
    }

    #[test]
    fn test_config_roundtrip() {
        let params = CurveParams::default();
        let json = serde_json::to_string(&params.to_config()).unwrap();
        let config: PedersenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(CurveParams::from_config(&config).unwrap(), params);
    }

    #[test]
    fn test_config_without_generator() {
        let mut config = CurveParams::default().to_config();
        config.generator = None;
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("generator"));
        let config: PedersenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            CurveParams::from_config(&config).unwrap(),
            CurveParams::default()
        );
    }

    #[test]
    fn test_tampered_point_rejected() {
        let mut config = CurveParams::default().to_config();
        let moved = SHIFT_POINT.y + Felt::ONE;
        config.shift_point.y = Encoded::from(&moved);
        assert!(matches!(
            CurveParams::from_config(&config),
            Err(Error::Config(_))
        ));

        let mut config = CurveParams::default().to_config();
        config.pedersen_points[2].x = Encoded::decimal("not a number");
        assert!(matches!(
            CurveParams::from_config(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_off_curve_generator_rejected() {
        let bogus = AffinePoint::new_unchecked(GENERATOR.x, GENERATOR.x);
        assert!(matches!(
            CurveParams::new(bogus, SHIFT_POINT, PEDERSEN_POINTS),
            Err(Error::Config(_))
        ));
    }
}
