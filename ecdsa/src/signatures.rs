//! Signature type and the integer-level verification entry points.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use stark_curve::{
    AffinePoint, CurveParams, Felt, ProjectivePoint, Scalar, YParity, double_scalar_mul,
};
use tracing::trace;

use crate::constants::SIG_SIZE;
use crate::errors::EcdsaError;

/// An ECDSA signature over the STARK curve.
///
/// The signature is a pair `(r, s)` where:
/// - `r` is the x-coordinate of the nonce point `k * G`, reduced mod `N`
/// - `s = k^{-1} * (hash + r * sk) mod N`
///
/// Both components are always non-zero: every constructor, deserialization
/// included, goes through [`Signature::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignatureParts")]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

#[derive(Deserialize)]
struct SignatureParts {
    r: Scalar,
    s: Scalar,
}

impl TryFrom<SignatureParts> for Signature {
    type Error = EcdsaError;

    fn try_from(parts: SignatureParts) -> Result<Self, Self::Error> {
        Signature::new(parts.r, parts.s)
    }
}

impl Signature {
    pub fn new(r: Scalar, s: Scalar) -> Result<Self, EcdsaError> {
        if r.is_zero() || s.is_zero() {
            return Err(EcdsaError::InvalidSignature);
        }
        Ok(Signature { r, s })
    }

    pub fn from_biguints(r: &BigUint, s: &BigUint) -> Result<Self, EcdsaError> {
        let r = Scalar::from_biguint(r).ok_or(EcdsaError::InvalidSignature)?;
        let s = Scalar::from_biguint(s).ok_or(EcdsaError::InvalidSignature)?;
        Self::new(r, s)
    }

    pub fn r(&self) -> Scalar {
        self.r
    }

    pub fn s(&self) -> Scalar {
        self.s
    }

    /// `r || s`, both big-endian.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Result<Self, EcdsaError> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        let r = Scalar::from_be_bytes(&r).ok_or(EcdsaError::InvalidSignature)?;
        let s = Scalar::from_be_bytes(&s).ok_or(EcdsaError::InvalidSignature)?;
        Self::new(r, s)
    }
}

/// Checks `(w * hash) * G + (w * r) * Q` against `r`, with `w = s^{-1}`.
pub(crate) fn verify_point(
    params: &CurveParams,
    hash: &Felt,
    sig: &Signature,
    public_key: &AffinePoint,
) -> bool {
    if sig.r.is_zero() || sig.s.is_zero() {
        trace!("signature component is zero");
        return false;
    }
    if !public_key.is_on_curve() {
        trace!("public key is not on the curve");
        return false;
    }
    let Some(w) = sig.s.inverse() else {
        return false;
    };

    let z = Scalar::from_felt(hash);
    let point = double_scalar_mul(
        &(w * z),
        &params.generator().to_projective(),
        &(w * sig.r),
        &ProjectivePoint::from_affine(public_key),
    );

    match point.to_affine() {
        Ok(point) => Scalar::from_felt(&point.x) == sig.r,
        Err(_) => {
            trace!("verification point is at infinity");
            false
        }
    }
}

fn parse_inputs(hash: &BigUint, r: &BigUint, s: &BigUint) -> Option<(Felt, Signature)> {
    let hash = Felt::from_biguint(hash)?;
    let sig = Signature::from_biguints(r, s).ok()?;
    Some((hash, sig))
}

/// Verifies a signature given as plain integers against the public key
/// `(pub_x, pub_y)`. Any out-of-range value or off-curve key yields `false`.
pub fn verify(
    params: &CurveParams,
    hash: &BigUint,
    r: &BigUint,
    s: &BigUint,
    pub_x: &BigUint,
    pub_y: &BigUint,
) -> bool {
    let Some((hash, sig)) = parse_inputs(hash, r, s) else {
        trace!("signature inputs out of range");
        return false;
    };
    let (Some(x), Some(y)) = (Felt::from_biguint(pub_x), Felt::from_biguint(pub_y)) else {
        return false;
    };
    verify_point(params, &hash, &sig, &AffinePoint::new_unchecked(x, y))
}

/// Verifies against a public key known only by its x-coordinate, accepting
/// the signature if it is valid for either root.
pub fn verify_x_only(
    params: &CurveParams,
    hash: &BigUint,
    r: &BigUint,
    s: &BigUint,
    pub_x: &BigUint,
) -> bool {
    let Some((hash, sig)) = parse_inputs(hash, r, s) else {
        return false;
    };
    let Some(x) = Felt::from_biguint(pub_x) else {
        return false;
    };
    let Ok(point) = AffinePoint::from_x(&x, YParity::Even) else {
        return false;
    };
    verify_point(params, &hash, &sig, &point) || verify_point(params, &hash, &sig, &point.negate())
}
