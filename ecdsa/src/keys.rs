//! Signing and verifying keys.

use num_bigint::BigUint;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stark_curve::{AffinePoint, CurveError, CurveParams, Felt, RandomField, Scalar, YParity};
use tracing::debug;

use crate::constants::{MAX_NONCE_ATTEMPTS, PK_COMPRESSED_SIZE, PK_SIZE, SK_SIZE};
use crate::errors::EcdsaError;
use crate::signatures::{Signature, verify_point};

/// A secret signing key: a scalar in `[1, N-1]`.
///
/// # Example
///
/// ```
/// use stark_ecdsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Scalar", into = "Scalar")]
pub struct SigningKey {
    scalar: Scalar,
}

/// A public verifying key: the point `sk * G`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AffinePoint", into = "AffinePoint")]
pub struct VerifyingKey {
    point: AffinePoint,
}

impl SigningKey {
    /// Generates a uniformly random signing key from the provided generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: Scalar::random_nonzero(rng),
        }
    }

    /// Generates a signing key from the thread-local CSPRNG.
    pub fn generate() -> Self {
        Self::random(&mut rand::rng())
    }

    pub fn from_scalar(scalar: Scalar) -> Result<Self, EcdsaError> {
        if scalar.is_zero() {
            return Err(EcdsaError::InvalidKey);
        }
        Ok(Self { scalar })
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self, EcdsaError> {
        let scalar = Scalar::from_biguint(value).ok_or(EcdsaError::InvalidKey)?;
        Self::from_scalar(scalar)
    }

    pub fn from_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, EcdsaError> {
        let scalar = Scalar::from_be_bytes(bytes).ok_or(EcdsaError::InvalidKey)?;
        Self::from_scalar(scalar)
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    pub fn as_scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// Derives the verifying key `sk * G` with the fixed-length ladder.
    pub fn verifying_key(&self, params: &CurveParams) -> Result<VerifyingKey, EcdsaError> {
        let point = params.generator().mul_ct(&self.scalar)?;
        Ok(VerifyingKey { point })
    }

    /// Signs a field element, usually a Pedersen hash.
    ///
    /// 1. Draw a nonce `k` from `rng`
    /// 2. Compute `R = k * G` and `r = R.x mod N`
    /// 3. Compute `s = k^{-1} * (hash + r * sk) mod N`
    /// 4. Start over with a fresh nonce if `k`, `r` or `s` is zero
    ///
    /// Fails with [`CurveError::NonceExhausted`] after
    /// [`MAX_NONCE_ATTEMPTS`](crate::MAX_NONCE_ATTEMPTS) draws.
    ///
    /// # Example
    ///
    /// ```
    /// use stark_curve::{CurveParams, Felt};
    /// use stark_ecdsa::SigningKey;
    ///
    /// let params = CurveParams::default();
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let signature = signing_key
    ///     .sign(&params, &mut rng, &Felt::from_u64(42))
    ///     .expect("signing failed");
    /// ```
    pub fn sign<R: Rng + ?Sized>(
        &self,
        params: &CurveParams,
        rng: &mut R,
        hash: &Felt,
    ) -> Result<Signature, EcdsaError> {
        let z = Scalar::from_felt(hash);

        for attempt in 1..=MAX_NONCE_ATTEMPTS {
            let Some(nonce) = Scalar::sample_once(rng).filter(|k| !k.is_zero()) else {
                debug!(attempt, "nonce out of range");
                continue;
            };

            let point = params.generator().mul_ct(&nonce)?;
            let r = Scalar::from_felt(&point.x);
            if r.is_zero() {
                debug!(attempt, "nonce gave r = 0");
                continue;
            }

            let Some(nonce_inv) = nonce.inverse() else {
                continue;
            };
            let s = nonce_inv * (z + r * self.scalar);
            if s.is_zero() {
                debug!(attempt, "nonce gave s = 0");
                continue;
            }

            return Signature::new(r, s);
        }

        Err(CurveError::NonceExhausted(MAX_NONCE_ATTEMPTS).into())
    }
}

/// Computes `key * G` for a private key given as an integer.
pub fn private_to_point(params: &CurveParams, key: &BigUint) -> Result<AffinePoint, EcdsaError> {
    Ok(*SigningKey::from_biguint(key)?.verifying_key(params)?.point())
}

impl VerifyingKey {
    pub fn from_point(point: AffinePoint) -> Result<Self, EcdsaError> {
        if !point.is_on_curve() {
            return Err(CurveError::NotOnCurve.into());
        }
        Ok(Self { point })
    }

    /// Recovers a key from its x-coordinate, taking the even root.
    pub fn from_x(x: &Felt) -> Result<Self, EcdsaError> {
        Self::from_x_with_parity(x, YParity::Even)
    }

    pub fn from_x_with_parity(x: &Felt, parity: YParity) -> Result<Self, EcdsaError> {
        Ok(Self {
            point: AffinePoint::from_x(x, parity)?,
        })
    }

    /// Accepts either the 65-byte uncompressed or the 33-byte compressed form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EcdsaError> {
        Ok(Self {
            point: AffinePoint::from_bytes(bytes)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.to_uncompressed_bytes()
    }

    pub fn to_compressed_bytes(&self) -> [u8; PK_COMPRESSED_SIZE] {
        self.point.to_compressed_bytes()
    }

    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Verifies a signature on `hash`. Never fails; an invalid signature is
    /// simply `false`.
    pub fn verify(&self, params: &CurveParams, hash: &Felt, sig: &Signature) -> bool {
        verify_point(params, hash, sig, &self.point)
    }
}

/// Recovers the public key for an x-coordinate (even root).
pub fn x_to_pub_key(x: &Felt) -> Result<AffinePoint, EcdsaError> {
    x_to_pub_key_with_parity(x, YParity::Even)
}

pub fn x_to_pub_key_with_parity(x: &Felt, parity: YParity) -> Result<AffinePoint, EcdsaError> {
    Ok(AffinePoint::from_x(x, parity)?)
}

impl TryFrom<Scalar> for SigningKey {
    type Error = EcdsaError;

    fn try_from(scalar: Scalar) -> Result<Self, Self::Error> {
        Self::from_scalar(scalar)
    }
}

impl From<SigningKey> for Scalar {
    fn from(key: SigningKey) -> Self {
        key.scalar
    }
}

impl TryFrom<AffinePoint> for VerifyingKey {
    type Error = EcdsaError;

    fn try_from(point: AffinePoint) -> Result<Self, Self::Error> {
        Self::from_point(point)
    }
}

impl From<VerifyingKey> for AffinePoint {
    fn from(key: VerifyingKey) -> Self {
        key.point
    }
}
