//! Scalar field of the STARK curve.
//! n = 0x800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f
//!
//! Private keys, signing nonces and signature components live here.

use crate::field::{FieldParams, Fp};
use crate::Felt;

/// Parameters of the STARK scalar field (the curve order).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StarkScalarParams;

impl FieldParams for StarkScalarParams {
    const NAME: &'static str = "Scalar";
    const MODULUS: [u64; 4] = [
        0x1e66a241adc64d2f,
        0xb781126dcae7b232,
        0xffffffffffffffff,
        0x0800000000000010,
    ];
    const R: [u64; 4] = [
        0x51925a0bf4fca74f,
        0xc75ec4b46df16bee,
        0x0000000000000008,
        0x07fffffffffffdf1,
    ];
    const R2: [u64; 4] = [
        0x6021b3f1ea1c688d,
        0x509cf64d14ce60b9,
        0xbaf0ab4cf78bbabb,
        0x07d9e57c2333766e,
    ];
    const MU: u64 = 0xbb6b3c4ce8bde631;
    const BITS: u32 = 252;
}

/// Element of the STARK scalar field.
pub type Scalar = Fp<StarkScalarParams>;

/// Curve order as little-endian limbs.
pub const CURVE_ORDER: [u64; 4] = StarkScalarParams::MODULUS;

impl Scalar {
    /// Reduces a base-field element modulo the curve order. Since `n < p < 2n`
    /// this subtracts `n` at most once.
    #[inline]
    pub fn from_felt(value: &Felt) -> Self {
        Scalar::from_raw(value.to_canonical_limbs())
    }
}
