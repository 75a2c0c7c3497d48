//! Pedersen hash over the STARK curve.
//!
//! hash(a, b) = (shift + a_low * P0 + a_high * P1 + b_low * P2 + b_high * P3).x
//!
//! where `low` is bits 0..248 of the input and `high` bits 248..252.

use crate::error::Error;
use crate::group::Group;
use crate::params::CurveParams;
use crate::projective::ProjectivePoint;
use crate::Felt;

/// Bits of an input covered by the low window point.
pub const LOW_WINDOW_BITS: u32 = 248;

const LOW_TOP_LIMB_MASK: u64 = (1u64 << (LOW_WINDOW_BITS - 192)) - 1;

/// Splits an input into its 248-bit low window and 4-bit high window.
#[inline]
fn split(value: &Felt) -> ([u64; 4], u64) {
    let mut low = value.to_canonical_limbs();
    let high = low[3] >> (LOW_WINDOW_BITS - 192);
    low[3] &= LOW_TOP_LIMB_MASK;
    (low, high)
}

/// Hash of two field elements.
pub fn pedersen_hash(params: &CurveParams, a: &Felt, b: &Felt) -> Result<Felt, Error> {
    let points = params.pedersen_points();
    let mut acc = params.shift_point().to_projective();

    for (value, pair) in [a, b].into_iter().zip(points.chunks_exact(2)) {
        let (low, high) = split(value);
        acc += ProjectivePoint::from_affine(&pair[0]).mul_vartime(&low);
        acc += ProjectivePoint::from_affine(&pair[1]).mul_vartime(&high);
    }

    Ok(acc.to_affine()?.x)
}

/// Left fold of [`pedersen_hash`] starting from zero. An empty input hashes
/// like a single zero.
pub fn hash_elements(params: &CurveParams, values: &[Felt]) -> Result<Felt, Error> {
    if values.is_empty() {
        return pedersen_hash(params, &Felt::ZERO, &Felt::ZERO);
    }
    values
        .iter()
        .try_fold(Felt::ZERO, |acc, value| pedersen_hash(params, &acc, value))
}

/// Length-terminated chain: the fold over `values` followed by one more
/// round with the number of elements.
pub fn hash_chain(params: &CurveParams, values: &[Felt]) -> Result<Felt, Error> {
    let acc = values
        .iter()
        .try_fold(Felt::ZERO, |acc, value| pedersen_hash(params, &acc, value))?;
    pedersen_hash(params, &acc, &Felt::from_u64(values.len() as u64))
}
