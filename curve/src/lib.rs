//! Arithmetic on the STARK curve `y^2 = x^3 + x + beta` over
//! `GF(2^251 + 17 * 2^192 + 1)`.
//!
//! This crate provides the base and scalar fields, affine and projective
//! points, validated curve parameters with the Pedersen constant points, the
//! Pedersen hash and the text/byte encodings used at the boundaries.

mod affine;
mod basefield;
mod encoding;
mod error;
mod field;
mod group;
mod msm;
mod params;
mod pedersen;
mod projective;
mod random;
mod scalarfield;

pub use affine::{AffinePoint, YParity, ALPHA, BETA, COMPRESSED_SIZE, UNCOMPRESSED_SIZE};
pub use basefield::{Felt, StarkBaseParams};
pub use encoding::{
    decimal_to_biguint, felt_from_biguint, felt_from_decimal, felt_from_hex, hex_to_biguint,
    hex_to_bytes, Encoded,
};
pub use error::{CurveError, Error};
pub use field::{FieldParams, Fp};
pub use group::{Group, ScalarBits, LADDER_BITS};
pub use msm::double_scalar_mul;
pub use num_bigint::BigUint;
pub use params::{CurveParams, PedersenConfig, PointConfig, GENERATOR, PEDERSEN_POINTS, SHIFT_POINT};
pub use pedersen::{hash_chain, hash_elements, pedersen_hash, LOW_WINDOW_BITS};
pub use projective::ProjectivePoint;
pub use random::RandomField;
pub use scalarfield::{Scalar, StarkScalarParams, CURVE_ORDER};
