//! Error types for signing and key handling.

use stark_curve::CurveError;
use thiserror::Error;

/// Errors that can occur while building keys or signing.
///
/// Verification never returns an error: every failure there is a `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// The private key is zero or not below the curve order.
    #[error("private key must be in [1, N-1]")]
    InvalidKey,
    /// A signature component is zero or not below the curve order.
    #[error("signature component must be in [1, N-1]")]
    InvalidSignature,
    #[error(transparent)]
    Curve(#[from] stark_curve::Error),
}

impl From<CurveError> for EcdsaError {
    fn from(err: CurveError) -> Self {
        EcdsaError::Curve(err.into())
    }
}
