use thiserror::Error;

/// Arithmetic failures on the curve itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    #[error("operation has no affine result")]
    Degenerate,
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("no usable nonce after {0} attempts")]
    NonceExhausted(usize),
}

/// Error type for everything the crate exposes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid curve configuration: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Curve(#[from] CurveError),
}
