//! Constants used by the signature scheme.

/// Size of a serialized secret signing key in bytes: one big-endian scalar.
pub const SK_SIZE: usize = 32;

/// Size of an uncompressed verifying key: `0x04 || x || y`.
pub const PK_SIZE: usize = stark_curve::UNCOMPRESSED_SIZE;

/// Size of a compressed verifying key: parity tag followed by `x`.
pub const PK_COMPRESSED_SIZE: usize = stark_curve::COMPRESSED_SIZE;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - the scalar r (32 bytes)
/// - the scalar s (32 bytes)
pub const SIG_SIZE: usize = 64;

/// Number of nonces drawn before signing gives up. A draw outside
/// `[1, N-1]` counts as an attempt.
pub const MAX_NONCE_ATTEMPTS: usize = 16;
