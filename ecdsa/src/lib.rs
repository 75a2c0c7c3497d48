//! ECDSA signatures over the STARK curve.
//!
//! This library implements the StarkNet signature scheme:
//! - keys and nonces are scalars modulo the curve order `N`
//! - messages are base-field elements, usually a Pedersen hash
//! - `r` is the x-coordinate of the nonce point reduced modulo `N`
//!
//! Secret scalars go through the fixed-length Montgomery ladder of
//! `stark-curve`; verification uses the interleaved double-scalar
//! multiplication.
//!
//! # Example
//!
//! ```
//! use stark_curve::{CurveParams, Felt, pedersen_hash};
//! use stark_ecdsa::SigningKey;
//!
//! let params = CurveParams::default();
//! let mut rng = rand::rng();
//!
//! // Generate a random signing key and derive its verifying key
//! let signing_key = SigningKey::random(&mut rng);
//! let verifying_key = signing_key.verifying_key(&params).expect("key derivation failed");
//!
//! // Hash the message
//! let hash = pedersen_hash(&params, &Felt::from_u64(0x12773), &Felt::from_u64(0x872362))
//!     .expect("hashing failed");
//!
//! // Sign and verify
//! let signature = signing_key.sign(&params, &mut rng, &hash).expect("signing failed");
//! assert!(verifying_key.verify(&params, &hash, &signature));
//! ```
//!
//! # Security Considerations
//!
//! - Always use a cryptographically secure random number generator
//! - Nonces are drawn at random for every signature, never derived from the key
//! - Protect the signing key from unauthorized access

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{MAX_NONCE_ATTEMPTS, PK_COMPRESSED_SIZE, PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::EcdsaError;
pub use keys::{
    SigningKey, VerifyingKey, private_to_point, x_to_pub_key, x_to_pub_key_with_parity,
};
pub use signatures::{Signature, verify, verify_x_only};
