//! StarkNet transaction records and their canonical Pedersen hash.
//!
//! Payloads arrive as [`RawTransaction`] values (already deserialized, with
//! every number tagged as hex or decimal) and convert into [`Transaction`],
//! whose fields are all field elements. [`hash_tx`] produces the hash an
//! account signs; [`verify_transaction`] checks the attached `[r, s]`.

mod hasher;
mod transaction;

pub use hasher::{hash_tx, sign_transaction, verify_transaction};
pub use transaction::{EntryPointType, RawTransaction, Transaction, TransactionType};
