//! Canonical transaction hash and signature checks over it.

use rand::Rng;
use stark_curve::{hash_chain, CurveParams, Error, Felt, Scalar};
use stark_ecdsa::{EcdsaError, Signature, SigningKey, VerifyingKey};
use tracing::{debug, trace};

use crate::transaction::Transaction;

/// Hash of an invoke transaction sent from `account`:
///
/// hash_chain([account, contract, selector, hash_chain(calldata), nonce])
pub fn hash_tx(params: &CurveParams, account: &Felt, tx: &Transaction) -> Result<Felt, Error> {
    let calldata_hash = hash_chain(params, &tx.calldata)?;
    let hash = hash_chain(
        params,
        &[
            *account,
            tx.contract_address,
            tx.entry_point_selector,
            calldata_hash,
            tx.nonce,
        ],
    )?;
    trace!(%hash, calldata = tx.calldata.len(), "transaction hashed");
    Ok(hash)
}

fn scalar_to_felt(value: &Scalar) -> Felt {
    // n < p, so every scalar is already a reduced field element.
    Felt::from_raw(value.to_canonical_limbs())
}

/// Signs the transaction hash and stores `[r, s]` and the hash on `tx`.
pub fn sign_transaction<R: Rng + ?Sized>(
    params: &CurveParams,
    key: &SigningKey,
    rng: &mut R,
    account: &Felt,
    tx: &mut Transaction,
) -> Result<Signature, EcdsaError> {
    let hash = hash_tx(params, account, tx)?;
    let signature = key.sign(params, rng, &hash)?;

    tx.transaction_hash = hash;
    tx.signature = vec![scalar_to_felt(&signature.r()), scalar_to_felt(&signature.s())];
    debug!(%hash, "transaction signed");
    Ok(signature)
}

/// Checks `tx.signature` against the hash recomputed for `account`. Anything
/// malformed is `false`.
pub fn verify_transaction(
    params: &CurveParams,
    key: &VerifyingKey,
    account: &Felt,
    tx: &Transaction,
) -> bool {
    let [r, s] = tx.signature.as_slice() else {
        trace!(len = tx.signature.len(), "signature must be [r, s]");
        return false;
    };
    let Ok(signature) = Signature::from_biguints(&r.to_biguint(), &s.to_biguint()) else {
        return false;
    };
    match hash_tx(params, account, tx) {
        Ok(hash) => key.verify(params, &hash, &signature),
        Err(_) => false,
    }
}
