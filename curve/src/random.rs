use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::field::{FieldParams, Fp};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Uniform over the non-zero elements.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<P: FieldParams> RandomField for Fp<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let value = Self::random(rng);
            if !value.is_zero() {
                return value;
            }
        }
    }
}
