//! Base field of the STARK curve. p = 2^251 + 17 * 2^192 + 1
//!
//! p - 1 = 2^192 * q with q = 0x800000000000011, so square roots use
//! Tonelli-Shanks with 3 as the quadratic non-residue.

use crate::field::{FieldParams, Fp};

/// Parameters of the STARK base field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StarkBaseParams;

impl FieldParams for StarkBaseParams {
    const NAME: &'static str = "Felt";
    const MODULUS: [u64; 4] = [
        0x0000000000000001,
        0x0000000000000000,
        0x0000000000000000,
        0x0800000000000011,
    ];
    const R: [u64; 4] = [
        0xffffffffffffffe1,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x07fffffffffffdf0,
    ];
    const R2: [u64; 4] = [
        0xfffffd737e000401,
        0x00000001330fffff,
        0xffffffffff6f8000,
        0x07ffd4ab5e008810,
    ];
    const MU: u64 = 0xffffffffffffffff;
    const BITS: u32 = 252;
}

/// Element of the STARK base field.
pub type Felt = Fp<StarkBaseParams>;

const TWO_ADICITY: u32 = 192;

// (p - 1) / 2
const EULER_EXPONENT: [u64; 4] = [
    0x0000000000000000,
    0x0000000000000000,
    0x8000000000000000,
    0x0400000000000008,
];

// Odd part of p - 1, and (q + 1) / 2.
const Q: [u64; 4] = [0x0800000000000011, 0, 0, 0];
const Q_PLUS_ONE_HALF: [u64; 4] = [0x0400000000000009, 0, 0, 0];

const NON_RESIDUE: u64 = 3;

impl Felt {
    /// Whether this element has a square root in the field.
    pub fn is_square(&self) -> bool {
        self.is_zero() || self.pow_vartime(&EULER_EXPONENT) == Felt::ONE
    }

    /// One of the two square roots, or `None` for a non-residue.
    /// The caller picks the root it needs via [`Felt::is_odd`].
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Felt::ZERO);
        }
        if !self.is_square() {
            return None;
        }

        let mut m = TWO_ADICITY;
        let mut c = Felt::from_u64(NON_RESIDUE).pow_vartime(&Q);
        let mut t = self.pow_vartime(&Q);
        let mut root = self.pow_vartime(&Q_PLUS_ONE_HALF);

        while t != Felt::ONE {
            // Least i with t^(2^i) == 1; always below m for a residue.
            let mut i = 0;
            let mut t2i = t;
            while t2i != Felt::ONE {
                t2i = t2i.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t *= c;
            root *= b;
        }

        Some(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_residue() {
        assert!(!Felt::from_u64(NON_RESIDUE).is_square());
        assert!(Felt::from_u64(4).is_square());
    }

    #[test]
    fn test_sqrt_small() {
        let root = Felt::from_u64(9).sqrt().unwrap();
        assert!(root == Felt::from_u64(3) || root == -Felt::from_u64(3));
        assert_eq!(Felt::ZERO.sqrt(), Some(Felt::ZERO));
        assert!(Felt::from_u64(NON_RESIDUE).sqrt().is_none());
    }

    #[test]
    fn test_sqrt_roundtrip() {
        let x = Felt::from_raw([
            0x3d723d8bc943cfca,
            0xdeacfd9b0d1819e0,
            0x7beced415a40f0c7,
            0x01ef15c18599971b,
        ]);
        let square = x.square();
        let root = square.sqrt().unwrap();
        assert_eq!(root.square(), square);
        assert!(root == x || root == -x);
    }
}
