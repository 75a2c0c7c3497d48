//! Montgomery arithmetic shared by the base field and the scalar field.
//!
//! Elements are stored as four little-endian `u64` limbs holding
//! `value * R mod m` with `R = 2^256`. Both STARK moduli are below `2^252`,
//! so a sum of two reduced elements never carries out of the top limb.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::encoding::hex_to_biguint;
use crate::group::ScalarBits;

/// Constants describing a prime field below `2^252` in Montgomery form.
pub trait FieldParams:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync
{
    /// Short name used in `Debug` output and error messages.
    const NAME: &'static str;
    /// The prime modulus `m`.
    const MODULUS: [u64; 4];
    /// `2^256 mod m`, the Montgomery form of one.
    const R: [u64; 4];
    /// `2^512 mod m`, used to move canonical values into Montgomery form.
    const R2: [u64; 4];
    /// `-m^{-1} mod 2^64`.
    const MU: u64;
    /// Bit length of the modulus.
    const BITS: u32;
}

/// Element of the prime field described by `P`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fp<P: FieldParams> {
    limbs: [u64; 4],
    _params: PhantomData<P>,
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

#[inline]
const fn add_limbs(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], bool) {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);
    ([r0, r1, r2, r3], carry)
}

#[inline]
const fn sub_limbs(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], bool) {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);
    ([r0, r1, r2, r3], borrow)
}

/// Returns `b` when `choose_b` is set, `a` otherwise, without branching.
#[inline]
const fn select(a: [u64; 4], b: [u64; 4], choose_b: bool) -> [u64; 4] {
    let mask = 0u64.wrapping_sub(choose_b as u64);
    [
        a[0] ^ ((a[0] ^ b[0]) & mask),
        a[1] ^ ((a[1] ^ b[1]) & mask),
        a[2] ^ ((a[2] ^ b[2]) & mask),
        a[3] ^ ((a[3] ^ b[3]) & mask),
    ]
}

#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4], m: [u64; 4]) -> [u64; 4] {
    let (sum, _) = add_limbs(a, b);
    let (reduced, borrow) = sub_limbs(sum, m);
    select(reduced, sum, borrow)
}

#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4], m: [u64; 4]) -> [u64; 4] {
    let (diff, borrow) = sub_limbs(a, b);
    let (wrapped, _) = add_limbs(diff, m);
    select(diff, wrapped, borrow)
}

/// Montgomery multiplication: `a * b * R^{-1} mod m`.
///
/// Requires `a * b < R * m`, which holds whenever one operand is reduced.
const fn montgomery_mul(a: [u64; 4], b: [u64; 4], m: [u64; 4], mu: u64) -> [u64; 4] {
    let mut t = [0u64; 8];

    let mut i = 0;
    while i < 4 {
        let mut carry = 0u128;
        let mut j = 0;
        while j < 4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
            j += 1;
        }
        t[i + 4] = carry as u64;
        i += 1;
    }

    let mut i = 0;
    while i < 4 {
        let k = t[i].wrapping_mul(mu);
        let mut carry = 0u128;
        let mut j = 0;
        while j < 4 {
            let product = (k as u128) * (m[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
            j += 1;
        }
        let mut j = i + 4;
        while j < 8 {
            let sum = (t[j] as u128) + carry;
            t[j] = sum as u64;
            carry = sum >> 64;
            j += 1;
        }
        i += 1;
    }

    let result = [t[4], t[5], t[6], t[7]];
    let (reduced, borrow) = sub_limbs(result, m);
    select(reduced, result, borrow)
}

#[inline]
const fn top_limb_mask(bits: u32) -> u64 {
    let used = bits - 192;
    if used >= 64 {
        u64::MAX
    } else {
        (1u64 << used) - 1
    }
}

impl<P: FieldParams> Fp<P> {
    pub const ZERO: Self = Self::from_montgomery([0, 0, 0, 0]);
    pub const ONE: Self = Self::from_montgomery(P::R);

    #[inline]
    const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Fp {
            limbs,
            _params: PhantomData,
        }
    }

    /// Builds an element from little-endian canonical limbs, reducing
    /// anything at or above the modulus.
    #[inline]
    pub const fn from_raw(limbs: [u64; 4]) -> Self {
        Self::from_montgomery(montgomery_mul(limbs, P::R2, P::MODULUS, P::MU))
    }

    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self::from_raw([value, 0, 0, 0])
    }

    /// Builds an element from little-endian canonical limbs, rejecting values
    /// at or above the modulus.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Option<Self> {
        let (_, borrow) = sub_limbs(limbs, P::MODULUS);
        if borrow {
            Some(Self::from_raw(limbs))
        } else {
            None
        }
    }

    /// Little-endian limbs of the canonical value.
    #[inline]
    pub const fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul(self.limbs, [1, 0, 0, 0], P::MODULUS, P::MU)
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(word);
        }
        Self::from_canonical_limbs(limbs)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let limbs = self.to_canonical_limbs();
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&limbs[3 - i].to_be_bytes());
        }
        bytes
    }

    /// Converts an integer, returning `None` if it is not below the modulus.
    pub fn from_biguint(value: &BigUint) -> Option<Self> {
        if value.bits() > 256 {
            return None;
        }
        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(value.to_u64_digits()) {
            *limb = digit;
        }
        Self::from_canonical_limbs(limbs)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    /// The field modulus as an integer.
    pub fn modulus() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for limb in P::MODULUS.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        BigUint::from_bytes_be(&bytes)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Parity of the canonical value.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Variable-time exponentiation by a little-endian exponent.
    pub fn pow_vartime(&self, exp: &[u64; 4]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;
        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result *= base;
                }
                base = base.square();
                remaining >>= 1;
            }
        }

        result
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^{m-2}`.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let (exp, _) = sub_limbs(P::MODULUS, [2, 0, 0, 0]);
        Some(self.pow_vartime(&exp))
    }

    /// Swaps `a` and `b` when `swap` is set, without branching on it.
    #[inline]
    pub fn conditional_swap(a: &mut Self, b: &mut Self, swap: bool) {
        let mask = 0u64.wrapping_sub(swap as u64);
        for i in 0..4 {
            let t = (a.limbs[i] ^ b.limbs[i]) & mask;
            a.limbs[i] ^= t;
            b.limbs[i] ^= t;
        }
    }

    /// One rejection-sampling draw: 32 random bytes masked to the modulus bit
    /// length, kept only if the value is below the modulus.
    pub fn sample_once<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);

        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        limbs[3] &= top_limb_mask(P::BITS);

        Self::from_canonical_limbs(limbs)
    }
}

impl<P: FieldParams> ScalarBits for Fp<P> {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

impl<P: FieldParams> Distribution<Fp<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        loop {
            if let Some(value) = Fp::sample_once(rng) {
                return value;
            }
        }
    }
}

impl<P: FieldParams> Add for Fp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_montgomery(add_mod(self.limbs, rhs.limbs, P::MODULUS))
    }
}

impl<P: FieldParams> AddAssign for Fp<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams> Sub for Fp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_montgomery(sub_mod(self.limbs, rhs.limbs, P::MODULUS))
    }
}

impl<P: FieldParams> SubAssign for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<P: FieldParams> Mul for Fp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_montgomery(montgomery_mul(self.limbs, rhs.limbs, P::MODULUS, P::MU))
    }
}

impl<P: FieldParams> MulAssign for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: FieldParams> Sum for Fp<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for Fp<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<P: FieldParams> Display for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.to_biguint())
    }
}

impl<P: FieldParams> Debug for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self)
    }
}

impl<P: FieldParams> Serialize for Fp<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, P: FieldParams> Deserialize<'de> for Fp<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let value = hex_to_biguint(&text).map_err(de::Error::custom)?;
        Self::from_biguint(&value)
            .ok_or_else(|| de::Error::custom(format!("{} value out of range", P::NAME)))
    }
}
