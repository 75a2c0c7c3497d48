use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of ladder steps for secret scalars. Every scalar on this curve is
/// below `2^252`.
pub const LADDER_BITS: usize = 252;

pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

impl ScalarBits for [u64; 4] {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        *self
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Swaps the two points when `swap` is set, without branching on it.
    fn conditional_swap(a: &mut Self, b: &mut Self, swap: bool);

    /// Double-and-add. Running time depends on the scalar, so only use it
    /// with public scalars.
    #[inline]
    fn mul_vartime<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result += temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    /// Montgomery ladder over a fixed [`LADDER_BITS`] steps. The sequence of
    /// group operations does not depend on the scalar.
    fn mul_ct<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut r0 = Self::identity();
        let mut r1 = *self;

        for i in (0..LADDER_BITS).rev() {
            let bit = (scalar_limbs[i / 64] >> (i % 64)) & 1 == 1;
            Self::conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0 + r1;
            r0 = r0.double();
            Self::conditional_swap(&mut r0, &mut r1, bit);
        }

        r0
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return *self;
        }
        self.mul_vartime(&n)
    }
}
