use crate::group::{Group, ScalarBits};

const WINDOW_BITS: usize = 4;
const TABLE_SIZE: usize = 1 << WINDOW_BITS;

fn window_table<G: Group>(point: &G) -> [G; TABLE_SIZE] {
    let mut table = [G::identity(); TABLE_SIZE];
    table[1] = *point;
    for i in 2..TABLE_SIZE {
        table[i] = table[i - 1] + table[1];
    }
    table
}

/// Compute a * P + b * Q with interleaved 4-bit windows, sharing the
/// doublings between both scalars. Variable time.
pub fn double_scalar_mul<G, S>(a: &S, p: &G, b: &S, q: &G) -> G
where
    G: Group,
    S: ScalarBits + ?Sized,
{
    let p_table = window_table(p);
    let q_table = window_table(q);

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = G::identity();

    for limb_idx in (0..4).rev() {
        let a_limb = a_limbs[limb_idx];
        let b_limb = b_limbs[limb_idx];
        for shift in (0..64).step_by(WINDOW_BITS).rev() {
            for _ in 0..WINDOW_BITS {
                result = result.double();
            }

            let a_window = ((a_limb >> shift) & 0xF) as usize;
            if a_window != 0 {
                result += p_table[a_window];
            }

            let b_window = ((b_limb >> shift) & 0xF) as usize;
            if b_window != 0 {
                result += q_table[b_window];
            }
        }
    }

    result
}
