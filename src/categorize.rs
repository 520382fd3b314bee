/// Bit allocation: map the region power envelope and the frame's
/// remaining bit budget to a power category per region, plus the ordered
/// balance list of single-category adjustments that rate control indexes
/// into.
///
/// Encoder and decoder run this identically from the same inputs — the
/// envelope and the post-envelope bit count — so only the chosen
/// adjustment count needs to travel in the frame. Scan directions and
/// strict comparisons are part of the wire contract.

use crate::mode::{Mode, MAX_REGIONS};
use crate::tables::EXPECTED_CATEGORY_BITS;

/// Baseline categories plus the balance list. The baseline is the
/// fully-lowered side of the search; applying the first `k` balance
/// entries (each raising one region) yields the allocation for rate
/// control value `k`.
pub struct Categorization {
    pub categories: [i16; MAX_REGIONS],
    /// `rate_control_possibilities - 1` entries are meaningful.
    pub balance: [usize; 31],
}

pub fn categorize(indices: &[i16], available_bits: i32, mode: &Mode) -> Categorization {
    let n = mode.num_regions;
    let mut available = available_bits;

    // Budgets beyond one bit per transform bin count for less.
    let base = mode.dct_length as i32;
    if available > base {
        available = base + (((available - base) * 5) >> 3);
    }

    // Binary search for the offset whose expected spend fills the budget.
    let mut offset = -32i32;
    let mut delta = 32i32;
    while delta > 0 {
        let mut pool = 0i32;
        for r in 0..n {
            let cat = ((delta + offset - indices[r] as i32) >> 1).clamp(0, 7);
            pool += EXPECTED_CATEGORY_BITS[cat as usize] as i32;
        }
        if pool >= available - 32 {
            offset += delta;
        }
        delta >>= 1;
    }

    let mut raised = [0i16; MAX_REGIONS];
    let mut lowered = [0i16; MAX_REGIONS];
    let mut pool = 0i32;
    for r in 0..n {
        let cat = ((offset - indices[r] as i32) >> 1).clamp(0, 7) as i16;
        raised[r] = cat;
        lowered[r] = cat;
        pool += EXPECTED_CATEGORY_BITS[cat as usize] as i32;
    }
    let mut raised_pool = pool;
    let mut lowered_pool = pool;

    // Walk both sides apart one adjustment at a time, logging raises
    // forward from the middle of the scratch list and lowers backward,
    // so the finished window reads lowest-rate to highest-rate.
    let num_balance = mode.rate_control_possibilities - 1;
    let mut scratch = [0usize; 64];
    let mut raise_slot = num_balance + 1;
    let mut lower_slot = num_balance + 1;
    for _ in 0..num_balance {
        if raised_pool + lowered_pool > 2 * available {
            let mut best = -99i32;
            let mut pick = 0usize;
            for r in (0..n).rev() {
                if raised[r] >= 7 {
                    continue;
                }
                let val = offset - indices[r] as i32 - 2 * raised[r] as i32;
                if best < val {
                    best = val;
                    pick = r;
                }
            }
            scratch[raise_slot] = pick;
            raise_slot += 1;
            if best != -99 {
                raised_pool += EXPECTED_CATEGORY_BITS[raised[pick] as usize + 1] as i32
                    - EXPECTED_CATEGORY_BITS[raised[pick] as usize] as i32;
                raised[pick] += 1;
            }
        } else {
            let mut best = 99i32;
            let mut pick = 0usize;
            for r in 0..n {
                if lowered[r] == 0 {
                    continue;
                }
                let val = offset - indices[r] as i32 - 2 * lowered[r] as i32;
                if best > val {
                    best = val;
                    pick = r;
                }
            }
            lower_slot -= 1;
            scratch[lower_slot] = pick;
            if best != 99 {
                lowered_pool += EXPECTED_CATEGORY_BITS[lowered[pick] as usize - 1] as i32
                    - EXPECTED_CATEGORY_BITS[lowered[pick] as usize] as i32;
                lowered[pick] -= 1;
            }
        }
    }

    let mut balance = [0usize; 31];
    balance[..num_balance].copy_from_slice(&scratch[lower_slot..lower_slot + num_balance]);
    Categorization {
        categories: lowered,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_wideband_allocation() {
        let mode = Mode::new(16000, 24000).unwrap();
        let mut indices = [0i16; MAX_REGIONS];
        indices[..14].copy_from_slice(&[21, 16, 12, 10, 9, 8, 8, 8, 7, 7, 7, 7, 7, 7]);
        let alloc = categorize(&indices, 434, &mode);
        assert_eq!(
            &alloc.categories[..14],
            &[0, 0, 2, 3, 3, 4, 4, 4, 5, 5, 5, 5, 5, 5]
        );
        assert_eq!(
            &alloc.balance[..15],
            &[4, 7, 6, 5, 3, 2, 1, 13, 12, 11, 10, 9, 8, 4, 7]
        );
    }

    #[test]
    fn test_known_ultra_wideband_allocation() {
        let mode = Mode::new(32000, 32000).unwrap();
        let mut indices = [0i16; MAX_REGIONS];
        indices.copy_from_slice(&[
            18, 17, 15, 14, 12, 11, 10, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3,
            2, 2,
        ]);
        let alloc = categorize(&indices, 800, &mode);
        assert_eq!(
            &alloc.categories[..28],
            &[
                0, 0, 0, 0, 1, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 7, 7
            ]
        );
        assert_eq!(
            &alloc.balance[..31],
            &[
                23, 22, 21, 17, 16, 15, 11, 10, 9, 6, 4, 3, 25, 24, 20, 19, 18, 14, 13, 12, 8, 7,
                5, 2, 23, 22, 21, 17, 16, 15, 11
            ]
        );
    }

    #[test]
    fn test_balance_raises_stay_in_range() {
        let mode = Mode::new(16000, 16000).unwrap();
        let mut indices = [0i16; MAX_REGIONS];
        indices[..14].copy_from_slice(&[31, 28, 25, 24, 20, 18, 15, 12, 10, 9, 5, 0, -4, -8]);
        let alloc = categorize(&indices, 280, &mode);
        let mut cats = alloc.categories;
        for &b in &alloc.balance[..15] {
            cats[b] += 1;
            assert!(cats[b] <= 7, "raise pushed region {} past category 7", b);
        }
    }
}
