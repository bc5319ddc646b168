//! In-place lexicographic quicksort used before chain partitioning.

use std::cmp::Ordering;

use crate::geometry::{lex_cmp, HullPoint};

/// Sort `v` by `(x, y)` ascending. Not stable; equal points end up adjacent
/// in no particular order.
///
/// The pivot is the median of the values at the first, middle and last
/// positions. Recurses into the smaller side and loops on the larger one, so
/// stack depth stays logarithmic.
pub(crate) fn quicksort(mut v: &mut [HullPoint]) {
    while v.len() > 1 {
        let pivot = median_of_three(v);
        let mut i: isize = 0;
        let mut j: isize = v.len() as isize - 1;
        while i <= j {
            while lex_cmp(&v[i as usize], &pivot) == Ordering::Less {
                i += 1;
            }
            while lex_cmp(&v[j as usize], &pivot) == Ordering::Greater {
                j -= 1;
            }
            if i <= j {
                v.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
        }
        // [0, j] <= pivot <= [i, len)
        let split_lo = (j + 1) as usize;
        let split_hi = i as usize;
        let tmp = v;
        let (lo, rest) = tmp.split_at_mut(split_lo);
        let hi = &mut rest[split_hi - split_lo..];
        if lo.len() < hi.len() {
            quicksort(lo);
            v = hi;
        } else {
            quicksort(hi);
            v = lo;
        }
    }
}

/// Orders the first, middle and last elements in place and returns the middle
/// one as pivot value.
fn median_of_three(v: &mut [HullPoint]) -> HullPoint {
    let lo = 0;
    let hi = v.len() - 1;
    let mid = hi / 2;
    if lex_cmp(&v[mid], &v[lo]) == Ordering::Less {
        v.swap(mid, lo);
    }
    if lex_cmp(&v[hi], &v[lo]) == Ordering::Less {
        v.swap(hi, lo);
    }
    if lex_cmp(&v[hi], &v[mid]) == Ordering::Less {
        v.swap(hi, mid);
    }
    v[mid]
}
