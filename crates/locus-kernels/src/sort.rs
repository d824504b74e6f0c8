//! Quicksort over integer keys that permutes satellite arrays in lockstep.
//!
//! Pivot is the middle element of each range. A Lomuto pass moves smaller keys
//! to the front, then a second pass gathers keys equal to the pivot next to it,
//! so runs of duplicate keys are settled in one linear step. Already-sorted
//! input stays at `O(n log n)`, but adversarial inputs can still hit the
//! `O(n^2)` worst case. Ties are broken arbitrarily. Stack depth is bounded by
//! `O(log n)` because only the smaller side is recursed into.

/// Arrays that follow the key permutation.
///
/// Implemented for slices, `Vec`s, `()` (no satellite) and tuples, so a sort
/// can carry e.g. `(&mut rows, &mut cols, &mut vals)` at once.
pub trait Satellite {
    fn swap(&mut self, i: usize, j: usize);
}

impl Satellite for () {
    #[inline(always)]
    fn swap(&mut self, _i: usize, _j: usize) {}
}

impl<T> Satellite for [T] {
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T> Satellite for Vec<T> {
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<S: Satellite + ?Sized> Satellite for &mut S {
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }
}

impl<A: Satellite, B: Satellite> Satellite for (A, B) {
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
        self.1.swap(i, j);
    }
}

impl<A: Satellite, B: Satellite, C: Satellite> Satellite for (A, B, C) {
    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
        self.1.swap(i, j);
        self.2.swap(i, j);
    }
}

/// Sort `keys` ascending, applying every swap to `sat` as well.
///
/// Every satellite must be at least `keys.len()` long.
pub fn sort_with<S: Satellite + ?Sized>(keys: &mut [u64], sat: &mut S) {
    quicksort(keys, sat, 0, keys.len());
}

fn quicksort<S: Satellite + ?Sized>(keys: &mut [u64], sat: &mut S, mut lo: usize, mut hi: usize) {
    // recurse on the smaller side, loop on the larger
    while hi - lo > 1 {
        let (lt, gt) = partition(keys, sat, lo, hi);
        if lt - lo < hi - gt {
            quicksort(keys, sat, lo, lt);
            lo = gt;
        } else {
            quicksort(keys, sat, gt, hi);
            hi = lt;
        }
    }
}

/// Three-way partition of `keys[lo..hi]` around its middle element.
///
/// Returns `(lt, gt)`: keys in `lo..lt` are smaller than the pivot, keys in
/// `lt..gt` equal it, keys in `gt..hi` are larger. `lt < gt` always holds.
#[inline]
fn partition<S: Satellite + ?Sized>(
    keys: &mut [u64],
    sat: &mut S,
    lo: usize,
    hi: usize,
) -> (usize, usize) {
    let last = hi - 1;
    let mid = lo + (hi - lo) / 2;
    keys.swap(mid, last);
    sat.swap(mid, last);
    let pivot = keys[last];
    let mut lt = lo;
    for i in lo..last {
        if keys[i] < pivot {
            keys.swap(i, lt);
            sat.swap(i, lt);
            lt += 1;
        }
    }
    let mut eq = lt;
    for i in lt..last {
        if keys[i] == pivot {
            keys.swap(i, eq);
            sat.swap(i, eq);
            eq += 1;
        }
    }
    keys.swap(eq, last);
    sat.swap(eq, last);
    (lt, eq + 1)
}

/// Sort keys alone.
#[inline]
pub fn sort_keys(keys: &mut [u64]) {
    sort_with(keys, &mut ());
}

/// Position of the first key smaller than its predecessor, if any.
#[must_use]
pub fn first_unsorted(keys: &[u64]) -> Option<usize> {
    keys.windows(2).position(|w| w[1] < w[0]).map(|p| p + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_two_satellites() {
        let mut keys = vec![5u64, 1, 4, 1, 3];
        let mut a = vec!['e', 'a', 'd', 'b', 'c'];
        let mut b = vec![50, 10, 40, 11, 30];
        sort_with(&mut keys, &mut (&mut a, &mut b));
        assert_eq!(keys, vec![1, 1, 3, 4, 5]);
        assert_eq!(&a[2..], &['c', 'd', 'e']);
        assert_eq!(&b[2..], &[30, 40, 50]);
        // ties keep their pairing, in either order
        let mut head: Vec<(char, i32)> =
            a[..2].iter().copied().zip(b[..2].iter().copied()).collect();
        head.sort_unstable();
        assert_eq!(head, vec![('a', 10), ('b', 11)]);
    }

    #[test]
    fn trivial_lengths() {
        let mut empty: Vec<u64> = Vec::new();
        sort_keys(&mut empty);
        assert!(empty.is_empty());
        let mut one = vec![7u64];
        let mut sat = vec![1.5f64];
        sort_with(&mut one, &mut sat);
        assert_eq!((one[0], sat[0]), (7, 1.5));
    }

    #[test]
    fn duplicate_runs_partition_in_one_pass() {
        let mut keys = vec![3u64, 3, 1, 3, 5, 3, 3];
        let mut sat: Vec<usize> = (0..keys.len()).collect();
        let (lt, gt) = partition(&mut keys, &mut sat, 0, 7);
        assert_eq!((lt, gt), (1, 6));
        assert_eq!(keys, vec![1, 3, 3, 3, 3, 3, 5]);
        assert_eq!((sat[0], sat[6]), (2, 4));

        let n = 200_000;
        let mut same = vec![42u64; n];
        let mut tags: Vec<u32> = (0..n as u32).collect();
        sort_with(&mut same, &mut tags);
        assert!(same.iter().all(|&k| k == 42));
        tags.sort_unstable();
        assert!(tags.iter().enumerate().all(|(i, &t)| t as usize == i));
    }

    #[test]
    fn first_unsorted_position() {
        assert_eq!(first_unsorted(&[]), None);
        assert_eq!(first_unsorted(&[1, 1, 2]), None);
        assert_eq!(first_unsorted(&[1, 3, 2, 4]), Some(2));
    }
}
