//! Hilbert curve index over a `n x n` grid, `n` a power of two.
//!
//! `x` is the row and `y` the column when ordering matrix nonzeros. Both
//! directions process one bit-plane per step and do no allocation. Sides up to
//! `2^32` are supported, which covers every `u32` coordinate; the distance then
//! fills the whole `u64` range.

/// Smallest power of two `>= m`. `m = 0` yields 1.
///
/// Panics if the result does not fit in a `u64`.
#[inline]
#[must_use]
pub fn ceil_power_of_two(m: u64) -> u64 {
    m.max(1)
        .checked_next_power_of_two()
        .unwrap_or_else(|| panic!("no power of two >= {m} fits in u64"))
}

#[inline(always)]
fn rotate(n: u64, x: &mut u64, y: &mut u64, rx: u64, ry: u64) {
    if ry == 0 {
        if rx == 1 {
            *x = n.wrapping_sub(1).wrapping_sub(*x);
            *y = n.wrapping_sub(1).wrapping_sub(*y);
        }
        std::mem::swap(x, y);
    }
}

/// Distance of `(x, y)` along the Hilbert curve filling the `n x n` square.
#[inline]
#[must_use]
pub fn xy_to_distance(n: u64, x: u32, y: u32) -> u64 {
    debug_assert!(n.is_power_of_two(), "side {n} must be a power of two");
    debug_assert!(u64::from(x) < n && u64::from(y) < n, "({x}, {y}) outside {n}x{n}");
    let mut x = u64::from(x);
    let mut y = u64::from(y);
    let mut d = 0u64;
    let mut s = n / 2;
    while s > 0 {
        let rx = u64::from((x & s) > 0);
        let ry = u64::from((y & s) > 0);
        d += s * s * ((3 * rx) ^ ry);
        // bits at or above s are never read again, so rotating over the full
        // side is equivalent to rotating within the current quadrant
        rotate(n, &mut x, &mut y, rx, ry);
        s /= 2;
    }
    d
}

/// Inverse of [`xy_to_distance`].
#[inline]
#[must_use]
pub fn distance_to_xy(n: u64, d: u64) -> (u32, u32) {
    debug_assert!(n.is_power_of_two(), "side {n} must be a power of two");
    debug_assert!(
        u128::from(d) < u128::from(n) * u128::from(n),
        "distance {d} outside {n}x{n}"
    );
    let mut t = d;
    let mut x = 0u64;
    let mut y = 0u64;
    let mut s = 1u64;
    while s < n {
        let rx = 1 & (t / 2);
        let ry = 1 & (t ^ rx);
        rotate(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    #[allow(clippy::cast_possible_truncation)]
    (x as u32, y as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_curve() {
        // U shape starting at the origin, going down the first column
        assert_eq!(xy_to_distance(2, 0, 0), 0);
        assert_eq!(xy_to_distance(2, 0, 1), 1);
        assert_eq!(xy_to_distance(2, 1, 1), 2);
        assert_eq!(xy_to_distance(2, 1, 0), 3);
    }

    #[test]
    fn small_curves_are_continuous_bijections() {
        for bits in 0..=5 {
            let n = 1u64 << bits;
            let side = n as u32;
            let mut seen = vec![false; (n * n) as usize];
            for x in 0..side {
                for y in 0..side {
                    let d = xy_to_distance(n, x, y);
                    assert!(d < n * n, "n={n} ({x},{y}) -> {d}");
                    assert!(!seen[d as usize], "n={n} distance {d} hit twice");
                    seen[d as usize] = true;
                    assert_eq!(distance_to_xy(n, d), (x, y));
                }
            }
            assert!(seen.iter().all(|&s| s));

            for d in 1..n * n {
                let (x0, y0) = distance_to_xy(n, d - 1);
                let (x1, y1) = distance_to_xy(n, d);
                assert_eq!(x0.abs_diff(x1) + y0.abs_diff(y1), 1, "n={n} step {d}");
            }
        }
    }

    #[test]
    fn ceil_power_of_two_edges() {
        assert_eq!(ceil_power_of_two(0), 1);
        assert_eq!(ceil_power_of_two(1), 1);
        assert_eq!(ceil_power_of_two(5), 8);
        assert_eq!(ceil_power_of_two(1 << 20), 1 << 20);
        assert_eq!(ceil_power_of_two(u64::from(u32::MAX)), 1 << 32);
    }

    #[test]
    fn largest_side_corner() {
        let n = 1u64 << 32;
        let d = xy_to_distance(n, u32::MAX, 0);
        assert_eq!(d, u64::MAX);
        assert_eq!(distance_to_xy(n, d), (u32::MAX, 0));
    }
}
