//! Periodic index arithmetic on 1-based axes.
//!
//! Stencils on periodic axes reach their neighbours through these two
//! helpers. Bounded axes never call them at the domain edge.

/// The index after `i` on a periodic axis of length `n` (`n + 1` wraps to `1`).
#[inline]
pub fn next(i: usize, n: usize) -> usize {
    if i >= n {
        1
    } else {
        i + 1
    }
}

/// The index before `i` on a periodic axis of length `n` (`0` and `1` wrap to `n`).
#[inline]
pub fn prev(i: usize, n: usize) -> usize {
    if i <= 1 {
        n
    } else {
        i - 1
    }
}
