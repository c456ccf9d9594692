//! Exact floating-point summation.
//!
//! # Algorithm
//!
//! Shewchuk's adaptive-precision summation: the running total is kept as a
//! list of non-overlapping partials whose exact sum equals the exact sum of
//! the inputs, and the partials are rounded to a single `f64` once at the end.
//!
//! Reference: Shewchuk (1997), "Adaptive Precision Floating-Point Arithmetic
//! and Fast Robust Geometric Predicates", *Discrete & Computational Geometry*
//! 18(3), pp. 305–363.
//!
//! The result is the correctly rounded (ties to even) value of the exact sum,
//! so it does not depend on the order of the inputs.

/// Correctly rounded sum of `values`.
///
/// Inputs must be finite and their partial sums must stay within `f64`
/// range; otherwise the result may be infinite or NaN.
///
/// # Complexity
/// Time: O(n·p) where p is the number of partials (small in practice),
/// Space: O(p)
pub fn exact_sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let mut partials: Vec<f64> = Vec::new();

    for mut x in values {
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }

    round_partials(&partials)
}

/// Collapse non-overlapping partials (ascending magnitude) into one `f64`.
fn round_partials(partials: &[f64]) -> f64 {
    let Some((&top, _)) = partials.split_last() else {
        return 0.0;
    };

    let mut hi = top;
    let mut lo = 0.0;
    let mut n = partials.len() - 1;
    while n > 0 {
        n -= 1;
        let x = hi;
        let y = partials[n];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }

    // Half-way case: the discarded tail pushes `lo` past the tie.
    if n > 0 && ((lo < 0.0 && partials[n - 1] < 0.0) || (lo > 0.0 && partials[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }

    hi
}
