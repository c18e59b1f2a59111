//! Trapezoidal quadrature over uniformly spaced samples.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Trapezoidal rule with uniform spacing dx.
///
/// Callers guarantee `y.len() >= 2` and `dx > 0`; the rule is undefined
/// for a single sample.
pub fn trapezoid(y: ArrayView1<f64>, dx: f64) -> f64 {
    let n = y.len();
    debug_assert!(n >= 2, "trapezoid needs at least 2 samples");

    let mut acc = 0.5 * (y[0] + y[n - 1]);
    for i in 1..n - 1 {
        acc += y[i];
    }
    acc * dx
}

/// Trapezoidal rule applied independently to each row of a 2D array.
/// Returns one integral per row.
pub fn trapezoid_rows(f: ArrayView2<f64>, dx: f64) -> Array1<f64> {
    Array1::from_iter(f.rows().into_iter().map(|row| trapezoid(row, dx)))
}
