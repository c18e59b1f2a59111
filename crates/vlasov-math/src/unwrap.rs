//! Phase unwrapping for angle time series.
//!
//! Matches `numpy.unwrap()` with the default 2π period: consecutive
//! differences larger than π in magnitude are shifted by the multiple
//! of 2π that minimizes them.

use std::f64::consts::{PI, TAU};

/// Unwrap a phase series in place-order, returning the continuous
/// version. An empty or single-element input is returned unchanged.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return out;
    };
    out.push(first);

    let mut correction = 0.0;
    for i in 1..phase.len() {
        let d = phase[i] - phase[i - 1];
        if d > PI {
            correction -= TAU * ((d + PI) / TAU).floor();
        } else if d < -PI {
            correction += TAU * ((-d + PI) / TAU).floor();
        }
        out.push(phase[i] + correction);
    }
    out
}
