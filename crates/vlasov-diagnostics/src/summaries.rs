// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Diagnostic Summaries
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Time-series summaries of stored field snapshots.
//!
//! The plots track the fundamental spatial mode of the electric field:
//! its amplitude over time, its temporal frequency content, and the
//! deviation of its phase from the driven linear response.

use ndarray::Array1;
use num_complex::Complex64;

use vlasov_math::fft::{fft, fft_complex, fftfreq};
use vlasov_math::unwrap::unwrap_phase;

use std::f64::consts::TAU;

/// Complex amplitude of the fundamental (k = 1) spatial mode of a
/// field snapshot, scaled by 2/nx so a unit-amplitude sinusoid reports
/// amplitude 1. The snapshot must have at least 2 points.
pub fn fundamental_mode(e: &Array1<f64>) -> Complex64 {
    let spectrum = fft(e);
    spectrum[1] * 2.0 / e.len() as f64
}

/// Fundamental-mode complex amplitude for every row of a stored
/// (time, space) field history.
pub fn fundamental_mode_series(e_history: &[Array1<f64>]) -> Vec<Complex64> {
    e_history.iter().map(fundamental_mode).collect()
}

/// Angular-frequency axis for an nt-point time series sampled at dt,
/// in the FFT's native mode ordering.
pub fn frequency_axis(nt: usize, dt: f64) -> Array1<f64> {
    fftfreq(nt, dt).mapv(|f| TAU * f)
}

/// Magnitude of the temporal spectrum of a complex mode-amplitude
/// series, same ordering as `frequency_axis`.
pub fn magnitude_spectrum(series: &[Complex64]) -> Array1<f64> {
    let input = Array1::from_vec(series.to_vec());
    fft_complex(&input).mapv(|c| c.norm())
}

/// Deviation of the fundamental-mode phase from the driven linear
/// response: Δφ(t) = unwrap(arg ê₁(t)) + w0·t. A flat series means the
/// mode oscillates at exactly the drive frequency; a drift is the
/// nonlinear frequency shift.
pub fn frequency_shift_series(series: &[Complex64], t: &[f64], w0: f64) -> Vec<f64> {
    let phase: Vec<f64> = series.iter().map(|c| c.arg()).collect();
    unwrap_phase(&phase)
        .iter()
        .zip(t.iter())
        .map(|(&phi, &ti)| phi + w0 * ti)
        .collect()
}

/// Spatially averaged distribution function: the mean over the spatial
/// axis of an (nx, nv) snapshot, one value per velocity point.
pub fn spatial_average(f: &ndarray::Array2<f64>) -> Array1<f64> {
    let nx = f.nrows() as f64;
    f.sum_axis(ndarray::Axis(0)) / nx
}
