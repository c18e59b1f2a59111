//! 1D FFT wrappers around rustfft.
//!
//! Convention matches numpy:
//! - Forward FFT (fft, fft_complex): unnormalized
//! - Inverse FFT (ifft_real): normalized by 1/n
//! - fftfreq/fftshift: native mode ordering, shift moves DC to the center

use ndarray::Array1;
use num_complex::Complex64;
use rustfft::FftPlanner;

/// Forward 1D FFT of a real signal. Matches `numpy.fft.fft()`.
///
/// numpy does NOT normalize on forward FFT.
pub fn fft(input: &Array1<f64>) -> Array1<Complex64> {
    let n = input.len();
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(n);

    let mut data: Vec<Complex64> = input.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    plan.process(&mut data);
    Array1::from_vec(data)
}

/// Forward 1D FFT of a complex signal, unnormalized.
pub fn fft_complex(input: &Array1<Complex64>) -> Array1<Complex64> {
    let n = input.len();
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_forward(n);

    let mut data = input.to_vec();
    plan.process(&mut data);
    Array1::from_vec(data)
}

/// Inverse 1D FFT returning the real part. Matches `numpy.fft.ifft()`
/// followed by `numpy.real()`.
///
/// Applies 1/n normalization; the imaginary residue of a spectrum with
/// conjugate symmetry is round-off and is discarded.
pub fn ifft_real(input: &Array1<Complex64>) -> Array1<f64> {
    let n = input.len();
    let mut planner = FftPlanner::new();
    let plan = planner.plan_fft_inverse(n);
    let norm = 1.0 / n as f64;

    let mut data = input.to_vec();
    plan.process(&mut data);
    Array1::from_iter(data.into_iter().map(|c| c.re * norm))
}

/// Sample frequencies for an n-point transform with sample spacing d.
/// Matches `numpy.fft.fftfreq()`: non-negative modes first, the even-n
/// Nyquist mode counted as negative.
pub fn fftfreq(n: usize, d: f64) -> Array1<f64> {
    let nf = n as f64;
    Array1::from_shape_fn(n, |i| {
        let m = if i <= (n - 1) / 2 {
            i as f64
        } else {
            i as f64 - nf
        };
        m / (nf * d)
    })
}

/// Reorder a spectrum so the DC mode sits at the center. Matches
/// `numpy.fft.fftshift()` for both even and odd lengths.
pub fn fftshift(input: &Array1<f64>) -> Array1<f64> {
    let n = input.len();
    let half = (n + 1) / 2;
    let mut out = Vec::with_capacity(n);
    out.extend(input.iter().skip(half).cloned());
    out.extend(input.iter().take(half).cloned());
    Array1::from_vec(out)
}
