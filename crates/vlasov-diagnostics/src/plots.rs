// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Diagnostic Plots
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PNG plot routines for stored simulation time series.
//!
//! Each routine writes one fixed-name image into the given directory,
//! overwriting any existing file of the same name. Drawing and
//! file-system failures propagate to the caller.

use ndarray::Array1;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use vlasov_math::fft::fftshift;

/// Field-amplitude history image.
pub const E_VS_TIME_FILE: &str = "E_vs_time.png";
/// Field frequency-spectrum image.
pub const E_VS_FREQUENCY_FILE: &str = "E_vs_frequency.png";
/// Nonlinear frequency-shift image.
pub const NL_SHIFT_FILE: &str = "nl_frequency_shift_vs_time.png";
/// Initial-vs-final distribution snapshot image.
pub const FK0_FILE: &str = "fk0.png";

/// Frequency window shown in the spectrum plot (units of ω_p).
const SPECTRUM_FREQ_WINDOW: (f64, f64) = (-5.0, 5.0);
/// Spectrum y-axis spans [1e-3·max, 1.5·max] of the observed spectrum.
const SPECTRUM_Y_FLOOR_FRAC: f64 = 1e-3;
const SPECTRUM_Y_CEIL_FRAC: f64 = 1.5;
/// Frequency-shift plot is restricted to this index fraction range.
const SHIFT_WINDOW: (f64, f64) = (0.25, 0.7);

/// Padded y-range over a set of series, with fallbacks for empty,
/// non-finite, or flat data.
fn padded_range<'a>(series: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &v in series {
        if v.is_finite() {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if (y_max - y_min).abs() < 1e-30 {
        let delta = if y_max.abs() < 1e-30 {
            1.0
        } else {
            0.1 * y_max.abs()
        };
        return (y_min - delta, y_max + delta);
    }
    let margin = 0.1 * (y_max - y_min);
    (y_min - margin, y_max + margin)
}

/// Fundamental-mode field amplitude vs time.
pub fn plot_field_vs_time(
    plots_dir: &Path,
    t: &[f64],
    e: &[f64],
    title: &str,
) -> Result<(), Box<dyn Error>> {
    if t.is_empty() || e.is_empty() {
        return Ok(());
    }

    let path = plots_dir.join(E_VS_TIME_FILE);
    let root = BitMapBackend::new(&path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = padded_range(e.iter());
    let t_min = *t.first().unwrap();
    let t_max = *t.last().unwrap();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 20))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (1/ω_p)")
        .y_desc("Ê(k=1)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(LineSeries::new(
        t.iter().zip(e.iter()).map(|(&ti, &ei)| (ti, ei)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Temporal spectrum of the fundamental mode, log-scale y, restricted
/// to a fixed frequency window around the plasma frequency.
///
/// `w` and `e_hat` are in the FFT's native ordering; both are shifted
/// here so the spectrum reads left-to-right in frequency.
pub fn plot_field_spectrum(
    plots_dir: &Path,
    w: &Array1<f64>,
    e_hat: &Array1<f64>,
    title: &str,
) -> Result<(), Box<dyn Error>> {
    if w.is_empty() || e_hat.is_empty() {
        return Ok(());
    }
    let peak = e_hat.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() || peak <= 0.0 {
        return Ok(());
    }

    let w_shifted = fftshift(w);
    let e_shifted = fftshift(e_hat);
    let y_lo = SPECTRUM_Y_FLOOR_FRAC * peak;
    let y_hi = SPECTRUM_Y_CEIL_FRAC * peak;
    let (x_lo, x_hi) = SPECTRUM_FREQ_WINDOW;

    let path = plots_dir.join(E_VS_FREQUENCY_FILE);
    let root = BitMapBackend::new(&path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 20))
        .set_left_and_bottom_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Frequency (ω_p)")
        .y_desc("|Ê(k=1)|(ω)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    let in_window = || {
        w_shifted
            .iter()
            .zip(e_shifted.iter())
            .filter(|(&wi, &ei)| wi >= x_lo && wi <= x_hi && ei >= y_lo)
            .map(|(&wi, &ei)| (wi, ei))
    };

    chart.draw_series(LineSeries::new(in_window(), &BLUE))?;
    chart.draw_series(in_window().map(|pt| Cross::new(pt, 3, BLUE.filled())))?;

    root.present()?;
    Ok(())
}

/// Nonlinear frequency shift vs time, restricted to the middle portion
/// of the series where the shift is meaningful.
pub fn plot_frequency_shift(
    plots_dir: &Path,
    t: &[f64],
    shift: &[f64],
    title: &str,
) -> Result<(), Box<dyn Error>> {
    let n = t.len().min(shift.len());
    let lower = (SHIFT_WINDOW.0 * n as f64) as usize;
    let upper = (SHIFT_WINDOW.1 * n as f64) as usize;
    if upper <= lower + 1 {
        return Ok(());
    }

    let t_win = &t[lower..upper];
    let shift_win = &shift[lower..upper];

    let path = plots_dir.join(NL_SHIFT_FILE);
    let root = BitMapBackend::new(&path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = padded_range(shift_win.iter());
    let t_min = *t_win.first().unwrap();
    let t_max = *t_win.last().unwrap();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 20))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (1/ω_p)")
        .y_desc("ΔΦ")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart.draw_series(LineSeries::new(
        t_win
            .iter()
            .zip(shift_win.iter())
            .map(|(&ti, &si)| (ti, si)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Initial vs final spatially-averaged distribution function.
pub fn plot_distribution_snapshot(
    plots_dir: &Path,
    v: &[f64],
    f_initial: &[f64],
    f_final: &[f64],
    title: &str,
) -> Result<(), Box<dyn Error>> {
    if v.is_empty() {
        return Ok(());
    }

    let path = plots_dir.join(FK0_FILE);
    let root = BitMapBackend::new(&path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = padded_range(f_initial.iter().chain(f_final.iter()));
    let v_min = *v.first().unwrap();
    let v_max = *v.last().unwrap();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 20))
        .set_left_and_bottom_label_area_size(50)
        .build_cartesian_2d(v_min..v_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("(v - v_ph) / v_th")
        .y_desc("⟨f⟩(v)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            v.iter().zip(f_initial.iter()).map(|(&vi, &fi)| (vi, fi)),
            &BLUE,
        ))?
        .label("initial")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(
            v.iter().zip(f_final.iter()).map(|(&vi, &fi)| (vi, fi)),
            &RED,
        ))?
        .label("final")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
