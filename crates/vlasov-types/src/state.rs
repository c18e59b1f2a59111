// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use std::f64::consts::TAU;

use crate::constants::DEFAULT_ZERO_MODE_RECIPROCAL;

/// 1D-1V phase-space grid with precomputed spectral axes.
///
/// The spatial axis is periodic: `x` holds `nx` points with the right
/// endpoint excluded, so `x[0] = x_min` and `x[nx-1] = x_max - dx`.
/// The velocity axis is a closed interval: `v[0] = v_min`,
/// `v[nv-1] = v_max`.
#[derive(Debug, Clone)]
pub struct PhaseSpaceGrid {
    pub nx: usize,
    pub nv: usize,
    /// Spatial coordinates [nx], periodic.
    pub x: Array1<f64>,
    /// Velocity coordinates [nv].
    pub v: Array1<f64>,
    /// Spatial spacing.
    pub dx: f64,
    /// Velocity spacing.
    pub dv: f64,
    /// Spatial wavenumbers [nx] in the FFT's native mode ordering
    /// (non-negative modes first, then negative modes).
    pub kx: Array1<f64>,
    /// Reciprocal wavenumbers [nx], same ordering as `kx`. The DC entry
    /// holds the `zero_mode_reciprocal` the grid was built with, never
    /// an infinity.
    pub one_over_kx: Array1<f64>,
}

impl PhaseSpaceGrid {
    /// Create a grid with the DC reciprocal gauge-fixed to the default
    /// (zero: no net DC field in a periodic neutral plasma).
    pub fn new(nx: usize, nv: usize, x_min: f64, x_max: f64, v_min: f64, v_max: f64) -> Self {
        Self::with_zero_mode(
            nx,
            nv,
            x_min,
            x_max,
            v_min,
            v_max,
            DEFAULT_ZERO_MODE_RECIPROCAL,
        )
    }

    /// Create a grid with an explicit reciprocal value for the zero
    /// (DC) spatial mode. The solver multiplies every spectral mode by
    /// its reciprocal wavenumber, so whatever is supplied here decides
    /// the fate of the DC field component.
    pub fn with_zero_mode(
        nx: usize,
        nv: usize,
        x_min: f64,
        x_max: f64,
        v_min: f64,
        v_max: f64,
        zero_mode_reciprocal: f64,
    ) -> Self {
        let length = x_max - x_min;
        let dx = if nx > 0 { length / nx as f64 } else { length };
        let x = Array1::from_shape_fn(nx, |i| x_min + i as f64 * dx);

        let dv = if nv > 1 {
            (v_max - v_min) / (nv - 1) as f64
        } else {
            v_max - v_min
        };
        let v = Array1::from_shape_fn(nv, |i| v_min + i as f64 * dv);

        // Native FFT mode ordering: 0, 1, ..., then the negative modes.
        // Even nx puts the Nyquist mode on the negative side.
        let kx = Array1::from_shape_fn(nx, |i| {
            let m = if i <= (nx - 1) / 2 {
                i as f64
            } else {
                i as f64 - nx as f64
            };
            TAU * m / length
        });
        let one_over_kx = kx.mapv(|k| {
            if k == 0.0 {
                zero_mode_reciprocal
            } else {
                1.0 / k
            }
        });

        PhaseSpaceGrid {
            nx,
            nv,
            x,
            v,
            dx,
            dv,
            kx,
            one_over_kx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_periodic_x_excludes_endpoint() {
        let grid = PhaseSpaceGrid::new(64, 8, 0.0, 2.0 * PI, -6.0, 6.0);
        assert_eq!(grid.x.len(), 64);
        assert!((grid.x[0] - 0.0).abs() < 1e-15);
        assert!(
            (grid.x[63] - (2.0 * PI - grid.dx)).abs() < 1e-12,
            "last x should be x_max - dx, got {}",
            grid.x[63]
        );
        assert!((grid.dx - 2.0 * PI / 64.0).abs() < 1e-15);
    }

    #[test]
    fn test_velocity_axis_includes_endpoints() {
        let grid = PhaseSpaceGrid::new(16, 101, 0.0, 1.0, -6.0, 6.0);
        assert!((grid.v[0] - (-6.0)).abs() < 1e-12);
        assert!((grid.v[100] - 6.0).abs() < 1e-12);
        assert!((grid.dv - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_wavenumber_layout_even() {
        // L = 2π so mode m has kx = m exactly.
        let grid = PhaseSpaceGrid::new(8, 4, 0.0, 2.0 * PI, -1.0, 1.0);
        let expected = [0.0, 1.0, 2.0, 3.0, -4.0, -3.0, -2.0, -1.0];
        for (i, &e) in expected.iter().enumerate() {
            assert!(
                (grid.kx[i] - e).abs() < 1e-12,
                "kx[{i}] = {}, expected {e}",
                grid.kx[i]
            );
        }
    }

    #[test]
    fn test_wavenumber_layout_odd() {
        let grid = PhaseSpaceGrid::new(7, 4, 0.0, 2.0 * PI, -1.0, 1.0);
        let expected = [0.0, 1.0, 2.0, 3.0, -3.0, -2.0, -1.0];
        for (i, &e) in expected.iter().enumerate() {
            assert!(
                (grid.kx[i] - e).abs() < 1e-12,
                "kx[{i}] = {}, expected {e}",
                grid.kx[i]
            );
        }
    }

    #[test]
    fn test_zero_mode_reciprocal_default() {
        let grid = PhaseSpaceGrid::new(32, 4, 0.0, 2.0 * PI, -1.0, 1.0);
        assert_eq!(grid.one_over_kx[0], 0.0);
        // Every other entry is a genuine reciprocal.
        for i in 1..32 {
            assert!(
                (grid.one_over_kx[i] * grid.kx[i] - 1.0).abs() < 1e-12,
                "one_over_kx[{i}] is not the reciprocal of kx[{i}]"
            );
        }
    }

    #[test]
    fn test_zero_mode_reciprocal_explicit() {
        let grid = PhaseSpaceGrid::with_zero_mode(32, 4, 0.0, 2.0 * PI, -1.0, 1.0, 7.5);
        assert_eq!(grid.one_over_kx[0], 7.5);
    }
}
