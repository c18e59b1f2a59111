// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Field Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spectral electric-field solver for the 1D-1V Vlasov-Poisson system.
//!
//! The electron charge density is the velocity moment of the
//! distribution function; the field follows from Poisson's equation
//! solved in Fourier space over the periodic spatial axis,
//! E(k) = i·ρ_net(k)/k, with the sign convention carried by the
//! supplied reciprocal-wavenumber axis.
//!
//! References:
//! - Cheng & Knorr, J. Comput. Phys. 22, 330 (1976)
//! - Birdsall & Langdon, "Plasma Physics via Computer Simulation", Ch. 2

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use vlasov_math::fft::{fft, ifft_real};
use vlasov_math::integrate::trapezoid_rows;
use vlasov_types::constants::ION_BACKGROUND_DENSITY;
use vlasov_types::error::{VlasovError, VlasovResult};

/// Electron charge density: the velocity moment of the distribution
/// function, taken with the trapezoidal rule independently at each
/// spatial point.
///
/// `f` has shape (nx, nv), axes = space then velocity; `dv` is the
/// uniform velocity spacing. Errors on a degenerate velocity grid
/// (`dv <= 0` or fewer than 2 samples) — the trapezoidal rule is
/// undefined there.
pub fn compute_charge_density(f: &Array2<f64>, dv: f64) -> VlasovResult<Array1<f64>> {
    if !(dv > 0.0) {
        return Err(VlasovError::DegenerateGrid(format!(
            "velocity spacing must be positive, got {dv}"
        )));
    }
    let (_, nv) = f.dim();
    if nv < 2 {
        return Err(VlasovError::DegenerateGrid(format!(
            "trapezoidal moment needs at least 2 velocity samples, got {nv}"
        )));
    }
    Ok(trapezoid_rows(f.view(), dv))
}

/// Self-consistent electric field for a given electron charge density.
///
/// Net charge is `1 - rho` (fixed neutralizing ion background), the
/// Poisson solve happens in Fourier space: each spectral mode is
/// multiplied by `i·one_over_kx[mode]`, and the real part of the
/// inverse transform is the field. Periodic boundary conditions are
/// implied by the spectral method.
///
/// `one_over_kx` must use the FFT's native mode ordering and carry a
/// finite DC entry; the solver trusts it as supplied (see
/// `PhaseSpaceGrid::with_zero_mode`).
pub fn solve_for_field(
    charge_density: &Array1<f64>,
    one_over_kx: &Array1<f64>,
) -> VlasovResult<Array1<f64>> {
    if one_over_kx.len() != charge_density.len() {
        return Err(VlasovError::ShapeMismatch {
            expected: charge_density.len(),
            actual: one_over_kx.len(),
            context: "reciprocal-wavenumber axis vs charge density",
        });
    }

    let net_charge = charge_density.mapv(|rho| ION_BACKGROUND_DENSITY - rho);
    let mut spectrum = fft(&net_charge);
    for (c, &inv_k) in spectrum.iter_mut().zip(one_over_kx.iter()) {
        *c *= Complex64::new(0.0, inv_k);
    }
    Ok(ifft_real(&spectrum))
}

/// Total electric field: the self-consistent solve for the given
/// distribution function plus the externally imposed driver field,
/// elementwise.
///
/// Pure function; no input is mutated. Errors if `driver_field` does
/// not match the spatial grid size of `f`.
pub fn get_total_electric_field(
    driver_field: &Array1<f64>,
    f: &Array2<f64>,
    dv: f64,
    one_over_kx: &Array1<f64>,
) -> VlasovResult<Array1<f64>> {
    let nx = f.nrows();
    if driver_field.len() != nx {
        return Err(VlasovError::ShapeMismatch {
            expected: nx,
            actual: driver_field.len(),
            context: "driver field vs spatial grid",
        });
    }

    let charge_density = compute_charge_density(f, dv)?;
    let solved = solve_for_field(&charge_density, one_over_kx)?;
    Ok(driver_field + &solved)
}

/// Electrostatic field energy ∫ E²/2 dx over the periodic domain.
pub fn field_energy(e: &Array1<f64>, dx: f64) -> f64 {
    0.5 * dx * e.iter().map(|v| v * v).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlasov_types::state::PhaseSpaceGrid;

    const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

    fn test_grid(nx: usize, nv: usize) -> PhaseSpaceGrid {
        // L = 2π so spatial mode m has kx = m exactly.
        PhaseSpaceGrid::new(nx, nv, 0.0, TWO_PI, -6.0, 6.0)
    }

    #[test]
    fn test_uniform_distribution_zero_field() {
        let grid = test_grid(32, 65);
        // Constant f whose velocity integral is exactly 1 everywhere.
        let value = 1.0 / (grid.dv * (grid.nv - 1) as f64);
        let f = Array2::from_elem((grid.nx, grid.nv), value);

        let rho = compute_charge_density(&f, grid.dv).unwrap();
        for &r in rho.iter() {
            assert!((r - 1.0).abs() < 1e-12, "uniform rho should be 1, got {r}");
        }

        let e = solve_for_field(&rho, &grid.one_over_kx).unwrap();
        for (i, &v) in e.iter().enumerate() {
            assert!(v.abs() < 1e-12, "field should vanish, E[{i}] = {v}");
        }
    }

    #[test]
    fn test_single_mode_sinusoid_phase_and_amplitude() {
        let grid = test_grid(64, 5);
        let mode = 3usize;
        let eps = 0.01;
        // rho = 1 - eps·cos(m x)  →  net charge = eps·cos(m x)
        let rho = grid.x.mapv(|x| 1.0 - eps * (mode as f64 * x).cos());

        let e = solve_for_field(&rho, &grid.one_over_kx).unwrap();

        // E = -eps·(1/k_m)·sin(m x): same mode, 90° phase shift,
        // amplitude scaled by the reciprocal wavenumber.
        let inv_k = grid.one_over_kx[mode];
        for (i, &x) in grid.x.iter().enumerate() {
            let expected = -eps * inv_k * (mode as f64 * x).sin();
            assert!(
                (e[i] - expected).abs() < 1e-10,
                "E[{i}] = {}, expected {expected}",
                e[i]
            );
        }
    }

    #[test]
    fn test_zero_driver_matches_bare_solve() {
        let grid = test_grid(32, 33);
        let f = Array2::from_shape_fn((grid.nx, grid.nv), |(i, j)| {
            let x = grid.x[i];
            let v = grid.v[j];
            (1.0 + 0.05 * x.cos()) * (-v * v / 2.0).exp()
        });
        let zero_driver = Array1::zeros(grid.nx);

        let total = get_total_electric_field(&zero_driver, &f, grid.dv, &grid.one_over_kx).unwrap();
        let rho = compute_charge_density(&f, grid.dv).unwrap();
        let bare = solve_for_field(&rho, &grid.one_over_kx).unwrap();

        for i in 0..grid.nx {
            assert_eq!(total[i], bare[i], "adding a zero driver must be exact");
        }
    }

    #[test]
    fn test_constant_driver_adds_elementwise() {
        let grid = test_grid(16, 17);
        let f = Array2::from_shape_fn((grid.nx, grid.nv), |(i, j)| {
            (1.0 + 0.1 * grid.x[i].sin()) * (-grid.v[j] * grid.v[j]).exp()
        });
        let driver = Array1::from_elem(grid.nx, 0.25);
        let zero = Array1::zeros(grid.nx);

        let with_driver =
            get_total_electric_field(&driver, &f, grid.dv, &grid.one_over_kx).unwrap();
        let without = get_total_electric_field(&zero, &f, grid.dv, &grid.one_over_kx).unwrap();

        for i in 0..grid.nx {
            assert!(
                (with_driver[i] - without[i] - 0.25).abs() < 1e-14,
                "driver not added elementwise at {i}"
            );
        }
    }

    #[test]
    fn test_charge_density_constant_analytic() {
        // f ≡ c in velocity → moment = c·(v_max - v_min) exactly.
        let grid = test_grid(8, 129);
        let f = Array2::from_elem((grid.nx, grid.nv), 0.3);
        let rho = compute_charge_density(&f, grid.dv).unwrap();
        let expected = 0.3 * 12.0;
        for &r in rho.iter() {
            assert!((r - expected).abs() < 1e-10, "moment {r} vs {expected}");
        }
    }

    #[test]
    fn test_driver_shape_mismatch_errors() {
        let grid = test_grid(16, 9);
        let f = Array2::zeros((grid.nx, grid.nv));
        let bad_driver = Array1::zeros(grid.nx + 1);

        let err = get_total_electric_field(&bad_driver, &f, grid.dv, &grid.one_over_kx)
            .expect_err("mismatched driver must fail");
        match err {
            VlasovError::ShapeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 17);
            }
            other => panic!("wrong error variant: {other}"),
        }
    }

    #[test]
    fn test_wavenumber_axis_shape_mismatch_errors() {
        let rho = Array1::from_elem(16, 1.0);
        let short_axis = Array1::zeros(8);
        assert!(matches!(
            solve_for_field(&rho, &short_axis),
            Err(VlasovError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_degenerate_velocity_grid_errors() {
        let f = Array2::zeros((8, 1));
        assert!(matches!(
            compute_charge_density(&f, 0.1),
            Err(VlasovError::DegenerateGrid(_))
        ));

        let f = Array2::zeros((8, 16));
        assert!(matches!(
            compute_charge_density(&f, 0.0),
            Err(VlasovError::DegenerateGrid(_))
        ));
        assert!(matches!(
            compute_charge_density(&f, -1.0),
            Err(VlasovError::DegenerateGrid(_))
        ));
    }

    #[test]
    fn test_field_energy() {
        let e = Array1::from_elem(10, 2.0);
        assert!((field_energy(&e, 0.5) - 0.5 * 0.5 * 40.0).abs() < 1e-12);
        assert_eq!(field_energy(&Array1::zeros(10), 0.5), 0.0);
    }
}
