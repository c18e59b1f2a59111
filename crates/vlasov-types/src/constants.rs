// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Ion background density in normalized units. The ions form a fixed
/// neutralizing background, so the net charge entering the Poisson solve
/// is `ION_BACKGROUND_DENSITY - rho_electron`.
pub const ION_BACKGROUND_DENSITY: f64 = 1.0;

/// Reciprocal wavenumber assigned to the zero (DC) spatial mode.
/// A periodic, quasi-neutral plasma carries no net DC field, so the
/// DC mode is gauge-fixed to zero by zeroing its reciprocal.
pub const DEFAULT_ZERO_MODE_RECIPROCAL: f64 = 0.0;

/// Electron plasma frequency in normalized units. Time is measured
/// in units of its inverse.
pub const PLASMA_FREQUENCY: f64 = 1.0;

/// Thermal velocity in normalized units. Velocity axes are measured
/// in units of v_th.
pub const THERMAL_VELOCITY: f64 = 1.0;
