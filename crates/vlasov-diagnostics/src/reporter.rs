// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Diagnostic Reporter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Output-directory owner for diagnostic plots.
//!
//! Each reporter instance owns one timestamped run directory,
//! `<long_term_root>/plots/<YYYYmmdd-HHMMSS>/`, with a `health/`
//! subdirectory reserved for health-metric plots.

use chrono::Local;
use ndarray::Array1;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::plots;

/// Writes diagnostic plots into a timestamped directory tree.
#[derive(Debug, Clone)]
pub struct DiagnosticReporter {
    plots_dir: PathBuf,
    health_dir: PathBuf,
}

impl DiagnosticReporter {
    /// Create `<root>/plots/<timestamp>/` and its `health/`
    /// subdirectory. Creation is idempotent; existing directories are
    /// reused.
    pub fn new(long_term_root: &Path) -> io::Result<Self> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
        Self::at_timestamp(long_term_root, &stamp)
    }

    /// Like `new`, with an explicit timestamp label.
    pub fn at_timestamp(long_term_root: &Path, stamp: &str) -> io::Result<Self> {
        let plots_dir = long_term_root.join("plots").join(stamp);
        let health_dir = plots_dir.join("health");
        fs::create_dir_all(&health_dir)?;
        Ok(DiagnosticReporter {
            plots_dir,
            health_dir,
        })
    }

    pub fn plots_dir(&self) -> &Path {
        &self.plots_dir
    }

    pub fn health_dir(&self) -> &Path {
        &self.health_dir
    }

    /// Field-amplitude history → `E_vs_time.png`.
    pub fn report_field_vs_time(
        &self,
        t: &[f64],
        e: &[f64],
        title: &str,
    ) -> Result<(), Box<dyn Error>> {
        plots::plot_field_vs_time(&self.plots_dir, t, e, title)
    }

    /// Temporal spectrum → `E_vs_frequency.png`.
    pub fn report_field_spectrum(
        &self,
        w: &Array1<f64>,
        e_hat: &Array1<f64>,
        title: &str,
    ) -> Result<(), Box<dyn Error>> {
        plots::plot_field_spectrum(&self.plots_dir, w, e_hat, title)
    }

    /// Nonlinear frequency shift → `nl_frequency_shift_vs_time.png`.
    pub fn report_frequency_shift(
        &self,
        t: &[f64],
        shift: &[f64],
        title: &str,
    ) -> Result<(), Box<dyn Error>> {
        plots::plot_frequency_shift(&self.plots_dir, t, shift, title)
    }

    /// Initial-vs-final distribution snapshot → `fk0.png`.
    pub fn report_distribution_snapshot(
        &self,
        v: &[f64],
        f_initial: &[f64],
        f_final: &[f64],
        title: &str,
    ) -> Result<(), Box<dyn Error>> {
        plots::plot_distribution_snapshot(&self.plots_dir, v, f_initial, f_final, title)
    }

    /// Health-metric plotting is disabled: this is a deliberate no-op
    /// kept so the call site and the `health/` directory survive until
    /// the metric plots are reinstated.
    pub fn plot_health(&self, _metrics: &HashMap<String, Vec<f64>>) {}
}
