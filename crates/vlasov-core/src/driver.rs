// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Wave Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Externally imposed wave driver (antenna term).
//!
//! Produces the `driver_field` added on top of the self-consistent
//! solve: a traveling wave `a(t)·sin(k0·x − w0·t)` with a trapezoidal
//! envelope (linear rise, flat top, linear fall).

use ndarray::Array1;
use vlasov_types::config::DriverConfig;

/// A single driven wave with a trapezoidal pulse envelope.
#[derive(Debug, Clone)]
pub struct WaveDriver {
    /// Peak field amplitude.
    pub amplitude: f64,
    /// Driven spatial wavenumber k0.
    pub wavenumber: f64,
    /// Drive frequency w0.
    pub frequency: f64,
    /// Pulse start time.
    pub t_start: f64,
    /// Linear rise duration.
    pub t_rise: f64,
    /// Flat-top duration.
    pub t_flat: f64,
    /// Linear fall duration.
    pub t_fall: f64,
}

impl WaveDriver {
    pub fn from_config(cfg: &DriverConfig) -> Self {
        WaveDriver {
            amplitude: cfg.amplitude,
            wavenumber: cfg.wavenumber,
            frequency: cfg.frequency,
            t_start: cfg.t_start,
            t_rise: cfg.t_rise,
            t_flat: cfg.t_flat,
            t_fall: cfg.t_fall,
        }
    }

    /// Pulse envelope in [0, 1]: zero outside the pulse, continuous
    /// everywhere. A non-positive rise or fall duration degenerates to
    /// a step at that edge.
    pub fn envelope(&self, t: f64) -> f64 {
        let tau = t - self.t_start;
        if tau < 0.0 {
            return 0.0;
        }
        if tau < self.t_rise {
            return tau / self.t_rise;
        }
        let after_rise = tau - self.t_rise;
        if after_rise < self.t_flat {
            return 1.0;
        }
        let after_flat = after_rise - self.t_flat;
        if after_flat < self.t_fall {
            return 1.0 - after_flat / self.t_fall;
        }
        0.0
    }

    /// Driver field on the spatial axis at time t.
    pub fn field_at(&self, t: f64, x: &Array1<f64>) -> Array1<f64> {
        let a = self.amplitude * self.envelope(t);
        if a == 0.0 {
            return Array1::zeros(x.len());
        }
        x.mapv(|xi| a * (self.wavenumber * xi - self.frequency * t).sin())
    }
}
