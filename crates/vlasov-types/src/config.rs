// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub simulation_name: String,
    /// [nx, nv]
    pub grid_resolution: [usize; 2],
    pub dimensions: PhaseSpaceDimensions,
    /// Optional external wave driver. When absent, the field is purely
    /// self-consistent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverConfig>,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseSpaceDimensions {
    pub x_min: f64,
    pub x_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

/// External wave-driver parameters (antenna term added on top of the
/// self-consistent field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Peak field amplitude.
    pub amplitude: f64,
    /// Driven spatial wavenumber k0.
    pub wavenumber: f64,
    /// Drive frequency w0 (units of plasma frequency).
    pub frequency: f64,
    /// Pulse start time (default: 0).
    #[serde(default)]
    pub t_start: f64,
    /// Linear rise duration (default: 5).
    #[serde(default = "default_t_rise")]
    pub t_rise: f64,
    /// Flat-top duration (default: 10).
    #[serde(default = "default_t_flat")]
    pub t_flat: f64,
    /// Linear fall duration (default: 5).
    #[serde(default = "default_t_fall")]
    pub t_fall: f64,
}

fn default_t_rise() -> f64 {
    5.0
}
fn default_t_flat() -> f64 {
    10.0
}
fn default_t_fall() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for long-term artifacts; plots land under
    /// `<long_term_root>/plots/<timestamp>/`.
    pub long_term_root: String,
}

impl SimulationConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> crate::error::VlasovResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Create a PhaseSpaceGrid from this config's dimensions and
    /// resolution, with the default DC gauge.
    pub fn create_grid(&self) -> crate::state::PhaseSpaceGrid {
        crate::state::PhaseSpaceGrid::new(
            self.grid_resolution[0],
            self.grid_resolution[1],
            self.dimensions.x_min,
            self.dimensions.x_max,
            self.dimensions.v_min,
            self.dimensions.v_max,
        )
    }
}
