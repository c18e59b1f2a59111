// ─────────────────────────────────────────────────────────────────────
// SCPN Vlasov Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VlasovError {
    #[error("Shape mismatch ({context}): expected length {expected}, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    #[error("Degenerate grid: {0}")]
    DegenerateGrid(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VlasovResult<T> = Result<T, VlasovError>;
