// numeric tolerances and run settings

use crate::error::{QuantumError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tolerance for normalization checks (`is_normalized`).
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Tolerance for unitarity checks on gate matrices.
pub const UNITARITY_TOLERANCE: f64 = 1e-9;

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_unitarity_tolerance() -> f64 {
    UNITARITY_TOLERANCE
}

/// Run settings, loadable from a JSON file. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_unitarity_tolerance")]
    pub unitarity_tolerance: f64,
    /// Measurement shots to sample after a run; none skips sampling.
    #[serde(default)]
    pub shots: Option<usize>,
    // none means seed from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            tolerance: DEFAULT_TOLERANCE,
            unitarity_tolerance: UNITARITY_TOLERANCE,
            shots: None,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(QuantumError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.unitarity_tolerance > 0.0 && self.unitarity_tolerance.is_finite()) {
            return Err(QuantumError::Config(format!(
                "unitarity_tolerance must be positive, got {}",
                self.unitarity_tolerance
            )));
        }
        Ok(())
    }
}
