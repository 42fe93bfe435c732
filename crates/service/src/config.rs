use std::{fs, path::Path, time::Duration};

use gauss::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::{Error, DEFAULT_MAX_IN_FLIGHT};

/// Service settings, read from JSON. Missing fields take their defaults.
///
/// ```json
/// {
///     "deadline_ms": 10000,
///     "max_in_flight": 64,
///     "solver": {
///         "pivot_tolerance": 1e-10,
///         "rounding": { "Decimals": 12 },
///         "singularity": "AbortOnZeroPivot"
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Deadline applied by the client to each solve call, in milliseconds
    pub deadline_ms: u64,
    /// Solver workers the client lets run at once
    pub max_in_flight: usize,
    pub solver: SolverConfig<f64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            deadline_ms: 10_000,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            solver: SolverConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}
