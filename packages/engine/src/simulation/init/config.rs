use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::domain::SeedMode;

const DEFAULT_SIDE: u32 = 64;

/// Construction parameters, loadable from JSON.
///
/// ```json
/// { "width": 128, "height": 96, "seed_mode": "random", "seed": 7, "perf_metrics": true }
/// ```
///
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed_mode: SeedMode,
    /// Fixed PRNG seed; `None` draws one from the platform.
    pub seed: Option<u32>,
    pub perf_metrics: bool,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            seed_mode: SeedMode::Random,
            seed: None,
            perf_metrics: false,
        }
    }
}

impl UniverseConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
