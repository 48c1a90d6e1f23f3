//! Background sweeper configuration.

use serde::{Deserialize, Serialize};

/// Settings for the expiry sweeper.
///
/// The sweeper is storage hygiene only; expiry is enforced lazily at
/// verification time and never depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the sweeper runs at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Seconds between sweep passes.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_sweep_interval() -> u64 {
    300
}
