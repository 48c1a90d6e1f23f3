//! Passkey access grant configuration.

use serde::{Deserialize, Serialize};

/// Settings for the passkey access grant protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// How long a passkey (and its notification) stays valid, in minutes.
    #[serde(default = "default_passkey_ttl")]
    pub passkey_ttl_minutes: i64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            passkey_ttl_minutes: default_passkey_ttl(),
        }
    }
}

fn default_passkey_ttl() -> i64 {
    30
}
