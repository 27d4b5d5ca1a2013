//! Advisory lock timing.

use serde::{Deserialize, Serialize};

const fn default_wait_timeout_secs() -> u64 {
    30
}

const fn default_retry_delay_ms() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LockConfig {
    /// How long a writer waits for the lock before giving up.
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,

    /// Delay between acquisition attempts.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            wait_timeout_secs: default_wait_timeout_secs(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}
