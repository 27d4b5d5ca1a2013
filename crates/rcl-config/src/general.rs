//! Output defaults shared by every command.

use serde::{Deserialize, Serialize};

const fn default_row_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows shown by `rcl participant list` when `--limit` is not given.
    #[serde(default = "default_row_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_row_limit(),
        }
    }
}
