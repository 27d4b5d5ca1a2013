//! Experiment data directory layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from("experiment_data")
}

fn default_participants_file() -> String {
    "participants.csv".into()
}

fn default_lock_file() -> String {
    ".recall.lock".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding participant logs and the participant registry.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Registry file name, relative to `dir`.
    #[serde(default = "default_participants_file")]
    pub participants_file: String,

    /// Advisory lock file name, relative to `dir`.
    #[serde(default = "default_lock_file")]
    pub lock_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            participants_file: default_participants_file(),
            lock_file: default_lock_file(),
        }
    }
}

impl DataConfig {
    #[must_use]
    pub fn participants_path(&self) -> PathBuf {
        self.dir.join(&self.participants_file)
    }

    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.dir.join(&self.lock_file)
    }

    /// Path of a log file name inside the data directory.
    #[must_use]
    pub fn log_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(file_name)
    }
}
