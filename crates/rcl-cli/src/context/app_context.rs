use std::path::{Path, PathBuf};

use anyhow::Context;
use rcl_config::RecallConfig;
use rcl_log::ParticipantRegistry;
use rcl_reference::ReferenceData;

/// Shared application resources for one invocation.
///
/// Reference data loads on first use, so registry and log commands run even
/// when a configured reference directory is broken.
pub struct AppContext {
    pub config: RecallConfig,
    reference: Option<ReferenceData>,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: RecallConfig) -> Self {
        Self {
            config,
            reference: None,
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.config.data.dir
    }

    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.config.data.lock_path()
    }

    #[must_use]
    pub fn registry(&self) -> ParticipantRegistry {
        ParticipantRegistry::new(self.config.data.participants_path())
    }

    /// Reference data from `scoring.reference_dir`, or the builtin set.
    pub fn reference(&mut self) -> anyhow::Result<&ReferenceData> {
        if self.reference.is_none() {
            let loaded = load_reference(self.config.scoring.reference_dir.as_deref())?;
            self.reference = Some(loaded);
        }
        self.reference
            .as_ref()
            .context("reference data was not loaded")
    }
}

/// Load validated reference data from `dir`, or the builtin set when unset.
pub fn load_reference(dir: Option<&Path>) -> anyhow::Result<ReferenceData> {
    match dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading reference data");
            ReferenceData::from_dir(dir)
                .with_context(|| format!("failed to load reference data from {}", dir.display()))
        }
        None => ReferenceData::builtin().context("builtin reference data is invalid"),
    }
}
