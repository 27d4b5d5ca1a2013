use std::path::{Path, PathBuf};

use anyhow::Context;
use rcl_config::RecallConfig;

use crate::cli::GlobalFlags;

/// Load `.env` files, then layered config, then apply `--data-dir`.
///
/// A `.env` inside the `--data-dir` directory is read first; dotenv never
/// overrides a variable that is already set, so it takes precedence over the
/// one found from the current directory.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RecallConfig> {
    if let Some(dir) = &flags.data_dir {
        load_data_dir_dotenv(Path::new(dir))?;
    }

    let mut config =
        RecallConfig::load_with_dotenv().context("failed to load recall configuration")?;
    if let Some(dir) = &flags.data_dir {
        config.data.dir = PathBuf::from(dir);
    }
    tracing::debug!(data_dir = %config.data.dir.display(), "configuration loaded");
    Ok(config)
}

fn load_data_dir_dotenv(data_dir: &Path) -> anyhow::Result<()> {
    let env_path = data_dir.join(".env");
    if env_path.is_file() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
