use std::path::PathBuf;

use clap::Subcommand;

/// Answer-key commands.
#[derive(Clone, Debug, Subcommand)]
pub enum KeyCommands {
    /// Propose key edits that explain externally reported scores.
    Search {
        /// CSV with `participant_id,score` columns
        #[arg(long)]
        targets: PathBuf,
        #[arg(long)]
        revision: Option<String>,
        #[arg(long)]
        dedup: Option<String>,
        #[arg(long, default_value_t = 100)]
        max_iterations: u32,
    },
}
