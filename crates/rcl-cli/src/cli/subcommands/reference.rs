use clap::Subcommand;

/// Reference data commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReferenceCommands {
    /// List articles.
    Articles,
    /// Show one article's questions with keys and source types.
    Questions {
        article: String,
        #[arg(long)]
        revision: Option<String>,
    },
    /// Check reference data consistency.
    Validate,
}
