use clap::Subcommand;

/// Participant registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ParticipantCommands {
    /// Allocate the next participant ID.
    New {
        #[arg(long, default_value = "")]
        name: String,
    },
    /// List registered participants.
    List,
}
