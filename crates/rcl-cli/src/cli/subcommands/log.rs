use clap::Subcommand;

/// Event log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// Append one row to a participant log.
    Append {
        /// Participant ID (P078) or path to a log file
        participant: String,
        /// Phase label written to the `phase` column
        phase: String,
        /// Row values as KEY=VALUE, in column order
        fields: Vec<String>,
    },
}
