use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{KeyCommands, LogCommands, ParticipantCommands, ReferenceCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Score one participant's quiz responses.
    Metrics(ScoreArgs),
    /// Full per-article report for one participant.
    Analyze(ScoreArgs),
    /// Decode a participant log into named records.
    Parse(ParseArgs),
    /// Long-format dataset over every log in the data directory.
    Dataset(DatasetArgs),
    /// Participant registry.
    Participant {
        #[command(subcommand)]
        action: ParticipantCommands,
    },
    /// Participant event logs.
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },
    /// Answer-key diagnostics.
    Key {
        #[command(subcommand)]
        action: KeyCommands,
    },
    /// Inspect articles and quizzes.
    Reference {
        #[command(subcommand)]
        action: ReferenceCommands,
    },
    /// Print a JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

/// Revision and duplicate handling shared by scoring commands.
#[derive(Clone, Debug, Default, Args)]
pub struct ScoringArgs {
    /// Quiz revision (v1, v2); detected from the log when omitted
    #[arg(long)]
    pub revision: Option<String>,

    /// Duplicate MCQ policy (keep-first, keep-last)
    #[arg(long)]
    pub dedup: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ScoreArgs {
    /// Participant ID (P078) or path to a log file
    pub participant: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// Participant ID (P078) or path to a log file
    pub participant: String,

    /// Duplicate MCQ policy (keep-first, keep-last)
    #[arg(long)]
    pub dedup: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DatasetArgs {
    /// Write CSV here instead of printing rows
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (see `rcl schema` for the list)
    pub name: Option<String>,
}
