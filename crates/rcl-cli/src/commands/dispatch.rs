use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Metrics(args) => commands::metrics::handle(&args, ctx, flags),
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags),
        Commands::Parse(args) => commands::parse::handle(&args, ctx, flags),
        Commands::Dataset(args) => commands::dataset::handle(&args, ctx, flags),
        Commands::Participant { action } => commands::participant::handle(&action, ctx, flags),
        Commands::Log { action } => commands::log::handle(&action, ctx, flags),
        Commands::Key { action } => commands::key::handle(&action, ctx, flags),
        Commands::Reference { action } => commands::reference::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
