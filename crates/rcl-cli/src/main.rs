use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rcl error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;
    context::warn_mistyped_env();
    let mut ctx = context::AppContext::new(config);

    let write_lock = if command_requires_write_lock(&cli.command) {
        Some(write_lock::acquire(&ctx.lock_path(), &ctx.config.lock).await?)
    } else {
        None
    };

    let result = commands::dispatch::dispatch(cli.command, &mut ctx, &flags);
    drop(write_lock);
    result
}

/// Commands that mutate the data directory and must hold the advisory lock.
const fn command_requires_write_lock(command: &cli::Commands) -> bool {
    matches!(
        command,
        cli::Commands::Participant {
            action: cli::ParticipantCommands::New { .. },
        } | cli::Commands::Log { .. }
    )
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let fallback = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RECALL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing: {error}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::command_requires_write_lock;
    use crate::cli::Cli;

    fn requires_lock(args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args).expect("command should parse");
        command_requires_write_lock(&cli.command)
    }

    #[test]
    fn only_writers_take_the_lock() {
        assert!(requires_lock(&["rcl", "participant", "new", "--name", "Jane"]));
        assert!(requires_lock(&["rcl", "log", "append", "P001", "demographics"]));

        assert!(!requires_lock(&["rcl", "participant", "list"]));
        assert!(!requires_lock(&["rcl", "metrics", "P001"]));
        assert!(!requires_lock(&["rcl", "dataset"]));
        assert!(!requires_lock(&["rcl", "reference", "validate"]));
    }
}
