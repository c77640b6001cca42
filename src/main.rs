use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("asm_stats=debug,info")
    } else {
        EnvFilter::new("asm_stats=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Report(args) => {
            cli::report::run(args, cli.verbose)?;
        }
        cli::Commands::Append(args) => {
            cli::append::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
