use acqsuite::cli::{
    handle_analyze_command, handle_sponsor_command, handle_valuation_command, Cli, CliCommand,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout stays clean for structured output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        CliCommand::Version => {
            println!("acqsuite {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliCommand::Analyze(args) => handle_analyze_command(args),
        CliCommand::Valuation(args) => handle_valuation_command(args),
        CliCommand::Sponsor(args) => handle_sponsor_command(args),
    }
}
