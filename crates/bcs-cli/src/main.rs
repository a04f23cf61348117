use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "bcs-cli", version, about = "Boundary and initial field synthesis")]
struct Cli {
    /// Log filter: a level (trace, debug, info, warn, error) or an EnvFilter directive.
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize every field of a case and export it.
    Synth(commands::synth::SynthArgs),
    /// Run a synthesis pass without writing anything and report its outcome.
    Check(commands::check::CheckArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Synth(args) => commands::synth::run(&args),
        Command::Check(args) => commands::check::run(&args),
    }
}
