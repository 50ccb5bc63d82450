use clap::{Parser, Subcommand};
use cocomo::config::Config;
use std::process;
use tracing::{debug, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "COCOMO Basic software cost estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate effort, schedule and team size for one project
    Estimate(cmd::estimate::EstimateArgs),
    /// Estimate one size under every development mode
    Compare(cmd::compare::CompareArgs),
    /// List development modes and their model constants
    Modes,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed CLI: {:?}", cli);

    let outcome = match cli.command {
        Commands::Estimate(args) => cmd::estimate::run(args, &cli.config),
        Commands::Compare(args) => cmd::compare::run(args, &cli.config),
        Commands::Modes => cmd::modes::run(&cli.config),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
