use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod catalog;
mod cli;
mod config;
mod error;
mod matching;
mod output;
mod parser;
mod planner;
mod provider;
mod selector;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Only show logs with --verbose; stdout stays clean for the plan itself
    let filter = if cli.verbose {
        EnvFilter::new("weekplan=debug")
    } else {
        EnvFilter::new("weekplan=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args).await,
        Commands::Eligible(args) => cli::eligible::execute(args),
        Commands::Review(args) => cli::review::execute(args),
        Commands::Schema => cli::schema::execute(),
    }
}
