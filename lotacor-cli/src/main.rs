//! Lotacor CLI - Command line tool for querying the Lotacor fishery API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lotacor-cli",
    version,
    about = "Query the Lotacor fishery-data API for the Azores"
)]
struct Cli {
    #[command(subcommand)]
    command: lotacor_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lotacor_cmd::run(cli.command).await
}
