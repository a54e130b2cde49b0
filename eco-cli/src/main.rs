//! EcoVision CLI - Command line tool for exploring climate measurement data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eco-cli",
    version,
    about = "EcoVision climate data explorer"
)]
struct Cli {
    #[command(flatten)]
    api: eco_cmd::ApiOptions,

    #[command(subcommand)]
    command: eco_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    eco_cmd::run(cli.command, cli.api).await
}
