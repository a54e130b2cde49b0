//! Command implementations for the EcoVision CLI.
//!
//! Provides subcommands that drive the explorer against a live backend:
//! listing the catalogs and running one analysis with a set of filters.

use clap::{Args, Subcommand};

pub mod args;
pub mod catalogs;
pub mod explore;
pub mod render;

pub use args::{ApiOptions, FilterArgs};

#[derive(Subcommand)]
pub enum Command {
    /// List available locations and metrics
    Catalogs {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch data for a filter selection in one analysis mode
    Explore(ExploreArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page to show (raw mode only)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page: 10, 20, 50 or 100 (raw mode only)
    #[arg(long, default_value_t = eco_data::pagination::DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Print the normalized view model as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(command: Command, options: ApiOptions) -> anyhow::Result<()> {
    match command {
        Command::Catalogs { json } => catalogs::run_catalogs(&options, json).await,
        Command::Explore(args) => explore::run_explore(&options, args).await,
    }
}
