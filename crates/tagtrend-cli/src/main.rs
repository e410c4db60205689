mod compare;
mod scrape;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::compare::{CategoryArg, SortArg};

#[derive(Debug, Parser)]
#[command(name = "tagtrend-cli")]
#[command(about = "Tag popularity trend tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the two most recent snapshots, or write the JSON artifact
    Compare {
        /// Metric the console table is ranked by
        #[arg(long, value_enum, default_value_t = SortArg::Percent)]
        sort: SortArg,

        /// Tag category to rank
        #[arg(long = "type", value_enum, default_value_t = CategoryArg::All)]
        category: CategoryArg,

        /// Write the daily/weekly comparison artifact instead of printing a table
        #[arg(long)]
        json: bool,
    },
    /// Fetch today's tag counts and aliases, then rebuild the cumulative table
    Scrape {
        /// Print what would be fetched without touching the network or disk
        #[arg(long)]
        dry_run: bool,
    },
    /// Rebuild the tag-by-date cumulative table from every snapshot
    Cumulative,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tagtrend_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Compare {
            sort,
            category,
            json,
        }) => {
            if json {
                compare::run_compare_json(&config)?;
            } else {
                compare::run_compare_console(&config, category.into(), sort.into());
            }
        }
        Some(Commands::Scrape { dry_run }) => scrape::run_scrape(&config, dry_run).await?,
        Some(Commands::Cumulative) => scrape::run_cumulative(&config)?,
        None => Cli::command().print_help()?,
    }

    Ok(())
}
