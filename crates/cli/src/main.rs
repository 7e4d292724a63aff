#![allow(clippy::print_stdout, reason = "CLI prints query results")]
#![allow(clippy::exit, reason = "Supervisor exits the process on fatal errors")]

mod commands;
mod config;
mod supervisor;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use historical_news_core::YearRange;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "historical-news")]
#[command(about = "Historical newspaper archive server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen port, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Entries for today's day-of-year, or the nearest earlier one
    Today {
        /// Reference date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Case-insensitive full-text search over entry content
    Search { query: String },
    /// Article counts per year
    Yearly,
    /// Article counts per month
    Monthly {
        #[arg(long)]
        year_from: Option<i32>,
        #[arg(long)]
        year_to: Option<i32>,
    },
    /// Create the archive table and indexes if absent
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    supervisor::install_panic_hook();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, port, host).await?,
        Commands::Today { date } => commands::query::run_today(&config, date).await?,
        Commands::Search { query } => commands::query::run_search(&config, &query).await?,
        Commands::Yearly => commands::query::run_yearly(&config).await?,
        Commands::Monthly { year_from, year_to } => {
            commands::query::run_monthly(&config, YearRange::new(year_from, year_to)).await?;
        },
        Commands::InitDb => commands::init_db::run(&config).await?,
    }

    Ok(())
}
