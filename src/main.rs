mod commands;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use folio_core::Site;
use folio_core::config::SiteConfig;
use folio_core::date_range::parse_date;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Inspect the folio site content and export its public pages")]
struct Cli {
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Where am I today?
    Now,
    /// Next events, soonest first
    Upcoming {
        /// How many events to show (defaults to calendar.upcoming_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print a month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// List blog posts
    Posts {
        /// Include drafts
        #[arg(long)]
        drafts: bool,
    },
    /// List pitches
    Pitches,
    /// Validate config and content
    Check,
    /// Write the public pages as static files
    Export {
        /// Output directory
        dir: PathBuf,
    },
    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let date = cli.date.as_deref();

    match cli.command {
        Commands::Now => commands::now::run(&load_site(date)?),
        Commands::Upcoming { limit } => commands::upcoming::run(&load_site(date)?, limit),
        Commands::Month { month } => commands::month::run(&load_site(date)?, month.as_deref()),
        Commands::Posts { drafts } => commands::posts::run(&load_site(date)?, drafts),
        Commands::Pitches => commands::pitches::run(&load_site(date)?),
        Commands::Check => commands::check::run(load_site(date)),
        Commands::Export { dir } => commands::export::run(&load_site(date)?, &dir),
        Commands::Init { force } => commands::init::run(&SiteConfig::config_path(), force),
    }
}

/// Logs go to stderr, and only when RUST_LOG asks for them.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_site(date: Option<&str>) -> Result<Site> {
    let config = SiteConfig::load()
        .with_context(|| format!("Could not load {}", SiteConfig::config_path().display()))?;
    let site = Site::load(config)?;

    match date {
        Some(raw) => {
            let today = parse_date(raw)
                .with_context(|| format!("Invalid --date '{raw}', expected YYYY-MM-DD"))?;
            Ok(site.with_today(today))
        }
        None => Ok(site),
    }
}
