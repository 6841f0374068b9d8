mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leadgen_lib::cache::MemoryCache;
use leadgen_lib::{CachedClient, FavoritesStore, LeadGenConfig, PageFetcher};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "leadgen")]
#[command(about = "Find, enrich and score B2B leads from a keyword")]
struct Cli {
    /// Output format: table, json, csv, markdown or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search companies by keyword and print enriched leads
    Search(Box<commands::search::SearchArgs>),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("leadgen=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.output);

    let config = LeadGenConfig::from_env();
    let cache = MemoryCache::with_capacity(config.cache_ttl, config.cache_max_entries);
    let client = match config.suggest_url.as_deref() {
        Some(url) => CachedClient::with_base_url(url, cache),
        None => CachedClient::new(cache),
    };
    let fetcher = PageFetcher::new(config.fetch_timeout);

    // One process is one session.
    let favorites = FavoritesStore::new();
    let session = format!("cli-{}", std::process::id());

    match &cli.command {
        Commands::Search(args) => {
            commands::search::run(args.as_ref(), &client, &fetcher, &favorites, &session, &format)
                .await?
        }
    }

    Ok(())
}
