use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkhash::config::Config;
use linkhash::error::ServiceError;
use linkhash::resolver::Resolver;
use linkhash::short_id::ShortIdGenerator;
use linkhash::shortener::Shortener;
use linkhash::storage::open_store;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "linkhash-admin")]
#[command(about = "Linkhash store management CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the mapping table if it does not exist
    Init,
    /// Shorten a URL and print the short URL
    Shorten {
        /// URL to shorten, stored verbatim
        long_url: String,
    },
    /// Print the long URL stored for a short id
    Resolve {
        /// Short id (the last path segment of a short URL)
        short_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Ensure the table exists
    let store = open_store(&config.store)
        .await
        .context("failed to open mapping store")?;

    match cli.command {
        Commands::Init => {
            println!("✓ Table '{}' is ready", config.store.table_name);
        }
        Commands::Shorten { long_url } => {
            let shortener = Shortener::new(
                Arc::clone(&store),
                ShortIdGenerator::try_from(config.short_id)?,
                config.base_url.clone(),
            );
            let shortened = shortener.shorten(&long_url).await?;
            println!("{}", shortened.short_url);
        }
        Commands::Resolve { short_id } => {
            let resolver = Resolver::new(store);
            match resolver.resolve(&short_id).await {
                Ok(long_url) => println!("{}", long_url),
                Err(ServiceError::NotFound) => {
                    eprintln!("⚠ Short URL not found: {}", short_id);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
