mod commands;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lotr_api::Client;

#[derive(Parser)]
#[command(name = "lotr")]
#[command(about = "Query movies and quotes from the Lord of the Rings API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List movies, optionally filtered
    Movies(commands::movies::MoviesArgs),
    /// List quotes, optionally filtered
    Quotes(commands::quotes::QuotesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lotr=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Credentials come from the environment, optionally via a .env file.
    dotenvy::dotenv().ok();
    let Ok(api_url) = std::env::var("API_URL") else {
        bail!("API_URL is missing from the environment.");
    };
    let Ok(api_token) = std::env::var("API_TOKEN") else {
        bail!("API_TOKEN is missing from the environment.");
    };
    let client = Client::new(api_url, api_token)?;

    match &cli.command {
        Commands::Movies(args) => commands::movies::run(args, &client).await?,
        Commands::Quotes(args) => commands::quotes::run(args, &client).await?,
    }

    Ok(())
}
