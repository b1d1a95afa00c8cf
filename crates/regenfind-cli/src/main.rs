use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod places;
mod search;
mod suggest;

#[derive(Debug, Parser)]
#[command(name = "regenfind-cli")]
#[command(about = "Condition-and-location provider search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch condition suggestions for partial text.
    Suggest {
        /// Partial condition text, e.g. "diab".
        text: String,
    },
    /// Fetch city suggestions for partial address text.
    Places {
        /// Partial address text, e.g. "Bos".
        text: String,
        /// Also geocode the first suggestion to coordinates.
        #[arg(long)]
        geocode: bool,
    },
    /// Validate a search and print the results-view payload as JSON.
    Search {
        /// The condition to search for.
        #[arg(long)]
        condition: String,
        /// The location to search around.
        #[arg(long)]
        location: String,
        /// Treatment filter value (PRP, Stem, Prolotherapy); repeatable.
        #[arg(long = "treatment")]
        treatments: Vec<String>,
    },
    /// Sort result rows read as JSON from stdin.
    Sort {
        /// Sort order: distance, asc, or desc.
        #[arg(long, default_value = "distance")]
        order: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = regenfind_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Suggest { text } => suggest::run_suggest(&config, &text).await,
        Commands::Places { text, geocode } => places::run_places(&config, &text, geocode).await,
        Commands::Search {
            condition,
            location,
            treatments,
        } => search::run_search(&condition, &location, &treatments),
        Commands::Sort { order } => search::run_sort(&order),
    }
}
