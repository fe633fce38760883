//! Servicegraph CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "servicegraph")]
#[command(about = "Microservice topology graph inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize the graph from a dashboard backend
    Fetch {
        /// Base URL of the backend exposing /graph
        #[arg(short, long, default_value = "http://127.0.0.1:8080")]
        base_url: String,
    },
    /// Print the static lookup catalogs
    Catalogs,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "servicegraph={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Fetch { base_url } => commands::fetch(base_url).await,
        Commands::Catalogs => commands::catalogs().await,
        Commands::Version => {
            println!("servicegraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
