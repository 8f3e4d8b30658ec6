//! Notes Board - Main Server
//!
//! Serves the note list and accepts new notes over HTTP.

use anyhow::Result;
use clap::{Parser, Subcommand};
use notes_board::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notes-board")]
#[command(about = "Minimal note board server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config.yaml / SERVER_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<String>,

        /// Path to the YAML config file
        #[arg(short, long, env = "NOTES_CONFIG")]
        config: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,notes_board=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            static_dir,
            config,
        } => {
            let mut config = Config::from_yaml_and_env(config.as_deref())?;
            if let Some(port) = port {
                config.server_port = port;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            notes_board::start_server(config).await
        }
    }
}
