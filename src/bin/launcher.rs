//! CLI binary standing in for the launcher host.
//!
//! `search` prints one JSON display item per line on stdout; `open` hands a
//! result URL to the platform handler. All tracing output goes to stderr so
//! stdout stays machine-readable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use notion_launcher::{DisplayItem, Launcher, LauncherConfig, OpenTarget, open};
use tracing_subscriber::EnvFilter;

/// Search and open pages across Notion workspaces.
#[derive(Parser)]
#[command(name = "notion-launcher", version, about)]
struct Cli {
    /// Path to TOML preferences file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search all configured workspaces.
    Search {
        /// Query text; multiple words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Open a result URL.
    Open {
        url: String,

        /// Override the configured open target.
        #[arg(long = "in", value_enum)]
        target: Option<OpenTarget>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("notion_launcher=info,notion_search=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = LauncherConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Search { query } => run_search(config, &query.join(" ")).await,
        Command::Open { url, target } => {
            open::launch(&url, target.unwrap_or(config.open_in))?;
            Ok(())
        }
    }
}

async fn run_search(config: LauncherConfig, query: &str) -> anyhow::Result<()> {
    let items = match Launcher::start(config).await {
        Ok(launcher) => launcher.query(query).await,
        Err(err) => {
            tracing::error!(error = %err, "launcher failed to start");
            vec![DisplayItem::diagnostic(&err)]
        }
    };

    for item in &items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}
