use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leadtrack_storage::LeadStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "leadtrack")]
#[command(about = "Lead management server and tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short, long, default_value = "8470")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print leads as JSON, optionally filtered by status
    List {
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Print a single lead as JSON
    Get { id: i64 },
    /// Write the CSV export to disk
    Export {
        #[arg(short, long, default_value = "leads_export.csv")]
        output: PathBuf,
    },
    /// Print the dashboard summary as JSON
    Stats,
}

fn get_db_path() -> PathBuf {
    std::env::var_os("LEADTRACK_DB_PATH").map(PathBuf::from).unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("leadtrack")
            .join("leads.db")
    })
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store = Arc::new(LeadStore::open(&db_path)?);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(store, port, host).await?,
        Commands::List { status } => commands::list::run(&store, status.as_deref())?,
        Commands::Get { id } => commands::get::run(&store, id)?,
        Commands::Export { output } => commands::export::run(&store, &output)?,
        Commands::Stats => commands::stats::run(&store)?,
    }

    Ok(())
}
