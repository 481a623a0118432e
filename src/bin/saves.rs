//! isekai_saves - save database maintenance tool
//!
//! Lists, shows and deletes saved characters.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use isekai::persistence::{load_player, validate_name, SaveStore, SqliteSaveStore};
use isekai::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Isekai save database tool
#[derive(Parser, Debug)]
#[command(
    name = "isekai_saves",
    version,
    about = "Inspect and manage Isekai save records"
)]
struct Args {
    /// SQLite save database (defaults to the configured path)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Config file (default: Isekai.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List saved characters
    List,
    /// Print a character's save record as JSON
    Show { name: String },
    /// Delete a character's save record
    Delete { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let database = match args.database {
        Some(path) => path,
        None => match config.db_path {
            Some(path) => PathBuf::from(path),
            None => bail!("No save database configured; pass --database"),
        },
    };
    if !database.exists() {
        bail!("Save database not found: {}", database.display());
    }
    let Some(database) = database.to_str() else {
        bail!("Invalid database path: {}", database.display());
    };

    let store = SqliteSaveStore::open(Some(database)).await?;

    match args.command {
        Action::List => {
            let names = store.list().await?;
            if names.is_empty() {
                println!("No saved characters.");
            }
            for name in names {
                println!("{}", name);
            }
        }
        Action::Show { name } => {
            let player = load_player(&store, &name).await?;
            println!("{}", serde_json::to_string_pretty(&player)?);
        }
        Action::Delete { name } => {
            let name = validate_name(&name)?;
            if !store.delete(&name).await? {
                bail!("No save record for {}", name);
            }
            println!("Deleted {}", name);
        }
    }

    Ok(())
}
