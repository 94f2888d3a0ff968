//! gigbook-web - venue and artist booking site
//!
//! Resolves configuration, opens (or creates) the database and serves the
//! HTML pages and JSON API.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use gigbook_common::config::{LoggingConfig, RootFolderInitializer, RootFolderResolver, TomlConfig};
use gigbook_common::db::{init_database, seed::seed_if_empty};
use gigbook_web::{build_router, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "gigbook-web", version, about = "Venue and artist booking site")]
struct Args {
    /// Root folder holding gigbook.db
    #[arg(long, env = "GIGBOOK_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,

    /// Config file (defaults to the platform config location)
    #[arg(long, env = "GIGBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Load demo venues, artists and shows into an empty database
    #[arg(long)]
    seed: bool,
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid logging level")?;

    match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The config file carries the logging settings, so it is read first and
    // any problem with it is reported once tracing is up
    let (config, config_problem) = TomlConfig::load_with_fallback(args.config.as_deref());
    init_tracing(&config.logging)?;

    info!(
        "Starting gigbook-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(problem) = config_problem {
        warn!("{} (using defaults)", problem);
    }

    let root_folder = RootFolderResolver::new()
        .with_cli_arg(args.root_folder)
        .with_config(&config)
        .resolve();

    let initializer = RootFolderInitializer::new(root_folder);
    initializer.ensure_directory_exists()?;

    let db_path = initializer.database_path();
    info!("Database path: {}", db_path.display());

    let pool = match init_database(&db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e.into());
        }
    };

    if args.seed && seed_if_empty(&pool).await? {
        info!("Database seeded with demo data");
    }

    let app = build_router(AppState::new(pool));

    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("gigbook-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
