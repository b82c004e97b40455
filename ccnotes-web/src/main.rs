//! ccnotes-web - notes, series and speakers served over HTTP
//!
//! Resolves the root folder, opens (or creates) `ccnotes.db` inside it, and
//! serves the viewer and admin pages until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use ccnotes_common::config::{
    config_file_path, RootFolderInitializer, RootFolderResolver, TomlConfig,
};
use ccnotes_common::db::init_database;
use ccnotes_web::config::{default_log_filter, ServerConfig};
use ccnotes_web::{build_router, AppState};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for ccnotes-web
#[derive(Parser, Debug)]
#[command(name = "ccnotes-web")]
#[command(about = "Notes, series and speakers web application")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CCNOTES_PORT")]
    port: Option<u16>,

    /// Address to bind
    #[arg(short, long, env = "CCNOTES_BIND")]
    bind: Option<String>,

    /// Root folder holding the database
    #[arg(short, long)]
    root_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Read before tracing starts so the TOML log level can apply
    let (toml, toml_problem) = match config_file_path() {
        Some(path) => match TomlConfig::load(&path) {
            Ok(toml) => (toml, None),
            Err(e) => (
                TomlConfig::default(),
                Some(format!("Ignoring config file {}: {}", path.display(), e)),
            ),
        },
        None => (TomlConfig::default(), None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(&toml.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting CCNotes (ccnotes-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(problem) = toml_problem {
        warn!("{}", problem);
    }

    let root_folder = RootFolderResolver::new("ccnotes-web")
        .with_cli_arg(args.root_folder)
        .with_toml(toml.clone())
        .resolve();

    let initializer = RootFolderInitializer::new(root_folder);
    info!("Root folder: {}", initializer.root_folder().display());
    initializer
        .ensure_directory_exists()
        .context("Failed to prepare root folder")?;

    let db_path = initializer.database_path();
    if initializer.database_exists() {
        info!("Opening database: {}", db_path.display());
    } else {
        info!("Creating database: {}", db_path.display());
    }

    let pool = match init_database(&db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e).context("Failed to open database");
        }
    };

    let server = ServerConfig::resolve(args.bind, args.port, &toml);
    let addr = server.socket_addr().context("Invalid listen address")?;

    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("ccnotes-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
