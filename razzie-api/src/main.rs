//! razzie-api - film award record service
//!
//! Serves CRUD over the movies table and the producer win-interval
//! analytic. On first startup the database schema is created and, when a
//! seed CSV is present in the root folder, loaded into the movies table.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use razzie_api::{build_router, AppState};
use razzie_common::config;
use razzie_common::db;

/// Command-line arguments for razzie-api
#[derive(Parser, Debug)]
#[command(name = "razzie-api")]
#[command(about = "Film award record service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "RAZZIE_PORT")]
    port: Option<u16>,

    /// Root folder holding the database and seed CSV
    #[arg(short, long, env = "RAZZIE_ROOT_FOLDER")]
    root_folder: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting razzie-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let root_folder = config::resolve_root_folder(args.root_folder);
    config::ensure_root_folder(&root_folder).context("Failed to create root folder")?;
    info!("Root folder: {}", root_folder.display());

    let db_path = config::database_path(&root_folder);
    let pool = db::init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    // Seed the movies table on first run, when a CSV is present
    let seeded = db::seed_from_csv(&pool, &config::seed_csv_path(&root_folder))
        .await
        .context("Failed to seed movies from CSV")?;
    if seeded > 0 {
        info!("Seeded {} movie records", seeded);
    }

    let state = AppState::new(pool);
    let app = build_router(state);

    let port = config::resolve_port(args.port);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("razzie-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
