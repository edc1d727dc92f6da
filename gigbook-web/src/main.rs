//! gigbook-web - venue/artist/show booking site
//!
//! Serves the booking pages over HTTP: venue and artist CRUD forms, show
//! creation, listings, and search, all rendered server-side.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use gigbook_common::{config, db};
use gigbook_web::{build_router, AppState};

#[derive(Parser, Debug)]
#[command(name = "gigbook-web", about = "Venue/artist/show booking site")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "GIGBOOK_PORT", default_value_t = 5780)]
    port: u16,

    /// Data directory holding gigbook.db (defaults resolve via
    /// GIGBOOK_DATA, the config file, then the OS data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber first
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting gigbook-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_dir = config::resolve_data_dir(args.data_dir.as_deref());
    let db_path = config::database_path(&data_dir);
    info!("Database path: {}", db_path.display());

    let pool = db::init_database(&db_path)
        .await
        .context("database initialization failed")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port))
        .await
        .with_context(|| format!("failed to bind port {}", args.port))?;
    info!("gigbook-web listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
