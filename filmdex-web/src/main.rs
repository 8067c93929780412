//! filmdex-web - film catalog lookup service
//!
//! Looks up photographic film stocks by DX code (number, extract or full
//! form) or by free-text name/manufacturer, over a read-only SQLite catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use filmdex_common::config::Settings;
use filmdex_web::db::film_types::FilmTypeTable;
use filmdex_web::{build_router, db, AppState};

/// Command-line arguments for filmdex-web
#[derive(Parser, Debug)]
#[command(name = "filmdex-web")]
#[command(about = "Film catalog lookup service (DX codes and free text)")]
#[command(version)]
struct Args {
    /// Path to the config file (TOML)
    #[arg(short, long, env = "FILMDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Path to the SQLite catalog database
    #[arg(short, long, env = "FILMDEX_DATABASE")]
    database: Option<PathBuf>,

    /// Address to listen on (host:port)
    #[arg(short, long, env = "FILMDEX_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting filmdex-web v{}", env!("CARGO_PKG_VERSION"));

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(database) = args.database {
        settings.database_path = database;
    }
    if let Some(bind) = args.bind {
        settings.bind_address = bind;
    }
    info!("Catalog database: {}", settings.database_path.display());

    let pool = db::connect_readonly(&settings.database_path).await?;
    info!("Connected to catalog (read-only)");

    let film_types = FilmTypeTable::load(&pool).await?;
    let total_count = db::count_films(&pool).await?;
    info!(
        "Catalog ready: {} films, {} film type ranges",
        total_count,
        film_types.len()
    );

    let bind_address = settings.bind_address.clone();
    let state = AppState::new(pool, film_types, total_count, settings);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("filmdex-web listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
