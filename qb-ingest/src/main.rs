//! qb-ingest (Quest Ingestion) - Quest normalization microservice
//!
//! Sits between the AI extraction step and quest persistence: snaps point
//! values onto the allowed set and resolves assignee names to family
//! members.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qb_common::config::load_module_config;
use qb_ingest::services::QuestNormalizer;
use qb_ingest::{bind_listener, build_router, logging, AppState};
use tracing::info;

/// Command-line arguments for qb-ingest
#[derive(Parser, Debug)]
#[command(name = "qb-ingest")]
#[command(about = "Quest ingestion microservice for QuestBoard")]
#[command(version)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, env = "QB_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overrides `server.bind`
    #[arg(short, long, env = "QB_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Subscriber first so config loading can warn
    let log_handle = logging::init();
    info!(
        "Starting QuestBoard Quest Ingestion (qb-ingest) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("QB_GIT_HASH"),
        env!("QB_BUILD_TIMESTAMP"),
        env!("QB_BUILD_PROFILE")
    );

    let config = load_module_config(args.config.as_deref(), "qb-ingest")
        .context("Failed to load configuration")?;
    if !logging::env_filter_overrides() {
        logging::apply_config_level(&log_handle, &config.logging.level)
            .context("Failed to apply configured log level")?;
    }

    info!(
        "Config: bind={}, log level={}, default points={}",
        config.server.bind, config.logging.level, config.quests.default_points
    );

    let normalizer = QuestNormalizer::new(config.quests.default_points)
        .context("Invalid default points")?;
    let app = build_router(AppState::new(normalizer));

    let bind = args.bind.unwrap_or(config.server.bind);
    let (listener, addr) = bind_listener(&bind).await?;
    info!("qb-ingest listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
