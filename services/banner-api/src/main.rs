//! Banner API Server
//!
//! Renders the banner PNG per request, or once to a file with `--output`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use banner_api::config::{LogFormat, ServiceArgs, ServiceConfig};
use banner_api::state::AppState;
use banner_common::BannerSpec;
use renderer::BannerFont;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = ServiceArgs::parse();
    init_tracing(&args.log_level, args.log_format);

    let config = ServiceConfig::from_args(args);

    let font = config
        .font
        .load()
        .context("Failed to load banner font")?;
    info!(font = %font.source(), "Loaded banner font");

    if let Some(output) = config.output.clone() {
        return render_once(config.spec, font, output).await;
    }

    serve(config, font).await
}

fn init_tracing(log_level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .json()
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .init(),
    }
}

async fn render_once(spec: BannerSpec, font: BannerFont, output: PathBuf) -> Result<()> {
    let at = Local::now().naive_local();
    tokio::task::spawn_blocking(move || banner_api::render_to_file(&spec, &font, at, &output))
        .await
        .context("Render task failed")?
        .context("Failed to render banner")?;
    Ok(())
}

async fn serve(config: ServiceConfig, font: BannerFont) -> Result<()> {
    let mut state = AppState::new(config.spec, font);
    match banner_api::metrics::install_recorder() {
        Ok(handle) => state = state.with_prometheus(handle),
        Err(e) => warn!(error = %e, "Prometheus recorder unavailable, /metrics disabled"),
    }

    let app = banner_api::build_router(Arc::new(state));

    info!("Banner API listening on {}", config.listen);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Banner API stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
