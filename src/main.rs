//! Allergen Menu Server - Binary Entry Point
//!
//! Loads the menu once, then serves searches over HTTP until Ctrl+C.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use allergen_menu::api::{create_router, with_static_dir, AppState};
use allergen_menu::config::Args;
use allergen_menu::{MenuEngine, MenuGraph};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    let graph = MenuGraph::from_file(&args.menu)
        .with_context(|| format!("failed to load menu from {}", args.menu.display()))?;
    if graph.is_empty() {
        tracing::warn!(path = %args.menu.display(), "menu has no dishes");
    }

    let config = args.engine_config();
    info!(?config, "engine configured");
    let engine = MenuEngine::new(Arc::new(graph), config);
    let state = Arc::new(AppState::new(engine));

    let mut app = create_router(state);
    if let Some(dir) = &args.static_dir {
        info!(dir = %dir.display(), "serving static files");
        app = with_static_dir(app, dir);
    }

    let addr = args.socket_addr().context("invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Menu server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
