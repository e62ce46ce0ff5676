//! frqforge server binary.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use frqforge_core::store::MemoryStore;
use frqforge_providers::config::{create_generator, load_config_from};
use frqforge_server::{routes, AppState};

#[derive(Parser)]
#[command(name = "frqforge", version, about = "APES FRQ practice and grading service")]
struct Cli {
    /// Config file path (default: ./frqforge.toml, then ~/.config/frqforge/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = load_config_from(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let generator = create_generator(&config.provider);
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(generator, store, &config.grading.accepted_class_code);
    let app = routes(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(model = %config.provider.model, "listening on http://{addr}");

    axum::serve(listener, app).await.context("server crashed")?;

    Ok(())
}
