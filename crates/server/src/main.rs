//! storeboard entry point: load the workbook, render the dashboard, serve it.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use storeboard_data::Workbook;
use storeboard_server::{create_router, AppState};
use storeboard_viz::build_dashboard;
use tracing_subscriber::EnvFilter;

/// storeboard - sales dashboard served from an Excel workbook
#[derive(Parser)]
#[command(name = "storeboard")]
#[command(author, version, about = "Serve a sales dashboard from an Excel workbook", long_about = None)]
struct Cli {
    /// Path to the Excel workbook
    #[arg(value_name = "XLSX")]
    file: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to serve on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let workbook = Workbook::load(&cli.file)
        .with_context(|| format!("Failed to load workbook: {}", cli.file.display()))?;
    tracing::info!(
        sales = workbook.sales.len(),
        traffic = workbook.traffic.len(),
        exhibitions = workbook.exhibitions.len(),
        "workbook loaded"
    );

    let page = build_dashboard(&workbook);
    let state = AppState::new(&page).context("Failed to render dashboard")?;
    let app = create_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("storeboard listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
