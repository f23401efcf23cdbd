//! Development HTTP server for the storeboard dashboard.
//!
//! The dashboard is rendered once at startup from the loaded workbook; the
//! router serves that pre-rendered output and is otherwise idle.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storeboard_viz::{ChartSpec, DashboardPage, Result as VizResult};

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

/// Shared application state: the dashboard page rendered once at startup
/// and its chart specs for the JSON API.
#[derive(Clone)]
pub struct AppState {
    page_html: Arc<String>,
    charts: Arc<Vec<ChartSpec>>,
}

impl AppState {
    /// Render the page once and keep it together with its chart specs.
    ///
    /// # Errors
    ///
    /// Returns error if the chart specs fail to serialize.
    pub fn new(page: &DashboardPage) -> VizResult<Self> {
        Ok(Self {
            page_html: Arc::new(page.render()?),
            charts: Arc::new(page.chart_specs().into_iter().cloned().collect()),
        })
    }
}

/// Serve the pre-rendered dashboard page.
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html((*state.page_html).clone())
}

/// Serve the chart specs as JSON.
pub async fn charts(State(state): State<AppState>) -> Json<Vec<ChartSpec>> {
    Json((*state.charts).clone())
}

/// Health check endpoint handler.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .route("/api/charts", get(charts))
        .with_state(state)
}
