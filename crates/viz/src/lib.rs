//! Chart specifications and dashboard rendering for storeboard.
//!
//! Chart specs are plain serde structs in the shape Chart.js consumes; the
//! page renderer embeds them as JSON in a self-contained HTML document and
//! also exposes them for the JSON chart API.
//!
//! # Examples
//!
//! ```
//! use storeboard_viz::{ChartKind, ChartSpec, Dataset};
//!
//! let chart = ChartSpec::new(ChartKind::Bar, "Orders by City")
//!     .with_labels(vec!["Berlin".to_string(), "Hamburg".to_string()])
//!     .with_dataset(Dataset::new("Orders", vec![12.0, 7.0]).with_color("#2563eb"))
//!     .with_axes("City", "Orders");
//!
//! assert!(chart.to_json().unwrap().contains("\"bar\""));
//! ```

mod chart;
mod dashboard;
mod error;
mod page;

/// Re-export chart spec types and the shared palette.
pub use chart::{
    palette_cycle, ChartData, ChartKind, ChartOptions, ChartSpec, ColorSpec, Dataset, PALETTE,
};
/// Re-export the workbook-to-page assembly.
pub use dashboard::build_dashboard;
/// Re-export render error types.
pub use error::{Result, VizError};
/// Re-export page types.
pub use page::{DashboardPage, Section, SummaryTable};
