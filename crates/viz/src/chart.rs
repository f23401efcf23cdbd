use crate::error::Result;
use serde::{Deserialize, Serialize};
use storeboard_metrics::GroupedSeries;

/// Categorical colors used across the dashboard, cycled when a chart has
/// more slices than the palette has entries.
pub const PALETTE: [&str; 10] = [
    "#2563eb", "#059669", "#d97706", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
    "#ea580c", "#64748b",
];

/// A palette color for every label of a series, cycling as needed
#[must_use]
pub fn palette_cycle(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| PALETTE[i % PALETTE.len()].to_string())
        .collect()
}

/// Chart specification for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub chart_type: ChartKind,
    pub title: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Chart type for visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
}

/// Chart data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// A dataset in a chart.
///
/// Field names serialize in the camelCase form Chart.js reads directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// One color for the whole dataset, or one per data point (pie slices)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

/// Chart rendering options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    pub show_legend: bool,
    pub stacked: bool,
}

impl Dataset {
    /// Create a new dataset
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
        }
    }

    /// Color the whole dataset with one color
    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.background_color = Some(ColorSpec::Single(color.to_string()));
        self.border_color = Some(color.to_string());
        self
    }

    /// Color each data point individually
    #[must_use]
    pub fn with_point_colors(mut self, colors: Vec<String>) -> Self {
        self.background_color = Some(ColorSpec::PerPoint(colors));
        self
    }
}

impl ChartSpec {
    /// Create a new chart specification.
    #[must_use]
    pub fn new(chart_type: ChartKind, title: impl Into<String>) -> Self {
        Self {
            chart_type,
            title: title.into(),
            data: ChartData {
                labels: Vec::new(),
                datasets: Vec::new(),
            },
            options: ChartOptions::default(),
        }
    }

    /// Create a single-dataset chart straight from a grouped series
    #[must_use]
    pub fn from_series(
        chart_type: ChartKind,
        title: impl Into<String>,
        dataset_label: impl Into<String>,
        series: &GroupedSeries,
        color: &str,
    ) -> Self {
        Self::new(chart_type, title)
            .with_labels(series.labels())
            .with_dataset(Dataset::new(dataset_label, series.values()).with_color(color))
    }

    /// Set the category labels
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.data.labels = labels;
        self
    }

    /// Append a dataset
    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    /// Set axis titles
    #[must_use]
    pub fn with_axes(mut self, x: &str, y: &str) -> Self {
        self.options.x_axis_label = Some(x.to_string());
        self.options.y_axis_label = Some(y.to_string());
        self
    }

    /// Stack the datasets on both axes
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.options.stacked = true;
        self
    }

    /// Show the legend
    #[must_use]
    pub fn with_legend(mut self) -> Self {
        self.options.show_legend = true;
        self
    }

    /// Convert to JSON for the chart API and the embedded page script.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
