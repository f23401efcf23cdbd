//! Aggregation for storeboard
//!
//! Single-pass grouping and summary computation over the loaded record
//! sets. Grouped results keep keys in first-occurrence order, so re-running
//! on unchanged input always yields identical output.
//!
//! # Examples
//!
//! ```
//! use storeboard_metrics::{group_sum, top_n};
//!
//! let rows = vec![("Berlin", 120.0), ("Hamburg", 80.0), ("Berlin", 30.0)];
//! let by_city = group_sum(&rows, |r| r.0.to_string(), |r| Some(r.1));
//!
//! assert_eq!(by_city.values(), vec![150.0, 80.0]);
//! assert_eq!(top_n(&by_city, 1).labels(), vec!["Berlin"]);
//! ```

mod exhibition;
mod group;
mod sales;
mod traffic;

pub use exhibition::{ExhibitionMetrics, ExhibitionSummary};
pub use group::{
    group_mean, group_sum, group_sum_by_two, mean_of, percent_of_total, sum_of, top_n,
    GroupedSeries, PivotTable,
};
pub use sales::{SalesMetrics, SalesSummary};
pub use traffic::{TrafficMetrics, TOP_CITIES};
