use crate::chart::{palette_cycle, ChartKind, ChartSpec, Dataset, PALETTE};
use crate::page::{DashboardPage, Section, SummaryTable};
use storeboard_data::{ExhibitionRecord, SalesRecord, TrafficRecord, Workbook};
use storeboard_metrics::{ExhibitionMetrics, SalesMetrics, TrafficMetrics};

/// Assemble the full dashboard page from a loaded workbook.
///
/// Computes every aggregate once and binds each to its widget; the result
/// is rendered once and served unchanged for the lifetime of the process.
#[must_use]
pub fn build_dashboard(workbook: &Workbook) -> DashboardPage {
    DashboardPage::new("Sales Dashboard")
        .with_section(sales_section(&workbook.sales))
        .with_section(traffic_section(&workbook.traffic))
        .with_section(exhibition_section(&workbook.exhibitions))
}

fn sales_section(records: &[SalesRecord]) -> Section {
    let metrics = SalesMetrics::compute(records);
    let summary = &metrics.summary;

    Section::new("Sales")
        .with_table(
            SummaryTable::new("Summary Metrics")
                .with_metric("Total Revenue", fmt_amount(summary.total_revenue))
                .with_metric("Total Paid Sales", fmt_amount(summary.total_paid_sales))
                .with_metric("Total Ad Spend", fmt_amount(summary.total_ad_spend))
                .with_metric("Average AOV", fmt_amount(summary.average_aov))
                .with_metric("Average ROAS", fmt_amount(summary.average_roas))
                .with_metric("Total Units Sold", fmt_count(summary.total_units_sold)),
        )
        .with_chart(
            ChartSpec::new(ChartKind::Bar, "Returning vs. New Users")
                .with_labels(metrics.returning_users_by_date.labels())
                .with_dataset(
                    Dataset::new("Returning Users", metrics.returning_users_by_date.values())
                        .with_color(PALETTE[0]),
                )
                .with_dataset(
                    Dataset::new("New Users", metrics.new_users_by_date.values())
                        .with_color(PALETTE[1]),
                )
                .with_axes("Date", "Number of Users")
                .stacked()
                .with_legend(),
        )
        .with_chart(
            ChartSpec::new(ChartKind::Bar, "Ads Spend vs Paid Sales")
                .with_labels(metrics.ad_spend_by_date.labels())
                .with_dataset(
                    Dataset::new("Ads Spend", metrics.ad_spend_by_date.values())
                        .with_color(PALETTE[0]),
                )
                .with_dataset(
                    Dataset::new("Paid Sales", metrics.paid_sales_by_date.values())
                        .with_color(PALETTE[2]),
                )
                .with_axes("Date", "Amount")
                .stacked()
                .with_legend(),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Line,
                "ROAS (Return on Ad Spend) - Daily",
                "ROAS",
                &metrics.roas_by_date,
                PALETTE[0],
            )
            .with_axes("Date", "ROAS"),
        )
        .with_chart(
            ChartSpec::new(ChartKind::Pie, "Organic vs Paid Sales")
                .with_labels(metrics.organic_vs_paid.labels())
                .with_dataset(
                    Dataset::new("Sales", metrics.organic_vs_paid.values())
                        .with_point_colors(palette_cycle(metrics.organic_vs_paid.len())),
                )
                .with_legend(),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Line,
                "Average Order Value (AOV) - Daily",
                "AOV",
                &metrics.aov_by_date,
                PALETTE[2],
            )
            .with_axes("Date", "AOV"),
        )
}

fn traffic_section(records: &[TrafficRecord]) -> Section {
    let metrics = TrafficMetrics::compute(records);
    let pivot = &metrics.orders_by_date_and_type;

    let mut daily_by_type = ChartSpec::new(ChartKind::Bar, "Type Sold on Daily Basis")
        .with_labels(pivot.labels().to_vec())
        .with_axes("Date", "Orders")
        .stacked()
        .with_legend();
    for (i, (kind, values)) in pivot.series().iter().enumerate() {
        daily_by_type = daily_by_type
            .with_dataset(Dataset::new(kind.clone(), values.clone()).with_color(PALETTE[i % PALETTE.len()]));
    }

    Section::new("Traffic")
        .with_chart(daily_by_type)
        .with_chart(
            ChartSpec::new(ChartKind::Doughnut, "Type Sold (Percentage)")
                .with_labels(metrics.orders_share_by_type.labels())
                .with_dataset(
                    Dataset::new("Percentage", metrics.orders_share_by_type.values())
                        .with_point_colors(palette_cycle(metrics.orders_share_by_type.len())),
                )
                .with_legend(),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Bar,
                "Top 10 Cities by Total Revenue",
                "Total Revenue",
                &metrics.top_cities_by_revenue,
                PALETTE[0],
            )
            .with_axes("City", "Total Revenue"),
        )
        .with_chart(
            ChartSpec::new(ChartKind::Doughnut, "Source-wise Sales")
                .with_labels(metrics.revenue_by_source.labels())
                .with_dataset(
                    Dataset::new("Total Revenue", metrics.revenue_by_source.values())
                        .with_point_colors(palette_cycle(metrics.revenue_by_source.len())),
                )
                .with_legend(),
        )
}

fn exhibition_section(records: &[ExhibitionRecord]) -> Section {
    let metrics = ExhibitionMetrics::compute(records);
    let summary = &metrics.summary;

    Section::new("Exhibitions")
        .with_table(
            SummaryTable::new("Summary Metrics")
                .with_metric("Total Orders", fmt_count(summary.total_orders))
                .with_metric("Total Revenue", fmt_amount(summary.total_revenue))
                .with_metric("Average Order Value (AOV)", fmt_amount(summary.average_aov))
                .with_metric(
                    "Top Performing Product",
                    summary.top_collection.clone().unwrap_or_else(|| "n/a".to_string()),
                ),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Bar,
                "Orders by Exhibition Name",
                "Orders",
                &metrics.orders_by_exhibition,
                PALETTE[0],
            )
            .with_axes("Exhibition Name", "Orders"),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Bar,
                "Revenue by Exhibition Name",
                "Revenue",
                &metrics.revenue_by_exhibition,
                PALETTE[1],
            )
            .with_axes("Exhibition Name", "Revenue"),
        )
        .with_chart(
            ChartSpec::from_series(
                ChartKind::Bar,
                "AOV by Exhibition Name",
                "AOV",
                &metrics.aov_by_exhibition,
                PALETTE[2],
            )
            .with_axes("Exhibition Name", "AOV"),
        )
}

fn fmt_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn fmt_count(value: f64) -> String {
    format!("{value:.0}")
}
