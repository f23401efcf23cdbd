use crate::group::{
    date_label, group_sum, group_sum_by_two, percent_of_total, top_n, GroupedSeries, PivotTable,
};
use storeboard_data::TrafficRecord;

/// How many cities the revenue ranking keeps
pub const TOP_CITIES: usize = 10;

/// All derived series for the traffic dashboard section
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficMetrics {
    pub orders_by_date_and_type: PivotTable,
    /// Share of total orders per type, in percent
    pub orders_share_by_type: GroupedSeries,
    /// The ten cities with the highest summed revenue, descending
    pub top_cities_by_revenue: GroupedSeries,
    pub revenue_by_source: GroupedSeries,
}

impl TrafficMetrics {
    /// Compute every traffic aggregate in one pass over the records
    #[must_use]
    pub fn compute(records: &[TrafficRecord]) -> Self {
        let orders_by_type = group_sum(records, |r| r.kind.clone(), |r| r.orders);
        let revenue_by_city = group_sum(records, |r| r.city.clone(), |r| r.total_revenue);

        Self {
            orders_by_date_and_type: group_sum_by_two(
                records,
                |r| date_label(r.date),
                |r| r.kind.clone(),
                |r| r.orders,
            ),
            orders_share_by_type: percent_of_total(&orders_by_type),
            top_cities_by_revenue: top_n(&revenue_by_city, TOP_CITIES),
            revenue_by_source: group_sum(records, |r| r.source.clone(), |r| r.total_revenue),
        }
    }
}
