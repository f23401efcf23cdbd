use crate::group::{group_mean, group_sum, mean_of, sum_of, GroupedSeries};
use storeboard_data::ExhibitionRecord;

/// Fixed scalar summary block for the exhibition table
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitionSummary {
    pub total_orders: f64,
    pub total_revenue: f64,
    pub average_aov: f64,
    /// Collection with the highest summed revenue; ties resolve to the
    /// first collection in input order. `None` for an empty table.
    pub top_collection: Option<String>,
}

impl ExhibitionSummary {
    /// Compute the summary over all exhibition records
    #[must_use]
    pub fn compute(records: &[ExhibitionRecord]) -> Self {
        let revenue_by_collection = group_sum(records, |r| r.collection.clone(), |r| r.revenue);

        Self {
            total_orders: sum_of(records, |r| r.orders),
            total_revenue: sum_of(records, |r| r.revenue),
            average_aov: mean_of(records, |r| r.aov),
            top_collection: revenue_by_collection.argmax().map(str::to_string),
        }
    }
}

/// All derived series for the exhibition dashboard section
#[derive(Debug, Clone, PartialEq)]
pub struct ExhibitionMetrics {
    pub summary: ExhibitionSummary,
    pub orders_by_exhibition: GroupedSeries,
    pub revenue_by_exhibition: GroupedSeries,
    pub aov_by_exhibition: GroupedSeries,
}

impl ExhibitionMetrics {
    /// Compute every exhibition aggregate in one pass over the records
    #[must_use]
    pub fn compute(records: &[ExhibitionRecord]) -> Self {
        Self {
            summary: ExhibitionSummary::compute(records),
            orders_by_exhibition: group_sum(records, |r| r.exhibition.clone(), |r| r.orders),
            revenue_by_exhibition: group_sum(records, |r| r.exhibition.clone(), |r| r.revenue),
            aov_by_exhibition: group_mean(records, |r| r.exhibition.clone(), |r| r.aov),
        }
    }
}
