use crate::group::{date_label, group_mean, group_sum, mean_of, sum_of, GroupedSeries};
use storeboard_data::SalesRecord;

/// Fixed scalar summary block for the sales table
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_paid_sales: f64,
    pub total_ad_spend: f64,
    pub average_aov: f64,
    pub average_roas: f64,
    pub total_units_sold: f64,
}

impl SalesSummary {
    /// Compute the summary over all sales records
    #[must_use]
    pub fn compute(records: &[SalesRecord]) -> Self {
        Self {
            total_revenue: sum_of(records, |r| r.revenue),
            total_paid_sales: sum_of(records, |r| r.paid_sales),
            total_ad_spend: sum_of(records, |r| r.ad_spend),
            average_aov: mean_of(records, |r| r.aov),
            average_roas: mean_of(records, |r| r.roas),
            total_units_sold: sum_of(records, |r| r.units_sold),
        }
    }
}

/// All derived series for the sales dashboard section.
///
/// Daily series share one date axis in first-occurrence order, so paired
/// series (returning/new users, ad spend/paid sales) stay aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesMetrics {
    pub summary: SalesSummary,
    pub returning_users_by_date: GroupedSeries,
    pub new_users_by_date: GroupedSeries,
    pub ad_spend_by_date: GroupedSeries,
    pub paid_sales_by_date: GroupedSeries,
    pub roas_by_date: GroupedSeries,
    pub organic_vs_paid: GroupedSeries,
    pub aov_by_date: GroupedSeries,
}

impl SalesMetrics {
    /// Compute every sales aggregate in one pass over the records
    #[must_use]
    pub fn compute(records: &[SalesRecord]) -> Self {
        Self {
            summary: SalesSummary::compute(records),
            returning_users_by_date: group_sum(records, |r| date_label(r.date), |r| {
                r.returning_users
            }),
            new_users_by_date: group_sum(records, |r| date_label(r.date), |r| r.new_users),
            ad_spend_by_date: group_sum(records, |r| date_label(r.date), |r| r.ad_spend),
            paid_sales_by_date: group_sum(records, |r| date_label(r.date), |r| r.paid_sales),
            roas_by_date: group_mean(records, |r| date_label(r.date), |r| r.roas),
            organic_vs_paid: GroupedSeries::from_points(vec![
                ("Organic Sales".to_string(), sum_of(records, |r| r.organic_sales)),
                ("Paid Sales".to_string(), sum_of(records, |r| r.paid_sales)),
            ]),
            aov_by_date: group_mean(records, |r| date_label(r.date), |r| r.aov),
        }
    }
}
