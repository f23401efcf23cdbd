use chrono::NaiveDate;
use indexmap::IndexMap;

/// Label/value pairs, ordered by first occurrence of each key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    points: Vec<(String, f64)>,
}

impl GroupedSeries {
    /// Create a series from pre-computed points
    #[must_use]
    pub fn from_points(points: Vec<(String, f64)>) -> Self {
        Self { points }
    }

    /// The (label, value) pairs in key order
    #[must_use]
    pub fn points(&self) -> &[(String, f64)] {
        &self.points
    }

    /// Labels in key order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|(label, _)| label.clone()).collect()
    }

    /// Values in key order
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.points.iter().map(|(_, value)| value).sum()
    }

    /// Label of the greatest value. Ties resolve to the first key in input
    /// order.
    #[must_use]
    pub fn argmax(&self) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (i, (_, value)) in self.points.iter().enumerate() {
            match best {
                Some((_, top)) if *value <= top => {}
                _ => best = Some((i, *value)),
            }
        }
        best.map(|(i, _)| self.points[i].0.as_str())
    }
}

/// A two-key grouping pivoted into aligned rows: one label per primary key,
/// one value row per secondary key. Both key orders follow first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    labels: Vec<String>,
    series: Vec<(String, Vec<f64>)>,
}

impl PivotTable {
    /// Primary-key labels
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Secondary-key rows, each aligned to `labels()`
    #[must_use]
    pub fn series(&self) -> &[(String, Vec<f64>)] {
        &self.series
    }
}

/// Sum a value per key, ordered by first occurrence. Missing values do not
/// contribute; a key seen only with missing values sums to zero.
pub fn group_sum<T, K, V>(rows: &[T], key: K, value: V) -> GroupedSeries
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let mut sums: IndexMap<String, f64> = IndexMap::new();
    for row in rows {
        let entry = sums.entry(key(row)).or_insert(0.0);
        if let Some(v) = value(row) {
            *entry += v;
        }
    }

    GroupedSeries {
        points: sums.into_iter().collect(),
    }
}

/// Average a value per key, ordered by first occurrence. The mean is taken
/// over present values only; a key seen only with missing values averages
/// to zero.
pub fn group_mean<T, K, V>(rows: &[T], key: K, value: V) -> GroupedSeries
where
    K: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let mut acc: IndexMap<String, (f64, u32)> = IndexMap::new();
    for row in rows {
        let entry = acc.entry(key(row)).or_insert((0.0, 0));
        if let Some(v) = value(row) {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    GroupedSeries {
        points: acc
            .into_iter()
            .map(|(label, (sum, count))| {
                let mean = if count == 0 { 0.0 } else { sum / f64::from(count) };
                (label, mean)
            })
            .collect(),
    }
}

/// Sum a value grouped by two keys and pivot the result: one label per
/// primary key, one aligned value row per secondary key.
pub fn group_sum_by_two<T, K1, K2, V>(rows: &[T], primary: K1, secondary: K2, value: V) -> PivotTable
where
    K1: Fn(&T) -> String,
    K2: Fn(&T) -> String,
    V: Fn(&T) -> Option<f64>,
{
    let mut labels: IndexMap<String, usize> = IndexMap::new();
    for row in rows {
        let next = labels.len();
        labels.entry(primary(row)).or_insert(next);
    }

    let mut columns: IndexMap<String, Vec<f64>> = IndexMap::new();
    for row in rows {
        if let Some(&idx) = labels.get(&primary(row)) {
            let series = columns
                .entry(secondary(row))
                .or_insert_with(|| vec![0.0; labels.len()]);
            if let Some(v) = value(row) {
                series[idx] += v;
            }
        }
    }

    PivotTable {
        labels: labels.into_keys().collect(),
        series: columns.into_iter().collect(),
    }
}

/// Scale each value to its share of the series total, in percent. A zero
/// total yields all-zero shares rather than a division by zero.
#[must_use]
pub fn percent_of_total(series: &GroupedSeries) -> GroupedSeries {
    let total = series.total();
    let points = series
        .points()
        .iter()
        .map(|(label, value)| {
            let share = if total == 0.0 { 0.0 } else { value / total * 100.0 };
            (label.clone(), share)
        })
        .collect();

    GroupedSeries { points }
}

/// The `n` largest values, sorted descending. Ties keep input order (the
/// sort is stable); fewer than `n` keys yield a shorter series.
#[must_use]
pub fn top_n(series: &GroupedSeries, n: usize) -> GroupedSeries {
    let mut points = series.points().to_vec();
    points.sort_by(|a, b| b.1.total_cmp(&a.1));
    points.truncate(n);

    GroupedSeries { points }
}

/// Sum a value over all rows, skipping missing values
pub fn sum_of<T, V>(rows: &[T], value: V) -> f64
where
    V: Fn(&T) -> Option<f64>,
{
    rows.iter().filter_map(value).sum()
}

/// Average a value over all rows with a present value; zero when none
pub fn mean_of<T, V>(rows: &[T], value: V) -> f64
where
    V: Fn(&T) -> Option<f64>,
{
    let mut sum = 0.0;
    let mut count = 0u32;
    for row in rows {
        if let Some(v) = value(row) {
            sum += v;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Render a date as the axis label used throughout the dashboard
pub(crate) fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        key: &'static str,
        group: &'static str,
        value: Option<f64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { key: "b", group: "x", value: Some(3.0) },
            Row { key: "a", group: "x", value: Some(1.0) },
            Row { key: "b", group: "y", value: Some(5.0) },
            Row { key: "a", group: "y", value: None },
            Row { key: "c", group: "x", value: Some(4.0) },
        ]
    }

    #[test]
    fn test_group_sum_order_and_totals() {
        let series = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        assert_eq!(
            series.points(),
            &[
                ("b".to_string(), 8.0),
                ("a".to_string(), 1.0),
                ("c".to_string(), 4.0),
            ]
        );
        assert_eq!(series.total(), 13.0);
    }

    #[test]
    fn test_group_mean_skips_missing() {
        let series = group_mean(&rows(), |r| r.key.to_string(), |r| r.value);
        // "a" has one present value (1.0) and one missing
        assert_eq!(series.points()[1], ("a".to_string(), 1.0));
        assert_eq!(series.points()[0], ("b".to_string(), 4.0));
    }

    #[test]
    fn test_group_mean_all_missing_is_zero() {
        let data = vec![Row { key: "a", group: "x", value: None }];
        let series = group_mean(&data, |r| r.key.to_string(), |r| r.value);
        assert_eq!(series.points(), &[("a".to_string(), 0.0)]);
    }

    #[test]
    fn test_group_sum_by_two_alignment() {
        let pivot = group_sum_by_two(
            &rows(),
            |r| r.key.to_string(),
            |r| r.group.to_string(),
            |r| r.value,
        );

        assert_eq!(pivot.labels(), &["b", "a", "c"]);
        assert_eq!(
            pivot.series(),
            &[
                ("x".to_string(), vec![3.0, 1.0, 4.0]),
                ("y".to_string(), vec![5.0, 0.0, 0.0]),
            ]
        );
    }

    #[test]
    fn test_percent_of_total_sums_to_100() {
        let series = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        let shares = percent_of_total(&series);

        let total: f64 = shares.values().iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((shares.values()[0] - 8.0 / 13.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_of_total_zero_total() {
        let series = GroupedSeries::from_points(vec![("a".to_string(), 0.0)]);
        let shares = percent_of_total(&series);
        assert_eq!(shares.values(), vec![0.0]);
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let series = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        let top = top_n(&series, 2);

        assert_eq!(
            top.points(),
            &[("b".to_string(), 8.0), ("c".to_string(), 4.0)]
        );
    }

    #[test]
    fn test_top_n_fewer_keys_than_n() {
        let series = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        assert_eq!(top_n(&series, 10).len(), 3);
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let series = GroupedSeries::from_points(vec![
            ("first".to_string(), 2.0),
            ("second".to_string(), 2.0),
            ("third".to_string(), 1.0),
        ]);
        let top = top_n(&series, 2);
        assert_eq!(top.labels(), vec!["first", "second"]);
    }

    #[test]
    fn test_argmax_tie_is_first_in_input_order() {
        let series = GroupedSeries::from_points(vec![
            ("low".to_string(), 1.0),
            ("first".to_string(), 5.0),
            ("second".to_string(), 5.0),
        ]);
        assert_eq!(series.argmax(), Some("first"));
        assert_eq!(GroupedSeries::from_points(vec![]).argmax(), None);
    }

    #[test]
    fn test_scalar_reductions() {
        let data = rows();
        assert_eq!(sum_of(&data, |r| r.value), 13.0);
        assert!((mean_of(&data, |r| r.value) - 13.0 / 4.0).abs() < 1e-9);
        assert_eq!(mean_of(&[] as &[Row], |r| r.value), 0.0);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        let a = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        let b = group_sum(&rows(), |r| r.key.to_string(), |r| r.value);
        assert_eq!(a, b);
    }
}
