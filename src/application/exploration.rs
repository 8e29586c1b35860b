//! Dataset exploration: descriptive statistics for the charts.
//!
//! Computed once after the dataset loads; the table is immutable so the
//! aggregates never go stale.

use std::collections::BTreeMap;

use crate::domain::DatasetTable;

/// Number of raw rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 10;

/// Aggregates and preview data backing the exploration views.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationStats {
    /// Count of records per age, ascending by age
    pub age_counts: Vec<(i64, u64)>,

    /// Count of records per sex label, descending by count.
    /// Rows whose `sex` value is neither 0 nor 1 are excluded.
    pub sex_counts: Vec<(&'static str, u64)>,

    /// Mean of `target` per age, ascending by age; `None` when the table
    /// has no `target` column
    pub target_by_age: Option<Vec<(i64, f64)>>,

    /// Column names, for the preview header
    pub columns: Vec<String>,

    /// First rows of the raw table
    pub preview: Vec<Vec<f64>>,
}

/// Compute descriptive statistics over the loaded dataset.
#[must_use]
pub fn explore(table: &DatasetTable) -> ExplorationStats {
    let ages: Vec<i64> = table
        .column("age")
        .unwrap_or_default()
        .iter()
        .map(|a| a.round() as i64)
        .collect();

    let mut age_histogram: BTreeMap<i64, u64> = BTreeMap::new();
    for age in &ages {
        *age_histogram.entry(*age).or_default() += 1;
    }
    let age_counts: Vec<(i64, u64)> = age_histogram.into_iter().collect();

    let mut male = 0u64;
    let mut female = 0u64;
    for value in table.column("sex").unwrap_or_default() {
        if value == 1.0 {
            male += 1;
        } else if value == 0.0 {
            female += 1;
        }
    }
    let mut sex_counts = vec![("Male", male), ("Female", female)];
    sex_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let target_by_age = table.column("target").map(|targets| {
        let mut sums: BTreeMap<i64, (f64, u64)> = BTreeMap::new();
        for (age, target) in ages.iter().zip(targets.iter()) {
            let entry = sums.entry(*age).or_insert((0.0, 0));
            entry.0 += target;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(age, (sum, count))| (age, sum / count as f64))
            .collect()
    });

    ExplorationStats {
        age_counts,
        sex_counts,
        target_by_age,
        columns: table.columns().to_vec(),
        preview: table.head(PREVIEW_ROWS).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<f64>>, with_target: bool) -> DatasetTable {
        let mut columns = vec!["age".to_string(), "sex".to_string()];
        if with_target {
            columns.push("target".to_string());
        }
        DatasetTable::new(columns, rows).expect("valid table")
    }

    #[test]
    fn test_age_counts_sorted_ascending() {
        let stats = explore(&table(
            vec![
                vec![63.0, 1.0],
                vec![37.0, 1.0],
                vec![63.0, 0.0],
                vec![41.0, 1.0],
            ],
            false,
        ));

        assert_eq!(stats.age_counts, vec![(37, 1), (41, 1), (63, 2)]);
    }

    #[test]
    fn test_sex_counts_labeled_and_sorted_by_count() {
        let stats = explore(&table(
            vec![vec![63.0, 0.0], vec![37.0, 0.0], vec![41.0, 1.0]],
            false,
        ));

        assert_eq!(stats.sex_counts, vec![("Female", 2), ("Male", 1)]);
    }

    #[test]
    fn test_non_binary_sex_values_excluded() {
        let stats = explore(&table(vec![vec![63.0, 1.0], vec![37.0, 2.0]], false));

        assert_eq!(stats.sex_counts, vec![("Male", 1), ("Female", 0)]);
    }

    #[test]
    fn test_mean_target_by_age() {
        let stats = explore(&table(
            vec![
                vec![63.0, 1.0, 1.0],
                vec![63.0, 0.0, 0.0],
                vec![41.0, 1.0, 1.0],
            ],
            true,
        ));

        let target_by_age = stats.target_by_age.expect("target column present");
        assert_eq!(target_by_age, vec![(41, 1.0), (63, 0.5)]);
    }

    #[test]
    fn test_missing_target_omits_line_series() {
        let stats = explore(&table(vec![vec![63.0, 1.0]], false));
        assert!(stats.target_by_age.is_none());

        // The other aggregates still materialize.
        assert_eq!(stats.age_counts, vec![(63, 1)]);
        assert_eq!(stats.preview.len(), 1);
    }

    #[test]
    fn test_preview_caps_at_ten_rows() {
        let rows: Vec<Vec<f64>> = (0..25).map(|i| vec![40.0 + i as f64, 1.0]).collect();
        let stats = explore(&table(rows, false));

        assert_eq!(stats.preview.len(), PREVIEW_ROWS);
        assert_eq!(stats.columns, vec!["age", "sex"]);
    }
}
