use std::collections::HashMap;

use crate::types::{CommitRecord, MonthBucket, MonthlySeries};

/// Bucket commit records by calendar month and count them.
///
/// Input order is irrelevant: records are tallied into a map keyed by month and
/// the distinct months are then sorted ascending. The sum of the returned
/// counts equals `records.len()`.
pub fn aggregate_by_month(records: &[CommitRecord]) -> MonthlySeries {
    let mut counts: HashMap<MonthBucket, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.month()).or_insert(0) += 1;
    }

    let mut points: Vec<(MonthBucket, usize)> = counts.into_iter().collect();
    points.sort_unstable_by_key(|(bucket, _)| *bucket);

    MonthlySeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn records(dates: &[(i32, u32, u32)]) -> Vec<CommitRecord> {
        dates
            .iter()
            .map(|&(y, m, d)| CommitRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
            .collect()
    }

    #[test]
    fn test_counts_per_month() {
        let input = records(&[(2024, 1, 5), (2024, 1, 20), (2024, 2, 2)]);

        let series = aggregate_by_month(&input);
        assert_eq!(
            series.points,
            vec![
                (MonthBucket { year: 2024, month: 1 }, 2),
                (MonthBucket { year: 2024, month: 2 }, 1),
            ]
        );
    }

    #[test]
    fn test_total_matches_record_count() {
        let input = records(&[
            (2023, 11, 30),
            (2023, 12, 1),
            (2023, 12, 31),
            (2024, 1, 1),
            (2024, 1, 15),
            (2024, 1, 31),
            (2024, 6, 6),
        ]);

        let series = aggregate_by_month(&input);
        assert_eq!(series.total_commits(), input.len());
    }

    #[test]
    fn test_order_independence() {
        let forward = records(&[(2024, 1, 5), (2024, 2, 2), (2024, 1, 20), (2023, 12, 9)]);
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(aggregate_by_month(&forward), aggregate_by_month(&reversed));
    }

    #[test]
    fn test_sorted_ascending_without_duplicates() {
        let input = records(&[
            (2024, 3, 1),
            (2022, 7, 14),
            (2024, 1, 2),
            (2022, 7, 4),
            (2023, 12, 25),
        ]);

        let series = aggregate_by_month(&input);
        for pair in series.points.windows(2) {
            assert!(pair[0].0 < pair[1].0, "buckets must be strictly ascending");
        }
    }

    #[test]
    fn test_empty_input() {
        let series = aggregate_by_month(&[]);
        assert!(series.is_empty());
        assert_eq!(series.total_commits(), 0);
    }

    #[test]
    fn test_single_record() {
        let input = records(&[(2024, 5, 17)]);

        let series = aggregate_by_month(&input);
        assert_eq!(
            series.points,
            vec![(MonthBucket { year: 2024, month: 5 }, 1)]
        );
    }
}
