//! Win interval computation and min/max report extraction

use serde::Serialize;

use super::wins::ProducerWins;

/// Gap between two consecutive wins of one producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    pub producer: String,
    pub interval: i64,
    pub previous_win: i64,
    pub following_win: i64,
}

/// Producers holding the globally smallest and largest win gaps.
/// Both lists are empty when no producer has two distinct winning years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntervalReport {
    pub min: Vec<IntervalRecord>,
    pub max: Vec<IntervalRecord>,
}

/// One record per adjacent pair of a producer's sorted win years.
///
/// A producer with k distinct years contributes exactly k-1 records;
/// producers with a single win contribute nothing.
pub fn compute_intervals(wins: &ProducerWins) -> Vec<IntervalRecord> {
    let mut intervals = Vec::new();

    for (producer, years) in wins {
        let mut years = years.clone();
        years.sort_unstable();

        for pair in years.windows(2) {
            intervals.push(IntervalRecord {
                producer: producer.clone(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    intervals
}

/// Select every record tied at the smallest and at the largest interval,
/// preserving discovery order within each list.
pub fn extreme_intervals(intervals: Vec<IntervalRecord>) -> IntervalReport {
    let Some(min_interval) = intervals.iter().map(|r| r.interval).min() else {
        return IntervalReport::default();
    };
    let max_interval = intervals
        .iter()
        .map(|r| r.interval)
        .max()
        .unwrap_or(min_interval);

    let min = intervals
        .iter()
        .filter(|r| r.interval == min_interval)
        .cloned()
        .collect();
    let max = intervals
        .into_iter()
        .filter(|r| r.interval == max_interval)
        .collect();

    IntervalReport { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::collect_producer_wins;

    fn wins(rows: &[(&str, &str)]) -> ProducerWins {
        collect_producer_wins(rows.iter().copied())
    }

    fn record(producer: &str, previous: i64, following: i64) -> IntervalRecord {
        IntervalRecord {
            producer: producer.to_string(),
            interval: following - previous,
            previous_win: previous,
            following_win: following,
        }
    }

    #[test]
    fn producer_with_k_years_yields_k_minus_one_records() {
        let wins = wins(&[
            ("A", "1990"),
            ("A", "1994"),
            ("A", "2001"),
            ("B", "1985"),
        ]);

        let intervals = compute_intervals(&wins);
        assert_eq!(intervals.len(), 2, "3 years give 2 gaps, 1 year gives 0");
        assert_eq!(intervals[0], record("A", 1990, 1994));
        assert_eq!(intervals[1], record("A", 1994, 2001));
    }

    #[test]
    fn intervals_are_always_positive() {
        let wins = wins(&[
            ("A", "2001"),
            ("A", "1990"),
            ("A", "1994"),
            ("B", "1985"),
            ("B", "1985"),
        ]);

        for interval in compute_intervals(&wins) {
            assert!(interval.interval > 0);
            assert_eq!(
                interval.interval,
                interval.following_win - interval.previous_win
            );
        }
    }

    #[test]
    fn empty_wins_produce_empty_report() {
        let report = extreme_intervals(Vec::new());
        assert!(report.min.is_empty());
        assert!(report.max.is_empty());
    }

    #[test]
    fn single_pair_appears_in_both_min_and_max() {
        let intervals = compute_intervals(&wins(&[("A", "1990"), ("A", "1999")]));
        let report = extreme_intervals(intervals);

        assert_eq!(report.min, vec![record("A", 1990, 1999)]);
        assert_eq!(report.max, vec![record("A", 1990, 1999)]);
    }

    #[test]
    fn ties_at_an_extreme_are_all_reported() {
        let intervals = compute_intervals(&wins(&[
            ("A", "1990"),
            ("A", "1991"),
            ("B", "2000"),
            ("B", "2001"),
            ("C", "1980"),
            ("C", "1985"),
        ]));
        let report = extreme_intervals(intervals);

        assert_eq!(
            report.min,
            vec![record("A", 1990, 1991), record("B", 2000, 2001)]
        );
        assert_eq!(report.max, vec![record("C", 1980, 1985)]);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(record("Joel Silver", 1990, 1991)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "producer": "Joel Silver",
                "interval": 1,
                "previousWin": 1990,
                "followingWin": 1991
            })
        );
    }
}
