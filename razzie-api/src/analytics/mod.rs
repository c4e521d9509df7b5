//! Producer win-interval analytics
//!
//! Pure aggregation over rows already filtered to winning records. None
//! of these functions touch storage or transport types; the single
//! winner scan is done by the caller and handed in as plain data.

pub mod intervals;
pub mod producers;
pub mod wins;

pub use intervals::{compute_intervals, extreme_intervals, IntervalRecord, IntervalReport};
pub use producers::extract_producers;
pub use wins::{collect_producer_wins, ProducerWins};

/// Full producer win-interval report from winning (producers, year) rows.
///
/// Rows arrive in scan order; the report's min/max lists preserve the
/// discovery order derived from it.
pub fn producer_win_intervals(rows: &[(String, String)]) -> IntervalReport {
    let wins = collect_producer_wins(rows.iter().map(|(p, y)| (p.as_str(), y.as_str())));
    extreme_intervals(compute_intervals(&wins))
}
