//! Win aggregation: winning credit rows folded into per-producer years

use indexmap::IndexMap;
use tracing::warn;

use super::producers::extract_producers;

/// Mapping from producer name to the distinct years that producer appears
/// on a winning record. Insertion-ordered so downstream reports come out
/// in a reproducible, input-derived order.
pub type ProducerWins = IndexMap<String, Vec<i64>>;

/// Fold winning (producers, year) rows into per-producer distinct years.
///
/// The year arrives as text straight from storage; a row whose year does
/// not parse is dropped on its own rather than failing the whole
/// aggregation. Years are deduplicated per producer, so a producer
/// credited on two winning films of the same year (or twice on one film)
/// cannot later produce a zero-length interval.
pub fn collect_producer_wins<'a, I>(rows: I) -> ProducerWins
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut wins = ProducerWins::new();

    for (producers, year_text) in rows {
        let year: i64 = match year_text.trim().parse() {
            Ok(year) => year,
            Err(_) => {
                warn!(
                    "Ignoring winning record with non-integer year {:?}",
                    year_text
                );
                continue;
            }
        };

        for producer in extract_producers(producers) {
            let years = wins.entry(producer).or_default();
            if !years.contains(&year) {
                years.push(year);
            }
        }
    }

    wins
}
