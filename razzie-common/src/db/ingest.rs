//! Seed CSV ingestion
//!
//! Loads the semicolon-separated awards list into the movies table on
//! first startup. A bad row is skipped on its own; it never aborts the
//! rest of the load.

use crate::Result;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{info, warn};

/// Seed the movies table from a semicolon-separated CSV file with a
/// `year;title;studios;producers;winner` header.
///
/// Returns the number of rows inserted. Does nothing when the table
/// already has rows or when the file does not exist.
pub async fn seed_from_csv(pool: &SqlitePool, csv_path: &Path) -> Result<usize> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Movies table already has {} rows, skipping CSV seed", existing);
        return Ok(0);
    }

    if !csv_path.exists() {
        info!(
            "No seed CSV at {}, starting with an empty movies table",
            csv_path.display()
        );
        return Ok(0);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(csv_path)?;

    let mut inserted = 0usize;
    for (index, record) in reader.records().enumerate() {
        // Header is line 1, first record line 2
        let line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable CSV record at line {}: {}", line, e);
                continue;
            }
        };

        let year_text = record.get(0).unwrap_or("").trim();
        let year: i64 = match year_text.parse() {
            Ok(year) => year,
            Err(_) => {
                warn!(
                    "Skipping CSV record at line {}: year {:?} is not an integer",
                    line, year_text
                );
                continue;
            }
        };

        let title = record.get(1).unwrap_or("").trim();
        if title.is_empty() {
            warn!("Skipping CSV record at line {}: empty title", line);
            continue;
        }

        sqlx::query(
            "INSERT INTO movies (year, title, studios, producers, winner) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(year)
        .bind(title)
        .bind(non_empty(record.get(2)))
        .bind(non_empty(record.get(3)))
        .bind(non_empty(record.get(4)))
        .execute(pool)
        .await?;

        inserted += 1;
    }

    info!("Seeded {} movies from {}", inserted, csv_path.display());
    Ok(inserted)
}

/// Trimmed field content, or None for a missing/blank field
fn non_empty(field: Option<&str>) -> Option<String> {
    field
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
