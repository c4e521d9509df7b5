//! Movie record persistence
//!
//! All SQL for the movies table lives here. Every statement binds its
//! values; the patch path assembles its UPDATE from fixed column
//! fragments only, so caller-supplied field names never reach SQL text.

use razzie_common::db::models::{Movie, MovieInput, MoviePatch};
use razzie_common::{Error, Result};
use sqlx::SqlitePool;

const SELECT_MOVIE: &str = "SELECT id, year, title, studios, producers, winner FROM movies";

/// Storage handle for movie records. Cheap to clone; clones share the
/// underlying pool.
#[derive(Clone)]
pub struct MovieStore {
    pool: SqlitePool,
}

impl MovieStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return it with its assigned id
    pub async fn insert(&self, movie: &MovieInput) -> Result<Movie> {
        let result = sqlx::query(
            "INSERT INTO movies (title, year, studios, producers, winner) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(&movie.studios)
        .bind(&movie.producers)
        .bind(&movie.winner)
        .execute(&self.pool)
        .await?;

        self.get(result.last_insert_rowid()).await
    }

    /// Point lookup by id
    pub async fn get(&self, id: i64) -> Result<Movie> {
        sqlx::query_as::<_, Movie>(&format!("{} WHERE id = ?", SELECT_MOVIE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("movie {}", id)))
    }

    /// List records in primary-key order
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(&format!(
            "{} ORDER BY id LIMIT ? OFFSET ?",
            SELECT_MOVIE
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(movies)
    }

    /// Overwrite every mutable field of an existing record
    pub async fn replace(&self, id: i64, movie: &MovieInput) -> Result<Movie> {
        let result = sqlx::query(
            "UPDATE movies SET title = ?, year = ?, studios = ?, producers = ?, winner = ? WHERE id = ?",
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(&movie.studios)
        .bind(&movie.producers)
        .bind(&movie.winner)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("movie {}", id)));
        }

        self.get(id).await
    }

    /// Apply a validated partial update and return the merged record.
    ///
    /// The SET clause is built by joining fixed fragments for the fields
    /// present in the patch; values are bound in the same order.
    pub async fn patch(&self, id: i64, patch: &MoviePatch) -> Result<Movie> {
        if patch.is_empty() {
            return Err(Error::InvalidInput("no fields to update".to_string()));
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        if patch.title.is_some() {
            assignments.push("title = ?");
        }
        if patch.year.is_some() {
            assignments.push("year = ?");
        }
        if patch.studios.is_some() {
            assignments.push("studios = ?");
        }
        if patch.producers.is_some() {
            assignments.push("producers = ?");
        }
        if patch.winner.is_some() {
            assignments.push("winner = ?");
        }

        let sql = format!("UPDATE movies SET {} WHERE id = ?", assignments.join(", "));
        let mut query = sqlx::query(&sql);
        if let Some(title) = &patch.title {
            query = query.bind(title);
        }
        if let Some(year) = patch.year {
            query = query.bind(year);
        }
        if let Some(studios) = &patch.studios {
            query = query.bind(studios);
        }
        if let Some(producers) = &patch.producers {
            query = query.bind(producers);
        }
        if let Some(winner) = &patch.winner {
            query = query.bind(winner);
        }

        let result = query.bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("movie {}", id)));
        }

        self.get(id).await
    }

    /// Delete a record by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("movie {}", id)));
        }

        Ok(())
    }

    /// Winner scan backing the interval analytic: producer credits and
    /// year for records whose winner marker is exactly "yes", ordered by
    /// year ascending.
    ///
    /// The year is projected as text so one malformed stored value fails
    /// only that row's parse downstream instead of aborting the scan.
    pub async fn winning_movies(&self) -> Result<Vec<(String, String)>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT COALESCE(producers, ''), CAST(year AS TEXT) FROM movies \
             WHERE winner = 'yes' ORDER BY year ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use razzie_common::db::create_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> MovieStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        create_schema(&pool).await.expect("schema");
        MovieStore::new(pool)
    }

    fn input(title: &str, year: i64, producers: Option<&str>, winner: Option<&str>) -> MovieInput {
        MovieInput {
            title: title.to_string(),
            year,
            studios: None,
            producers: producers.map(str::to_string),
            winner: winner.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = test_store().await;

        let first = store
            .insert(&input("Cruising", 1980, None, None))
            .await
            .expect("insert");
        let second = store
            .insert(&input("Mommie Dearest", 1981, None, Some("yes")))
            .await
            .expect("insert");

        assert!(second.id > first.id);
        assert_eq!(second.title, "Mommie Dearest");
        assert_eq!(second.winner.as_deref(), Some("yes"));
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let store = test_store().await;

        match store.get(42).await {
            Err(Error::NotFound(what)) => assert!(what.contains("42")),
            other => panic!("expected NotFound, got {:?}", other.map(|m| m.id)),
        }
    }

    #[tokio::test]
    async fn list_respects_limit_and_offset() {
        let store = test_store().await;
        for year in 1980..1985 {
            store
                .insert(&input(&format!("Film {}", year), year, None, None))
                .await
                .expect("insert");
        }

        let page = store.list(2, 2).await.expect("list");
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].year, 1982);
        assert_eq!(page[1].year, 1983);
    }

    #[tokio::test]
    async fn patch_updates_only_named_fields() {
        let store = test_store().await;
        let movie = store
            .insert(&input("Bolero", 1984, Some("Bo Derek"), None))
            .await
            .expect("insert");

        let patch = MoviePatch {
            winner: Some("yes".to_string()),
            ..MoviePatch::default()
        };
        let updated = store.patch(movie.id, &patch).await.expect("patch");

        assert_eq!(updated.winner.as_deref(), Some("yes"));
        assert_eq!(updated.title, "Bolero");
        assert_eq!(updated.producers.as_deref(), Some("Bo Derek"));
    }

    #[tokio::test]
    async fn patch_rejects_empty_field_set() {
        let store = test_store().await;
        let movie = store
            .insert(&input("Bolero", 1984, None, None))
            .await
            .expect("insert");

        match store.patch(movie.id, &MoviePatch::default()).await {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("no fields")),
            other => panic!("expected InvalidInput, got {:?}", other.map(|m| m.id)),
        }
    }

    #[tokio::test]
    async fn winning_scan_filters_and_orders_by_year() {
        let store = test_store().await;
        store
            .insert(&input("Later Winner", 1991, Some("B"), Some("yes")))
            .await
            .expect("insert");
        store
            .insert(&input("Not A Winner", 1980, Some("C"), Some("no")))
            .await
            .expect("insert");
        store
            .insert(&input("Boolean Winner", 1982, Some("D"), Some("true")))
            .await
            .expect("insert");
        store
            .insert(&input("Early Winner", 1981, Some("A"), Some("yes")))
            .await
            .expect("insert");

        let rows = store.winning_movies().await.expect("scan");
        assert_eq!(
            rows,
            vec![
                ("A".to_string(), "1981".to_string()),
                ("B".to_string(), "1991".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn winning_scan_projects_null_producers_as_empty() {
        let store = test_store().await;
        store
            .insert(&input("No Credits", 1985, None, Some("yes")))
            .await
            .expect("insert");

        let rows = store.winning_movies().await.expect("scan");
        assert_eq!(rows, vec![("".to_string(), "1985".to_string())]);
    }
}
