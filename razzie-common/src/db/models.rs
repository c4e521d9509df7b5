//! Record models for the movies table

use serde::{Deserialize, Serialize};

/// A film award record as stored in the movies table.
///
/// `winner` is free-form text; only the literal value "yes" marks a
/// winning record anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i64,
    pub year: i64,
    pub title: String,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: Option<String>,
}

/// Payload for insert and full update, validated at the API boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieInput {
    pub title: String,
    pub year: i64,
    #[serde(default)]
    pub studios: Option<String>,
    #[serde(default)]
    pub producers: Option<String>,
    #[serde(default)]
    pub winner: Option<String>,
}

/// Typed partial update. Produced by boundary validation from a raw
/// field map; only fields present here ever reach the UPDATE statement.
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: Option<String>,
}

impl MoviePatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.studios.is_none()
            && self.producers.is_none()
            && self.winner.is_none()
    }
}
