//! Boundary validation for create, replace, and patch payloads
//!
//! Handlers reject bad input here so the store and the analytics core
//! never re-check it. Every failure in a payload is collected into one
//! human-readable message naming the offending fields.

use razzie_common::db::models::{MovieInput, MoviePatch};
use razzie_common::{Error, Result};
use serde_json::{Map, Value};

/// Earliest acceptable award year
pub const MIN_YEAR: i64 = 1900;

/// Validate a create/replace payload
pub fn validate_movie_input(input: &MovieInput) -> Result<()> {
    let mut problems = Vec::new();

    if input.title.trim().is_empty() {
        problems.push("title must not be empty".to_string());
    }
    if input.year < MIN_YEAR {
        problems.push(format!("year must be at least {}", MIN_YEAR));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidInput(problems.join(", ")))
    }
}

/// Convert a raw patch body into a typed [`MoviePatch`].
///
/// Rejects an empty field set, unknown field names, and wrongly typed
/// values, enumerating every offender.
pub fn validate_patch(fields: &Map<String, Value>) -> Result<MoviePatch> {
    if fields.is_empty() {
        return Err(Error::InvalidInput("no fields to update".to_string()));
    }

    let mut patch = MoviePatch::default();
    let mut problems = Vec::new();

    for (field, value) in fields {
        match field.as_str() {
            "title" => match value.as_str() {
                Some(title) if !title.trim().is_empty() => patch.title = Some(title.to_string()),
                _ => problems.push("title must be a non-empty string".to_string()),
            },
            "year" => match value.as_i64() {
                Some(year) if year >= MIN_YEAR => patch.year = Some(year),
                _ => problems.push(format!("year must be an integer of at least {}", MIN_YEAR)),
            },
            "studios" => assign_text(value, &mut patch.studios, "studios", &mut problems),
            "producers" => assign_text(value, &mut patch.producers, "producers", &mut problems),
            "winner" => assign_text(value, &mut patch.winner, "winner", &mut problems),
            unknown => problems.push(format!("unknown field: {}", unknown)),
        }
    }

    if problems.is_empty() {
        Ok(patch)
    } else {
        Err(Error::InvalidInput(problems.join(", ")))
    }
}

fn assign_text(value: &Value, slot: &mut Option<String>, field: &str, problems: &mut Vec<String>) {
    match value.as_str() {
        Some(text) => *slot = Some(text.to_string()),
        None => problems.push(format!("{} must be a string", field)),
    }
}
