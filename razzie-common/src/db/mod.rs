//! Database access layer: connection setup, schema bootstrap, seed
//! ingestion, and the record models.

mod ingest;
mod init;
pub mod models;

pub use ingest::seed_from_csv;
pub use init::{create_schema, init_database};
