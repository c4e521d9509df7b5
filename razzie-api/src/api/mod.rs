//! HTTP API handlers for razzie-api

pub mod error;
pub mod health;
pub mod intervals;
pub mod movies;

pub use error::ApiError;
pub use health::health_routes;
pub use intervals::producer_intervals;
pub use movies::{create_movie, delete_movie, get_movie, list_movies, patch_movie, replace_movie};
