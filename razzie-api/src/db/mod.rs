//! Storage queries owned by the service

mod movies;

pub use movies::MovieStore;
