//! Movie data gateway.
//!
//! Validates identifiers, calls the OMDb client, and normalizes its
//! responses into [`Movie`] and [`MovieDetails`] records. Category
//! browsing resolves a configured id list with concurrent lookups.

mod catalog;
mod models;
mod normalize;
mod service;

pub use catalog::{Category, CategoryCatalog, ParseCategoryError};
pub use models::{CategoryBatch, Genre, Movie, MovieDetails, SearchPage};
pub use normalize::{
    UNKNOWN_TITLE, normalize_details, normalize_movie, parse_genres, parse_runtime,
    release_date_from_year,
};
pub use service::MovieGateway;
