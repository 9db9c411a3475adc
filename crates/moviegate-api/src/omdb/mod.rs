//! OMDb API client module.
//!
//! Handles HTTP requests to the OMDb endpoint and decodes the
//! provider's JSON into raw records.

mod api;
mod client;
mod error;
mod imdb_id;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalOmdbApi, OmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_TIMEOUT, OmdbClient, OmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::OmdbError;
pub use imdb_id::{IMDB_ID_PREFIX, ImdbId, numeric_id};
#[allow(clippy::module_name_repetitions)]
pub use types::{OmdbRating, OmdbRecord, OmdbSearchResponse, PlotLength};
