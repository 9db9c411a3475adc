//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::OmdbError;
use super::imdb_id::ImdbId;
use super::types::{OmdbRecord, OmdbSearchResponse, PlotLength};

/// OMDb API trait.
///
/// Abstracts the three provider queries for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Looks up a single title by exact name (`?t=`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request times out, fails in transport,
    /// returns a non-success status, or the body is not valid JSON.
    async fn title(&self, title: &str) -> Result<OmdbRecord, OmdbError>;

    /// Looks up a single title by IMDb identifier (`?i=`), with the
    /// requested plot length.
    ///
    /// # Errors
    ///
    /// Returns an error if the request times out, fails in transport,
    /// returns a non-success status, or the body is not valid JSON.
    async fn by_id(&self, imdb_id: &ImdbId, plot: PlotLength) -> Result<OmdbRecord, OmdbError>;

    /// Free-text search, one page of up to ten items (`?s=&page=`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request times out, fails in transport,
    /// returns a non-success status, or the body is not valid JSON.
    async fn search(&self, query: &str, page: u32) -> Result<OmdbSearchResponse, OmdbError>;
}
