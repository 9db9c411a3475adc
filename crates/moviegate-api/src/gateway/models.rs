//! Canonical movie records produced by the gateway.

use serde::Serialize;

use super::catalog::Category;

/// A genre tag.
///
/// `id` is the position in the provider's genre list, not a stable
/// catalog identifier; the same genre may get different ids on
/// different records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    /// Positional identifier.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Canonical movie record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    /// Numeric IMDb id with the `tt` prefix stripped.
    pub id: u64,
    /// Provider identifier including the prefix (`tt0111161`).
    pub imdb_id: String,
    /// Title, `Unknown Title` when the provider omits it.
    pub title: String,
    /// Plot summary, empty when absent.
    pub overview: String,
    /// Poster URL.
    pub poster_path: Option<String>,
    /// Backdrop URL. OMDb has no backdrops, so this mirrors the poster.
    pub backdrop_path: Option<String>,
    /// IMDb rating in `[0, 10]`, 0 when unknown.
    pub vote_average: f64,
    /// `YYYY-01-01` built from the release year, empty when unknown.
    pub release_date: String,
    /// Genres in provider order.
    pub genres: Vec<Genre>,
    /// Provider media type (`movie`, `series`, `episode`), empty when absent.
    pub media_type: String,
}

/// Canonical detail record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    /// Base record.
    #[serde(flatten)]
    pub movie: Movie,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Original title. OMDb only has one title.
    pub original_title: String,
    /// Original language code.
    pub original_language: String,
    /// IMDb vote count.
    pub vote_count: u64,
    /// Rated `R` or `NC-17`.
    pub adult: bool,
    /// MPAA rating text, empty when absent.
    pub content_rating: String,
    /// Always 0; OMDb has no budget data.
    pub budget: u64,
    /// Official website, empty when absent.
    pub homepage: String,
    /// Always 0; OMDb has no popularity metric.
    pub popularity: f64,
    /// Production companies.
    pub production_companies: Vec<String>,
    /// Production countries.
    pub production_countries: Vec<String>,
    /// Box office gross in whole dollars.
    pub revenue: u64,
    /// Spoken languages.
    pub spoken_languages: Vec<String>,
    /// Release status.
    pub status: String,
    /// Always empty; OMDb has no taglines.
    pub tagline: String,
    /// Always `false`.
    pub video: bool,
    /// Directors.
    pub directors: Vec<String>,
    /// Writers.
    pub writers: Vec<String>,
    /// Lead cast.
    pub cast: Vec<String>,
    /// Awards summary, empty when absent.
    pub awards: String,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    /// Normalized results; records that failed normalization are omitted.
    pub movies: Vec<Movie>,
    /// Total matches reported by the provider.
    pub total_results: u64,
    /// Page number that was requested.
    pub page: u32,
    /// Provider refusal message (e.g. `Too many results.`).
    ///
    /// `None` for both normal pages and the plain "no match" answer.
    pub error: Option<String>,
}

impl SearchPage {
    /// An empty page with no error.
    #[must_use]
    pub const fn empty(page: u32) -> Self {
        Self {
            movies: Vec::new(),
            total_results: 0,
            page,
            error: None,
        }
    }
}

/// Outcome of a category listing, including the lookups that did not
/// produce a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBatch {
    /// Category that was resolved.
    pub category: Category,
    /// Number of identifiers looked up.
    pub requested: usize,
    /// Resolved movies in catalog order.
    pub movies: Vec<Movie>,
    /// Lookups that returned an error.
    pub failed: usize,
    /// Lookups that were rejected or reported as not found.
    pub missing: usize,
}

impl CategoryBatch {
    /// Emits one summary event; `warn` when any lookup failed.
    pub fn log_summary(&self) {
        if self.failed > 0 {
            tracing::warn!(
                category = %self.category,
                requested = self.requested,
                resolved = self.movies.len(),
                failed = self.failed,
                missing = self.missing,
                "Category lookups partially failed"
            );
        } else {
            tracing::info!(
                category = %self.category,
                requested = self.requested,
                resolved = self.movies.len(),
                missing = self.missing,
                "Category resolved"
            );
        }
    }
}
