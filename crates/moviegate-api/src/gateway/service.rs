//! `MovieGateway` - the application's only entry point to the catalog.

use futures::future::join_all;
use tracing::instrument;

use super::catalog::{Category, CategoryCatalog};
use super::models::{CategoryBatch, Movie, MovieDetails, SearchPage};
use super::normalize::{normalize_details, normalize_movie};
use crate::omdb::{ImdbId, LocalOmdbApi, OmdbError, OmdbRecord, PlotLength};

/// Provider message for a plain "no match" answer.
const NOT_FOUND_MESSAGE: &str = "Movie not found!";

/// Movie data gateway.
///
/// Builds fresh records on every call; nothing is cached and identical
/// in-flight requests are not merged.
#[derive(Debug)]
pub struct MovieGateway<A> {
    /// Provider API.
    api: A,
    /// Category membership lists.
    catalog: CategoryCatalog,
}

impl<A: LocalOmdbApi> MovieGateway<A> {
    /// Creates a gateway over `api` with the given category catalog.
    #[must_use]
    pub const fn new(api: A, catalog: CategoryCatalog) -> Self {
        Self { api, catalog }
    }

    /// Category catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Looks up a movie by exact title.
    ///
    /// Returns `Ok(None)` when the provider has no match or the title is
    /// blank (no request is sent for a blank title).
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, non-success HTTP
    /// status, or an undecodable body.
    #[instrument(skip(self))]
    pub async fn lookup_by_title(&self, title: &str) -> Result<Option<Movie>, OmdbError> {
        let title = title.trim();
        if title.is_empty() {
            tracing::warn!("Empty title, skipping lookup");
            return Ok(None);
        }

        let record = self.api.title(title).await?;
        Ok(found(&record).and_then(normalize_movie))
    }

    /// Looks up a movie by IMDb id, with or without the `tt` prefix.
    ///
    /// Malformed ids return `Ok(None)` without a request.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, non-success HTTP
    /// status, or an undecodable body.
    #[instrument(skip(self))]
    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<Movie>, OmdbError> {
        let Some(imdb_id) = ImdbId::parse(id) else {
            tracing::warn!(id, "Invalid IMDb ID format");
            return Ok(None);
        };

        let record = self.api.by_id(&imdb_id, PlotLength::Short).await?;
        Ok(found(&record).and_then(normalize_movie))
    }

    /// Fetches the detail record for an IMDb id.
    ///
    /// Same id handling as [`Self::lookup_by_id`]; requests the full plot.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, non-success HTTP
    /// status, or an undecodable body.
    #[instrument(skip(self))]
    pub async fn get_details(&self, id: &str) -> Result<Option<MovieDetails>, OmdbError> {
        let Some(imdb_id) = ImdbId::parse(id) else {
            tracing::warn!(id, "Invalid IMDb ID format");
            return Ok(None);
        };

        let record = self.api.by_id(&imdb_id, PlotLength::Full).await?;
        Ok(found(&record).and_then(normalize_details))
    }

    /// Searches titles, one provider page at a time.
    ///
    /// "No match" is an empty page without error. Other provider refusals
    /// (e.g. `Too many results.`) are an empty page carrying the message.
    /// Items without a usable id are dropped. A blank query returns an
    /// empty page without a request; page 0 is treated as page 1.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, transport failure, non-success HTTP
    /// status, or an undecodable body.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage, OmdbError> {
        let page = page.max(1);
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchPage::empty(page));
        }

        let response = self.api.search(query, page).await?;
        if !response.is_found() {
            let error = response
                .error
                .filter(|message| message.as_str() != NOT_FOUND_MESSAGE);
            tracing::debug!(error = ?error, "Search returned no results");
            return Ok(SearchPage { error, ..SearchPage::empty(page) });
        }

        let movies: Vec<Movie> = response.search.iter().filter_map(normalize_movie).collect();
        let dropped = response.search.len().saturating_sub(movies.len());
        if dropped > 0 {
            tracing::debug!(dropped, "Dropped search items without a usable IMDb ID");
        }

        let total_results = response
            .total_results
            .as_deref()
            .and_then(|total| total.trim().parse().ok())
            .unwrap_or(0);

        Ok(SearchPage {
            movies,
            total_results,
            page,
            error: None,
        })
    }

    /// Resolves a category with one concurrent lookup per identifier and
    /// reports how many lookups failed or came back empty.
    ///
    /// Waits for every lookup to settle; a failing lookup never cancels
    /// its siblings.
    #[instrument(skip(self))]
    pub async fn list_by_category_report(
        &self,
        category: Category,
        limit: Option<usize>,
    ) -> CategoryBatch {
        let ids: Vec<&str> = self.catalog.ids(category, limit).collect();
        let outcomes = join_all(ids.iter().map(|id| self.lookup_by_id(id))).await;

        let mut batch = CategoryBatch {
            category,
            requested: ids.len(),
            movies: Vec::with_capacity(ids.len()),
            failed: 0,
            missing: 0,
        };
        for (id, outcome) in ids.iter().zip(outcomes) {
            match outcome {
                Ok(Some(movie)) => batch.movies.push(movie),
                Ok(None) => {
                    tracing::debug!(id, "Category entry not found");
                    batch.missing = batch.missing.saturating_add(1);
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "Category entry lookup failed");
                    batch.failed = batch.failed.saturating_add(1);
                }
            }
        }
        batch
    }

    /// Resolves a category and returns the movies that resolved, in
    /// catalog order. Never fails; partial failures are logged.
    pub async fn list_by_category(&self, category: Category, limit: Option<usize>) -> Vec<Movie> {
        let batch = self.list_by_category_report(category, limit).await;
        batch.log_summary();
        batch.movies
    }
}

/// Passes the record through when the provider reported a match.
fn found(record: &OmdbRecord) -> Option<&OmdbRecord> {
    if record.is_found() {
        Some(record)
    } else {
        tracing::debug!(error = ?record.error, "No match");
        None
    }
}
