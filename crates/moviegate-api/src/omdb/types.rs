//! OMDb API response types.
//!
//! OMDb omits fields freely and uses the string `"N/A"` for unknown
//! values, so every field is optional here. Interpretation happens in
//! the gateway's normalization step.

use serde::Deserialize;

/// Value of the `Response` field on a successful lookup.
const RESPONSE_TRUE: &str = "True";

// --- Title / ID lookup ---

/// Length of the `Plot` text requested from an `?i=` lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotLength {
    /// Provider default, a one or two sentence summary.
    #[default]
    Short,
    /// Full plot (`plot=full`).
    Full,
}

/// A single title record.
///
/// Returned by `?t=` and `?i=` lookups; search items use the same type
/// with only `Title`, `Year`, `imdbID`, `Type` and `Poster` populated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbRecord {
    /// Title.
    pub title: Option<String>,
    /// Release year, or a range for series (`2008–2013`).
    pub year: Option<String>,
    /// MPAA rating (`PG-13`, `R`, ...).
    pub rated: Option<String>,
    /// Release date (`14 Oct 1994`).
    pub released: Option<String>,
    /// Runtime text (`142 min`).
    pub runtime: Option<String>,
    /// Comma-separated genres.
    pub genre: Option<String>,
    /// Comma-separated directors.
    pub director: Option<String>,
    /// Comma-separated writers.
    pub writer: Option<String>,
    /// Comma-separated lead actors.
    pub actors: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
    /// Comma-separated spoken languages.
    pub language: Option<String>,
    /// Comma-separated production countries.
    pub country: Option<String>,
    /// Awards summary.
    pub awards: Option<String>,
    /// Poster URL, or `N/A`.
    pub poster: Option<String>,
    /// Ratings from other sources.
    pub ratings: Vec<OmdbRating>,
    /// Metacritic score.
    pub metascore: Option<String>,
    /// IMDb rating (`9.3`).
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    /// IMDb vote count, comma-grouped (`2,912,411`).
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    /// IMDb identifier (`tt0111161`).
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// Media type (`movie`, `series`, `episode`).
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    /// DVD release date.
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    /// Box office gross (`$28,767,189`).
    pub box_office: Option<String>,
    /// Production company.
    pub production: Option<String>,
    /// Official website.
    pub website: Option<String>,
    /// `"True"` or `"False"`.
    pub response: Option<String>,
    /// Provider message when `response` is `"False"`.
    pub error: Option<String>,
}

impl OmdbRecord {
    /// Whether the provider reported a match.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.response.as_deref() == Some(RESPONSE_TRUE)
    }
}

/// A rating from another source (Rotten Tomatoes, Metacritic).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OmdbRating {
    /// Source name.
    pub source: String,
    /// Rating text (`91%`, `82/100`).
    pub value: String,
}

// --- Search ---

/// Response from the `?s=` search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OmdbSearchResponse {
    /// Matching items for the requested page.
    #[serde(rename = "Search")]
    pub search: Vec<OmdbRecord>,
    /// Total match count as a string (`"529"`).
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    /// `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: Option<String>,
    /// Provider message when `response` is `"False"`.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    /// Whether the provider reported any matches.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.response.as_deref() == Some(RESPONSE_TRUE)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_title_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/title_tt0111161.json");

        // Act
        let record: OmdbRecord = serde_json::from_str(json).unwrap();

        // Assert
        assert!(record.is_found());
        assert_eq!(record.imdb_id.as_deref(), Some("tt0111161"));
        assert_eq!(record.title.as_deref(), Some("The Shawshank Redemption"));
        assert_eq!(record.runtime.as_deref(), Some("142 min"));
        assert_eq!(record.kind.as_deref(), Some("movie"));
        assert_eq!(record.ratings.len(), 3);
        assert_eq!(record.ratings[0].source, "Internet Movie Database");
    }

    #[test]
    fn test_parse_not_found_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/not_found.json");

        // Act
        let record: OmdbRecord = serde_json::from_str(json).unwrap();

        // Assert
        assert!(!record.is_found());
        assert_eq!(record.error.as_deref(), Some("Movie not found!"));
        assert!(record.imdb_id.is_none());
    }

    #[test]
    fn test_parse_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/search_batman_page1.json");

        // Act
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert!(response.is_found());
        assert_eq!(response.total_results.as_deref(), Some("602"));
        assert_eq!(response.search.len(), 5);
        assert_eq!(response.search[0].imdb_id.as_deref(), Some("tt0372784"));
    }

    #[test]
    fn test_parse_search_not_found() {
        // Arrange
        let json = r#"{"Response":"False","Error":"Movie not found!"}"#;

        // Act
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert!(!response.is_found());
        assert!(response.search.is_empty());
        assert!(response.total_results.is_none());
    }

    #[test]
    fn test_missing_response_field_is_not_found() {
        // Arrange & Act
        let record: OmdbRecord = serde_json::from_str("{}").unwrap();

        // Assert
        assert!(!record.is_found());
    }
}
