//! Translation from raw OMDb records to canonical records.
//!
//! Every canonical field has a defined default here. OMDb marks unknown
//! values with `"N/A"`, which is treated the same as an absent field.

use std::sync::LazyLock;

use regex::Regex;

use super::models::{Genre, Movie, MovieDetails};
use crate::omdb::{OmdbRecord, numeric_id};

/// Provider marker for an unknown value.
const NOT_AVAILABLE: &str = "N/A";

/// Title used when the provider omits one.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Month and day appended to a bare release year.
const YEAR_ONLY_SUFFIX: &str = "-01-01";

/// Content ratings that mark a title as adult.
const ADULT_RATINGS: [&str; 2] = ["R", "NC-17"];

/// First run of ASCII digits.
#[allow(clippy::expect_used)]
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("failed to compile digits regex"));

/// First four-digit year.
#[allow(clippy::expect_used)]
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("failed to compile year regex"));

/// Returns the trimmed value unless it is absent, empty or `N/A`.
fn provided(value: Option<&String>) -> Option<&str> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE)
}

/// Provided value or empty string.
fn text_or_empty(value: Option<&String>) -> String {
    provided(value).map(String::from).unwrap_or_default()
}

/// Splits a comma-separated provider list, dropping empty entries.
#[must_use]
pub fn split_list(value: Option<&String>) -> Vec<String> {
    provided(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Builds positional genre tags from `"Action, Drama, Sci-Fi"`.
#[must_use]
pub fn parse_genres(value: Option<&String>) -> Vec<Genre> {
    split_list(value)
        .into_iter()
        .zip(0_u32..)
        .map(|(name, id)| Genre { id, name })
        .collect()
}

/// Minutes from runtime text such as `"142 min"`.
///
/// Takes the first run of digits. Absent or digit-free text yields
/// `None`, never zero.
#[must_use]
pub fn parse_runtime(value: Option<&String>) -> Option<u32> {
    let text = provided(value)?;
    DIGITS_RE.find(text)?.as_str().parse().ok()
}

/// `YYYY-01-01` from a year field (`"1994"`, `"2008–2013"`).
///
/// Returns an empty string when no four-digit year is present.
#[must_use]
pub fn release_date_from_year(value: Option<&String>) -> String {
    provided(value)
        .and_then(|v| YEAR_RE.find(v))
        .map(|year| format!("{}{YEAR_ONLY_SUFFIX}", year.as_str()))
        .unwrap_or_default()
}

/// Rating as a float in `[0, 10]`, 0 when unparseable.
#[must_use]
pub fn parse_rating(value: Option<&String>) -> f64 {
    provided(value)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|r| r.is_finite())
        .map_or(0.0, |r| r.clamp(0.0, 10.0))
}

/// Integer from comma-grouped or currency text (`"2,912,411"`, `"$28,767,189"`).
///
/// Returns 0 when absent or unparseable.
#[must_use]
pub fn parse_grouped_number(value: Option<&String>) -> u64 {
    provided(value)
        .map(|v| {
            v.chars()
                .filter(|c| !matches!(c, ',' | '$'))
                .collect::<String>()
        })
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Canonical movie from a raw record.
///
/// Returns `None` when the record has no usable IMDb identifier.
#[must_use]
pub fn normalize_movie(record: &OmdbRecord) -> Option<Movie> {
    let imdb_id = provided(record.imdb_id.as_ref())?;
    let id = numeric_id(imdb_id)?;

    let poster = provided(record.poster.as_ref()).map(String::from);

    Some(Movie {
        id,
        imdb_id: String::from(imdb_id),
        title: provided(record.title.as_ref())
            .map_or_else(|| String::from(UNKNOWN_TITLE), String::from),
        overview: text_or_empty(record.plot.as_ref()),
        backdrop_path: poster.clone(),
        poster_path: poster,
        vote_average: parse_rating(record.imdb_rating.as_ref()),
        release_date: release_date_from_year(record.year.as_ref()),
        genres: parse_genres(record.genre.as_ref()),
        media_type: text_or_empty(record.kind.as_ref()),
    })
}

/// Canonical detail record from a full `?i=` lookup.
///
/// Returns `None` under the same conditions as [`normalize_movie`].
#[must_use]
pub fn normalize_details(record: &OmdbRecord) -> Option<MovieDetails> {
    let movie = normalize_movie(record)?;
    let content_rating = text_or_empty(record.rated.as_ref());
    let adult = ADULT_RATINGS.contains(&content_rating.as_str());

    Some(MovieDetails {
        runtime: parse_runtime(record.runtime.as_ref()),
        original_title: movie.title.clone(),
        original_language: String::from("en"),
        vote_count: parse_grouped_number(record.imdb_votes.as_ref()),
        adult,
        content_rating,
        budget: 0,
        homepage: text_or_empty(record.website.as_ref()),
        popularity: 0.0,
        production_companies: split_list(record.production.as_ref()),
        production_countries: split_list(record.country.as_ref()),
        revenue: parse_grouped_number(record.box_office.as_ref()),
        spoken_languages: split_list(record.language.as_ref()),
        status: String::from("Released"),
        tagline: String::new(),
        video: false,
        directors: split_list(record.director.as_ref()),
        writers: split_list(record.writer.as_ref()),
        cast: split_list(record.actors.as_ref()),
        awards: text_or_empty(record.awards.as_ref()),
        movie,
    })
}
