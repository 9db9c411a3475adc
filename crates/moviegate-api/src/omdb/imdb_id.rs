//! IMDb identifier validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix of every IMDb title identifier.
pub const IMDB_ID_PREFIX: &str = "tt";

/// Accepted identifier shape: `tt` followed by 7 or 8 ASCII digits.
#[allow(clippy::expect_used)]
static IMDB_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tt[0-9]{7,8}$").expect("failed to compile IMDb ID regex"));

/// A validated IMDb title identifier (e.g. `tt0111161`).
///
/// Only values of this type can be sent to the `i=` lookup, so a
/// malformed identifier never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImdbId(String);

impl ImdbId {
    /// Normalizes and validates user input.
    ///
    /// The prefix is optional on input (`0111161` and `tt0111161` are
    /// equivalent). Returns `None` when the result is not `tt` + 7–8 digits.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let raw = if trimmed.starts_with(IMDB_ID_PREFIX) {
            String::from(trimmed)
        } else {
            format!("{IMDB_ID_PREFIX}{trimmed}")
        };

        IMDB_ID_RE.is_match(&raw).then_some(Self(raw))
    }

    /// Full identifier including the prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips the `tt` prefix from a provider identifier and parses the rest.
///
/// Unlike [`ImdbId::parse`] this accepts any digit count, since records
/// coming back from the provider are trusted for shape but not for content.
/// Returns `None` for an empty remainder, any non-digit character, or a
/// value that does not fit in `u64`.
#[must_use]
pub fn numeric_id(external_id: &str) -> Option<u64> {
    let digits = external_id
        .strip_prefix(IMDB_ID_PREFIX)
        .unwrap_or(external_id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
