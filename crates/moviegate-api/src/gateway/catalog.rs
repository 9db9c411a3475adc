//! Category catalog: curated IMDb id lists per browse category.
//!
//! OMDb has no "popular" or "trending" endpoint, so category membership
//! is configuration. The built-in lists can be replaced per category.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Browse category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// All-time favourites.
    Popular,
    /// Recent hits.
    Trending,
    /// Announced or newly released titles.
    Upcoming,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 3] = [Self::Popular, Self::Trending, Self::Upcoming];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Trending => "trending",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected popular, trending or upcoming)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(String::from(s)))
    }
}

/// Built-in `popular` list.
const POPULAR: &[&str] = &[
    "tt0111161", // The Shawshank Redemption
    "tt0068646", // The Godfather
    "tt0468569", // The Dark Knight
    "tt0167260", // The Lord of the Rings: The Return of the King
    "tt0120737", // The Lord of the Rings: The Fellowship of the Ring
    "tt0109830", // Forrest Gump
    "tt0133093", // The Matrix
    "tt0110912", // Pulp Fiction
    "tt0102926", // The Silence of the Lambs
    "tt0076759", // Star Wars
    "tt0047478", // Seven Samurai
    "tt0114369", // Se7en
    "tt0038650", // It's a Wonderful Life
    "tt0118799", // Life Is Beautiful
    "tt0082971", // Raiders of the Lost Ark
    "tt0120815", // Saving Private Ryan
    "tt0120586", // American History X
    "tt0054215", // Psycho
    "tt0047396", // Rear Window
    "tt1375666", // Inception
];

/// Built-in `trending` list.
const TRENDING: &[&str] = &[
    "tt1517268",  // Barbie
    "tt15398776", // Oppenheimer
    "tt9362722",  // Spider-Man: Across the Spider-Verse
    "tt2906216",  // Dungeons & Dragons
    "tt10366206", // John Wick: Chapter 4
    "tt6791350",  // Guardians of the Galaxy Vol. 3
    "tt15239678", // Mission: Impossible - Dead Reckoning
    "tt9603212",  // Mission: Impossible 7
    "tt6718170",  // The Super Mario Bros. Movie
    "tt10545296", // The Flash
    "tt9114286",  // Black Panther: Wakanda Forever
    "tt1630029",  // Avatar: The Way of Water
    "tt1745960",  // Top Gun: Maverick
    "tt7286456",  // Joker
    "tt4633694",  // Spider-Man: Into the Spider-Verse
    "tt9419884",  // Doctor Strange in the Multiverse of Madness
    "tt6443346",  // The Black Phone
    "tt1877830",  // The Batman
    "tt14209916", // Everything Everywhere All at Once
    "tt10648342", // Thor: Love and Thunder
];

/// Built-in `upcoming` list.
const UPCOMING: &[&str] = &[
    "tt6166392",  // Aquaman 2
    "tt5090568",  // Dune: Part Two
    "tt14362112", // Deadpool 3
    "tt21807222", // Ghostbusters: Frozen Empire
    "tt12261776", // Killers of the Flower Moon
    "tt2567856",  // Mission: Impossible 8
    "tt10160976", // Rebel Moon
    "tt9663764",  // Wonka
    "tt4682266",  // The Ballad of Songbirds and Snakes
    "tt2906954",  // Fantastic Four
    "tt6495056",  // Migration
    "tt15671028", // Kraven the Hunter
    "tt9362930",  // Poor Things
    "tt21454134", // Madame Web
    "tt15239678", // Mission: Impossible - Dead Reckoning Part One
    "tt11304742", // Kingdom of the Planet of the Apes
    "tt11389872", // Blade
    "tt11304744", // Superman: Legacy
    "tt11304746", // Thunderbolts
    "tt14998742", // Godzilla x Kong: The New Empire
];

/// Mapping from category to an ordered list of IMDb identifiers.
///
/// Entries are kept as configured; malformed identifiers are rejected at
/// lookup time and simply do not appear in the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    /// Identifier lists per category.
    entries: BTreeMap<Category, Vec<String>>,
}

impl CategoryCatalog {
    /// An empty catalog; every category lists nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The curated built-in lists (20 titles per category).
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with_category(Category::Popular, POPULAR.iter().copied())
            .with_category(Category::Trending, TRENDING.iter().copied())
            .with_category(Category::Upcoming, UPCOMING.iter().copied())
    }

    /// Replaces the list for `category`.
    #[must_use]
    pub fn with_category<I, S>(mut self, category: Category, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(category, ids.into_iter().map(Into::into).collect());
        self
    }

    /// Identifiers for `category`, truncated to `limit` when given.
    pub fn ids(&self, category: Category, limit: Option<usize>) -> impl Iterator<Item = &str> {
        self.entries
            .get(&category)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(String::as_str)
    }

    /// Number of identifiers configured for `category`.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.entries.get(&category).map_or(0, Vec::len)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
