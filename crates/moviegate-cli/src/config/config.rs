//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use moviegate_api::gateway::{Category, CategoryCatalog};
use moviegate_api::omdb::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides `omdb.api_key`.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb connection settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
    /// Category list overrides.
    #[serde(default)]
    pub categories: CategoriesConfig,
}

/// OMDb connection settings.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API key. `OMDB_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds (default: 15).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Per-category id lists. A missing entry keeps the built-in list.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CategoriesConfig {
    /// `popular` ids.
    #[serde(default)]
    pub popular: Option<Vec<String>>,
    /// `trending` ids.
    #[serde(default)]
    pub trending: Option<Vec<String>>,
    /// `upcoming` ids.
    #[serde(default)]
    pub upcoming: Option<Vec<String>>,
}

impl CategoriesConfig {
    /// Built-in catalog with the configured lists applied.
    #[must_use]
    pub fn catalog(&self) -> CategoryCatalog {
        let overrides = [
            (Category::Popular, &self.popular),
            (Category::Trending, &self.trending),
            (Category::Upcoming, &self.upcoming),
        ];
        overrides
            .into_iter()
            .fold(CategoryCatalog::builtin(), |catalog, (category, ids)| {
                match ids {
                    Some(ids) => catalog.with_category(category, ids.iter().map(String::as_str)),
                    None => catalog,
                }
            })
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Picks the API key: `env_value` (from `OMDB_API_KEY`) first, then the file.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source provides a non-blank key.
    pub fn api_key(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .into_iter()
            .chain(self.omdb.api_key.clone())
            .find(|key| !key.trim().is_empty())
            .with_context(|| {
                format!("{API_KEY_ENV} environment variable or omdb.api_key in config is required")
            })
    }

    /// Parsed base URL override, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `omdb.base_url` is not a valid URL.
    pub fn base_url(&self) -> Result<Option<Url>> {
        self.omdb
            .base_url
            .as_deref()
            .map(|raw| Url::parse(raw).with_context(|| format!("invalid omdb.base_url: {raw}")))
            .transpose()
    }

    /// Request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `omdb.timeout_secs` is 0.
    pub fn timeout(&self) -> Result<Duration> {
        match self.omdb.timeout_secs {
            None => Ok(DEFAULT_TIMEOUT),
            Some(0) => bail!("omdb.timeout_secs must be at least 1"),
            Some(secs) => Ok(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_default_config() {
        // Arrange & Act
        let config = AppConfig::default();

        // Assert
        assert!(config.omdb.api_key.is_none());
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(15));
        assert!(config.base_url().unwrap().is_none());
        assert_eq!(config.categories.catalog(), CategoryCatalog::builtin());
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        // Arrange
        let config = AppConfig {
            omdb: OmdbConfig {
                api_key: Some(String::from("abc123")),
                base_url: Some(String::from("http://localhost:8080/")),
                timeout_secs: Some(5),
            },
            categories: CategoriesConfig {
                popular: Some(vec![String::from("tt0111161")]),
                ..CategoriesConfig::default()
            },
        };

        // Act
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        // Assert
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb]\ntimeout_secs = 3\n").unwrap();

        // Act
        let config = AppConfig::load(&path).unwrap();

        // Assert
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(3));
        assert_eq!(config.categories, CategoriesConfig::default());
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[omdb\n").unwrap();

        // Act
        let result = AppConfig::load(&path);

        // Assert
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }

    #[test]
    fn test_category_override_keeps_other_lists() {
        // Arrange
        let categories = CategoriesConfig {
            trending: Some(vec![String::from("tt0133093"), String::from("tt0110912")]),
            ..CategoriesConfig::default()
        };

        // Act
        let catalog = categories.catalog();

        // Assert
        let trending: Vec<&str> = catalog.ids(Category::Trending, None).collect();
        assert_eq!(trending, vec!["tt0133093", "tt0110912"]);
        assert_eq!(catalog.len(Category::Popular), 20);
        assert_eq!(catalog.len(Category::Upcoming), 20);
    }

    #[test]
    fn test_api_key_env_wins() {
        // Arrange
        let config = AppConfig {
            omdb: OmdbConfig {
                api_key: Some(String::from("from-file")),
                ..OmdbConfig::default()
            },
            ..AppConfig::default()
        };

        // Act & Assert
        assert_eq!(config.api_key(Some(String::from("from-env"))).unwrap(), "from-env");
        assert_eq!(config.api_key(Some(String::from("  "))).unwrap(), "from-file");
        assert_eq!(config.api_key(None).unwrap(), "from-file");
    }

    #[test]
    fn test_api_key_missing_is_error() {
        // Arrange
        let config = AppConfig::default();

        // Act
        let result = config.api_key(None);

        // Assert
        assert!(result.unwrap_err().to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        // Arrange
        let config = AppConfig {
            omdb: OmdbConfig {
                timeout_secs: Some(0),
                ..OmdbConfig::default()
            },
            ..AppConfig::default()
        };

        // Act & Assert
        assert!(config.timeout().is_err());
    }

    #[test]
    fn test_invalid_base_url_is_error() {
        // Arrange
        let config = AppConfig {
            omdb: OmdbConfig {
                base_url: Some(String::from("not a url")),
                ..OmdbConfig::default()
            },
            ..AppConfig::default()
        };

        // Act & Assert
        assert!(config.base_url().is_err());
    }
}
