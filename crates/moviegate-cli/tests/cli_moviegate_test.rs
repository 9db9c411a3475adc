#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;

/// Writes `config.toml` into a fresh temp dir.
fn config_dir(content: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), content).unwrap();
    dir
}

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("title"))
        .stdout(predicate::str::contains("details"))
        .stdout(predicate::str::contains("category"));
}

#[test]
fn test_search_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--page"));
}

#[test]
fn test_search_page_zero_rejected() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.args(["search", "--query", "batman", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--page"));
}

#[test]
fn test_unknown_category_rejected() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.args(["category", "classics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'classics'"));
}

#[test]
fn test_missing_api_key() {
    // Arrange
    let dir = config_dir("");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.env_remove("OMDB_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["title", "--title", "The Matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OMDB_API_KEY"));
}

#[test]
fn test_malformed_id_is_not_found() {
    // Arrange
    let dir = config_dir("[omdb]\nbase_url = \"http://127.0.0.1:1/\"\n");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.env("OMDB_API_KEY", "test-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["id", "--id", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movie found for ID 'abc'"));
}

#[test]
fn test_transport_failure_exits_nonzero() {
    // Arrange
    let dir = config_dir("[omdb]\nbase_url = \"http://127.0.0.1:1/\"\ntimeout_secs = 2\n");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.env("OMDB_API_KEY", "secret-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["title", "--title", "The Matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title lookup failed"))
        .stderr(predicate::str::contains("secret-key").not());
}

#[test]
fn test_categories_uses_config_override() {
    // Arrange
    let dir = config_dir("[categories]\npopular = [\"tt0133093\", \"tt0110912\"]\n");

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.env_remove("OMDB_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("popular (2): tt0133093, tt0110912"))
        .stdout(predicate::str::contains("trending (20)"));
}

#[test]
fn test_category_all_conflicts_with_limit() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("moviegate");
    cmd.args(["category", "popular", "--all", "--limit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}

#[test]
fn test_json_not_found_prints_null() {
    // Arrange
    let dir = config_dir("[omdb]\nbase_url = \"http://127.0.0.1:1/\"\n");

    // Act
    let output = cargo_bin_cmd!("moviegate")
        .env("OMDB_API_KEY", "test-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["--json", "id", "--id", "abc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Assert
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_json_id_output_is_parseable() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    let json_body = include_str!("../../../fixtures/omdb/title_tt0111161.json");
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::query_param("i", "tt0111161"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
        .expect(1)
        .mount(&mock_server)
        .await;
    let dir = config_dir(&format!("[omdb]\nbase_url = \"{}/\"\n", mock_server.uri()));

    // Act
    let output = cargo_bin_cmd!("moviegate")
        .env("OMDB_API_KEY", "test-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["--json", "id", "--id", "tt0111161"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Assert
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let movies = value.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], 111_161);
    assert_eq!(movies[0]["imdb_id"], "tt0111161");
}

#[tokio::test]
async fn test_category_defaults_to_five_lookups() {
    // Arrange
    let mock_server = wiremock::MockServer::start().await;
    let json_body = include_str!("../../../fixtures/omdb/title_tt0111161.json");
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
        .expect(5)
        .mount(&mock_server)
        .await;
    let dir = config_dir(&format!("[omdb]\nbase_url = \"{}/\"\n", mock_server.uri()));

    // Act
    let output = cargo_bin_cmd!("moviegate")
        .env("OMDB_API_KEY", "test-key")
        .arg("--dir")
        .arg(dir.path())
        .args(["--json", "category", "trending"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Assert
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 5);
}
