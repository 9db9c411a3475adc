//! moviegate - movie catalog browser CLI.

/// Application configuration (TOML).
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{API_KEY_ENV, AppConfig, resolve_config_path};
use moviegate_api::gateway::{Category, CategoryCatalog, Movie, MovieDetails, MovieGateway};
use moviegate_api::omdb::OmdbClient;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print records as pretty JSON on stdout; logs go to stderr.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Look up a movie by exact title.
    Title(TitleArgs),
    /// Look up a movie by IMDb ID.
    Id(IdArgs),
    /// Show full details for an IMDb ID.
    Details(IdArgs),
    /// Search movies by free text.
    Search(SearchArgs),
    /// List a browse category (popular, trending, upcoming).
    Category(CategoryArgs),
    /// Print the configured category lists.
    Categories,
}

/// Arguments for the `title` subcommand.
#[derive(clap::Args)]
struct TitleArgs {
    /// Exact title (e.g. "The Matrix").
    #[arg(long, required = true)]
    title: String,
}

/// Arguments for the `id` and `details` subcommands.
#[derive(clap::Args)]
struct IdArgs {
    /// IMDb ID, with or without the "tt" prefix (e.g. "tt0111161").
    #[arg(long, required = true)]
    id: String,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search text (e.g. "batman").
    #[arg(long, required = true)]
    query: String,
    /// Result page, ten items per page.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,
}

/// Arguments for the `category` subcommand.
#[derive(clap::Args)]
struct CategoryArgs {
    /// Category name.
    category: Category,
    /// Only resolve the first N entries.
    #[arg(long, default_value_t = 5)]
    limit: usize,
    /// Resolve every entry of the category.
    #[arg(long, conflicts_with = "limit")]
    all: bool,
}

/// Output settings shared by all subcommands.
#[derive(Clone, Copy)]
struct Output {
    /// Emit JSON.
    json: bool,
}

impl Output {
    /// Writes `value` to stdout as one pretty JSON document.
    fn json<T: Serialize>(value: &T) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value).context("failed to serialize output")?;
        writeln!(stdout).context("failed to write output")?;
        Ok(())
    }

    /// Reports a lookup that found nothing; JSON mode prints `null`.
    fn not_found(self, what: &str, value: &str) -> Result<()> {
        if self.json {
            return Self::json(&());
        }
        tracing::info!("No movie found for {} '{}'", what, value);
        Ok(())
    }

    /// Logs one movie per line.
    fn movies(self, movies: &[Movie]) -> Result<()> {
        if self.json {
            return Self::json(&movies);
        }
        tracing::info!("ID\tIMDb\t\tRating\tReleased\tTitle");
        for movie in movies {
            tracing::info!(
                "{}\t{}\t{:.1}\t{}\t{}",
                movie.id,
                movie.imdb_id,
                movie.vote_average,
                if movie.release_date.is_empty() {
                    "-"
                } else {
                    movie.release_date.as_str()
                },
                movie.title,
            );
        }
        Ok(())
    }

    /// Logs a detail record.
    fn details(self, details: &MovieDetails) -> Result<()> {
        if self.json {
            return Self::json(details);
        }
        let movie = &details.movie;
        let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
        tracing::info!("ID: {} ({})", movie.id, movie.imdb_id);
        tracing::info!("Title: {}", movie.title);
        tracing::info!("Released: {}", movie.release_date);
        tracing::info!(
            "Runtime: {}",
            details
                .runtime
                .map_or_else(|| String::from("-"), |r| format!("{r} min"))
        );
        tracing::info!("Rating: {:.1} ({} votes)", movie.vote_average, details.vote_count);
        tracing::info!("Genres: {}", genres.join(", "));
        tracing::info!("Directors: {}", details.directors.join(", "));
        tracing::info!("Cast: {}", details.cast.join(", "));
        tracing::info!("Poster: {}", movie.poster_path.as_deref().unwrap_or("-"));
        tracing::info!("---");
        tracing::info!("{}", movie.overview);
        Ok(())
    }
}

/// Builds the gateway from config file and environment.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, no API key is
/// available, or the client fails to build.
#[instrument(skip_all)]
fn build_gateway(dir: Option<&PathBuf>) -> Result<MovieGateway<OmdbClient>> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    let api_key = config.api_key(std::env::var(API_KEY_ENV).ok())?;
    let mut builder = OmdbClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(config.timeout()?);
    if let Some(url) = config.base_url()? {
        builder = builder.base_url(url);
    }
    let client = builder.build().context("failed to build OMDb client")?;

    Ok(MovieGateway::new(client, config.categories.catalog()))
}

/// Runs the `title` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the request fails.
#[instrument(skip_all)]
async fn run_title(args: &TitleArgs, dir: Option<&PathBuf>, out: Output) -> Result<()> {
    let gateway = build_gateway(dir)?;
    let movie = gateway
        .lookup_by_title(&args.title)
        .await
        .context("title lookup failed")?;

    match movie {
        Some(movie) => out.movies(&[movie]),
        None => out.not_found("title", &args.title),
    }
}

/// Runs the `id` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the request fails.
#[instrument(skip_all)]
async fn run_id(args: &IdArgs, dir: Option<&PathBuf>, out: Output) -> Result<()> {
    let gateway = build_gateway(dir)?;
    let movie = gateway
        .lookup_by_id(&args.id)
        .await
        .context("ID lookup failed")?;

    match movie {
        Some(movie) => out.movies(&[movie]),
        None => out.not_found("ID", &args.id),
    }
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the request fails.
#[instrument(skip_all)]
async fn run_details(args: &IdArgs, dir: Option<&PathBuf>, out: Output) -> Result<()> {
    let gateway = build_gateway(dir)?;
    let details = gateway
        .get_details(&args.id)
        .await
        .context("details lookup failed")?;

    match details {
        Some(details) => out.details(&details),
        None => out.not_found("ID", &args.id),
    }
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build or the request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>, out: Output) -> Result<()> {
    let gateway = build_gateway(dir)?;
    let page = gateway
        .search(&args.query, args.page)
        .await
        .context("search request failed")?;

    if out.json {
        return Output::json(&page);
    }
    if let Some(ref error) = page.error {
        tracing::warn!("OMDb refused the search: {}", error);
    }
    tracing::info!(
        "Page {}: {} of {} total results",
        page.page,
        page.movies.len(),
        page.total_results
    );
    out.movies(&page.movies)
}

/// Runs the `category` subcommand.
///
/// # Errors
///
/// Returns an error if the gateway fails to build.
#[instrument(skip_all)]
async fn run_category(args: &CategoryArgs, dir: Option<&PathBuf>, out: Output) -> Result<()> {
    let gateway = build_gateway(dir)?;
    let limit = (!args.all).then_some(args.limit);
    let movies = gateway.list_by_category(args.category, limit).await;
    out.movies(&movies)
}

/// Runs the `categories` subcommand.
///
/// # Errors
///
/// Returns an error if config cannot be loaded.
#[instrument(skip_all)]
fn run_categories(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    let catalog: CategoryCatalog = config.categories.catalog();

    for category in Category::ALL {
        let ids: Vec<&str> = catalog.ids(category, None).collect();
        tracing::info!("{} ({}): {}", category, ids.len(), ids.join(", "));
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_writer = if cli.json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(log_writer)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(log_writer);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let out = Output { json: cli.json };
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Title(args) => run_title(&args, dir, out).await,
        Commands::Id(args) => run_id(&args, dir, out).await,
        Commands::Details(args) => run_details(&args, dir, out).await,
        Commands::Search(args) => run_search(&args, dir, out).await,
        Commands::Category(args) => run_category(&args, dir, out).await,
        Commands::Categories => run_categories(dir),
    }
}
