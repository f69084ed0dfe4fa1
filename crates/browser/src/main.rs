use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use movie_catalog_browser::{CatalogBrowser, HttpCatalogClient};
use movie_catalog_common::environment::{
    get_env_var_or,
    variables::{BASE_URL, LOG_FILTER},
};
use std::fs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortOrder {
    /// Newest release year first.
    Recent,
    /// Highest rating first.
    Rating,
}

/// Browse the movie catalog and render it as an HTML page.
#[derive(Debug, Parser)]
#[command(name = "catalog_browser", version)]
struct Args {
    /// Root URL of the catalog service. Defaults to CATALOG_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Show only the movies of this genre identifier.
    #[arg(long)]
    genre: Option<String>,

    /// Reorder the movie list after loading (and filtering).
    #[arg(long, value_enum)]
    sort: Option<SortOrder>,

    /// Write the page to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::default())
        .add_directive(LevelFilter::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let base_url = match args.base_url {
        Some(url) => url,
        None => get_env_var_or(BASE_URL, DEFAULT_BASE_URL),
    };
    let client = HttpCatalogClient::new(&base_url)
        .with_context(|| format!("Failed to create a catalog client for {}.", base_url))?;
    info!("Browsing the catalog at {}.", client.base_url());

    let mut browser = CatalogBrowser::new(client);
    browser.load().await;
    if let Some(genre) = &args.genre {
        browser.filter_by_genre(genre).await;
    }
    match args.sort {
        Some(SortOrder::Recent) => browser.sort_by_recency(),
        Some(SortOrder::Rating) => browser.sort_by_rating(),
        None => (),
    }

    let page = browser.render();
    match &args.output {
        Some(path) => fs::write(path, &page)
            .with_context(|| format!("Failed to write the page to {}.", path.display()))?,
        None => println!("{}", page),
    }

    if let Some(message) = browser.state().error() {
        error!("The catalog could not be loaded completely: {}", message);
        bail!("The catalog could not be loaded completely: {}", message);
    }
    Ok(())
}
