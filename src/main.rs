mod web_initialization;

extern crate dotenv;

use crate::web_initialization::initialize_web_server;
use anyhow::{Context, Result};
use dotenv::dotenv;
use movie_catalog_common::environment::{
    get_env_flag, get_env_var, get_env_var_or,
    variables::{GENRE_MATCH, LOG_DIR, LOG_FILTER, RUN_MIGRATIONS},
};
use movie_catalog_db::{build_pool, migrate, GenreMatch, PgCatalogStore};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let _guard = initialize_logging()?;

    info!("Initializing the movie catalog...");

    info!("Initializing database connection pool...");
    let pool = build_pool()?;
    if get_env_flag(RUN_MIGRATIONS) {
        let connection = pool
            .get()
            .context("Could not retrieve a connection from the connection pool.")?;
        info!("Migrating the database...");
        migrate(connection)?;
    }

    let genre_match = get_genre_match()?;
    info!("Genre filters use {} matching.", genre_match.as_ref());
    let store = PgCatalogStore::new(pool, genre_match);

    info!("Starting up web server...");
    let http_server = initialize_web_server(store)?;

    info!("Movie catalog started!");
    http_server.await?;

    info!("Shutting the movie catalog down.");
    Ok(())
}

/// Set up the logging framework, reading filter configuration from the environment variable
/// or defaulting to warning logs and above globally if the filter isn't specified. Logs go to a
/// daily file under the log directory when one is configured; keep the returned guard alive
/// until shutdown so buffered lines are flushed.
fn initialize_logging() -> Result<Option<WorkerGuard>> {
    LogTracer::init().context("Failed to forward log records to tracing.")?;

    let filter = EnvFilter::try_from_env(LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::default())
        .add_directive(LevelFilter::WARN.into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match get_env_var(LOG_DIR) {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "movie_catalog.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing::subscriber::set_global_default(
                builder.with_ansi(false).with_writer(writer).finish(),
            )
            .context("Failed to install the tracing subscriber.")?;
            Ok(Some(guard))
        }
        Err(_) => {
            tracing::subscriber::set_global_default(builder.finish())
                .context("Failed to install the tracing subscriber.")?;
            Ok(None)
        }
    }
}

fn get_genre_match() -> Result<GenreMatch> {
    let value = get_env_var_or(GENRE_MATCH, GenreMatch::default().as_ref());
    match GenreMatch::from_str(&value.to_ascii_lowercase()) {
        Ok(m) => Ok(m),
        Err(e) => {
            warn!("\"{}\" is not a genre match policy.", value);
            Err(e).context(format!(
                "Failed to parse \"{}\" as a genre match policy (substring or exact).",
                value
            ))
        }
    }
}
