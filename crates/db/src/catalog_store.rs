//! The read-only store the catalog query service is built on.

use crate::actions::genre_actions::GenreActions;
use crate::actions::movie_actions::MovieActions;
use crate::{DbPool, GenreMatch};
use movie_catalog_model::{Genre, Movie};
use thiserror::Error;
use tracing::debug;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by a [CatalogStore].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No connection to the store could be obtained.
    #[error("The catalog store is unavailable.")]
    Unavailable(#[source] BoxedError),

    /// A connection was obtained but the query itself failed.
    #[error("A catalog query failed.")]
    Query(#[source] BoxedError),
}

impl From<diesel::r2d2::PoolError> for StoreError {
    fn from(e: diesel::r2d2::PoolError) -> Self {
        StoreError::Unavailable(Box::new(e))
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> Self {
        StoreError::Query(Box::new(e))
    }
}

/// The three queries behind the catalog API. Implementations block; callers on an async
/// executor should move them onto a blocking thread.
pub trait CatalogStore: Clone + Send + Sync + 'static {
    /// Up to [crate::ROW_LIMIT] movies ordered by release date ascending.
    fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Every genre.
    fn list_genres(&self) -> Result<Vec<Genre>, StoreError>;

    /// Up to [crate::ROW_LIMIT] movies linked to a genre matching `genre_id`.
    fn list_movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, StoreError>;
}

/// [CatalogStore] backed by the PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
    genre_match: GenreMatch,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool, genre_match: GenreMatch) -> Self {
        PgCatalogStore { pool, genre_match }
    }
}

impl CatalogStore for PgCatalogStore {
    fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let conn = self.pool.get()?;
        let movies = Movie::get_many(&conn)?;
        debug!("Loaded {} movies.", movies.len());
        Ok(movies)
    }

    fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        let conn = self.pool.get()?;
        Ok(Genre::get_all(&conn)?)
    }

    fn list_movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, StoreError> {
        let conn = self.pool.get()?;
        let movies = Movie::get_by_genre(&conn, genre_id, self.genre_match)?;
        debug!(
            "Loaded {} movies for genre \"{}\" using {} matching.",
            movies.len(),
            genre_id,
            self.genre_match.as_ref()
        );
        Ok(movies)
    }
}
