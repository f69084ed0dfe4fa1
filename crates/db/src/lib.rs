//! Provides read access to the movie catalog tables to the rest of the application.

#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate diesel;
use diesel::r2d2::PooledConnection;
use diesel::{
    r2d2::{ConnectionManager, Pool},
    PgConnection,
};

embed_migrations!();

pub mod actions;
mod catalog_store;
mod genre_match;
mod pool_helper;
pub mod schema;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbPoolConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Every movie listing is capped at this many rows; larger result sets are silently truncated.
pub const ROW_LIMIT: i64 = 50;

pub use catalog_store::{CatalogStore, PgCatalogStore, StoreError};
pub use genre_match::GenreMatch;
pub use pool_helper::build_pool;

/// Given some [DbPoolConnection], run the migrations embedded in the catalog on the
/// database. The migrations only create the catalog tables when they are missing.
///
/// # Remarks
///
/// This function takes ownership of the given [DbPoolConnection].
pub fn migrate(connection: DbPoolConnection) -> Result<(), anyhow::Error> {
    embedded_migrations::run(&connection)?;
    Ok(())
}
