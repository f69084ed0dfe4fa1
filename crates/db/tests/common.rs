extern crate dotenv;

use diesel::prelude::*;
use lazy_static::{initialize, lazy_static};
use movie_catalog_db::schema::{genres, movies, movies_genres};
use movie_catalog_db::{build_pool, migrate, DbPool, DbPoolConnection};
use std::sync::Once;

static INIT: Once = Once::new();

lazy_static! {
    pub static ref POOL: DbPool = build_pool().unwrap();
}

pub fn setup() {
    INIT.call_once(|| {
        dotenv::from_filename("integrationtest.env").ok();
        initialize(&POOL);
        migrate(POOL.get().unwrap()).unwrap();
    });
}

/// Empties the catalog tables. Only call this inside a test transaction.
pub fn clear_catalog(conn: &DbPoolConnection) -> QueryResult<()> {
    diesel::delete(movies_genres::table).execute(conn)?;
    diesel::delete(genres::table).execute(conn)?;
    diesel::delete(movies::table).execute(conn)?;
    Ok(())
}

pub fn insert_movie(
    conn: &DbPoolConnection,
    id: i32,
    year: Option<i32>,
    release_date: Option<chrono::NaiveDate>,
) -> QueryResult<usize> {
    diesel::insert_into(movies::table)
        .values((
            movies::id.eq(id),
            movies::title.eq(format!("Movie {}", id)),
            movies::plot.eq("Plot."),
            movies::year.eq(year),
            movies::rating.eq(Some(7.5)),
            movies::image.eq(format!("https://img.example/{}.jpg", id)),
            movies::release_date.eq(release_date),
        ))
        .execute(conn)
}

pub fn insert_genre(conn: &DbPoolConnection, id: i32, value: &str) -> QueryResult<usize> {
    diesel::insert_into(genres::table)
        .values((genres::id.eq(id), genres::value.eq(value)))
        .execute(conn)
}

pub fn link(conn: &DbPoolConnection, movie_id: i32, genre_id: i32) -> QueryResult<usize> {
    diesel::insert_into(movies_genres::table)
        .values((
            movies_genres::movie_id.eq(movie_id),
            movies_genres::genre_id.eq(genre_id),
        ))
        .execute(conn)
}
