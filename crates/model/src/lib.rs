//! Records shared between the catalog query service and the catalog browser.
//!
//! With the `diesel` feature enabled, [Movie] and [Genre] can be loaded straight out of the
//! `movies` and `genres` tables; field order matches the column order of those tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "diesel", derive(diesel::Queryable))]
pub struct Movie {
    pub id: i32,
    pub title: String,

    /// Free-text summary. Never null, the browser always previews it.
    pub plot: String,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub rating: Option<f64>,

    /// URL of the poster image.
    #[serde(default)]
    pub image: String,

    /// Optional external reference page for the movie.
    #[serde(default)]
    pub wikipedia_url: Option<String>,

    // yyyy-MM-dd
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// A labeled category usable to filter movies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "diesel", derive(diesel::Queryable))]
pub struct Genre {
    pub id: i32,

    /// Display label, e.g. "Action".
    pub value: String,
}

/// Body of `GET /api/movies` and `GET /api/genres/{genreId}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MoviesPayload {
    pub movies: Vec<Movie>,
}

/// Body of `GET /api/genres`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct GenresPayload {
    pub genres: Vec<Genre>,
}

impl From<Vec<Movie>> for MoviesPayload {
    fn from(movies: Vec<Movie>) -> Self {
        MoviesPayload { movies }
    }
}

impl From<Vec<Genre>> for GenresPayload {
    fn from(genres: Vec<Genre>) -> Self {
        GenresPayload { genres }
    }
}
