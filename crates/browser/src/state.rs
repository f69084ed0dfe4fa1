//! In-memory state of the catalog browser.
//!
//! Requests are tracked with tickets. The browser is loading while any ticket is outstanding,
//! and a list response is only applied when its ticket belongs to the most recent request for
//! that list; an older response that settles late is dropped.

use movie_catalog_model::{Genre, Movie};
use std::cmp::Reverse;
use std::fmt::Display;
use tracing::{debug, warn};

/// Handed out when a movie list request starts and given back when it settles. Not `Clone`,
/// so every request settles exactly once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a request that never settles leaves the browser loading"]
pub struct MoviesTicket {
    generation: u64,
}

/// Like [MoviesTicket], for the genre list.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a request that never settles leaves the browser loading"]
pub struct GenresTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct BrowserState {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    pending: usize,
    movies_generation: u64,
    genres_generation: u64,
    movies_error: Option<String>,
    genres_error: Option<String>,
}

impl BrowserState {
    pub fn new() -> Self {
        BrowserState::default()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    /// True while at least one request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Message of a failed request, movie list first. Each list's error is cleared only when
    /// that same list is requested again.
    pub fn error(&self) -> Option<&str> {
        self.movies_error
            .as_deref()
            .or(self.genres_error.as_deref())
    }

    /// Start a request that will replace the movie list.
    pub fn begin_movies_request(&mut self) -> MoviesTicket {
        self.movies_generation += 1;
        self.pending += 1;
        self.movies_error = None;
        MoviesTicket {
            generation: self.movies_generation,
        }
    }

    /// Start a request that will replace the genre list.
    pub fn begin_genres_request(&mut self) -> GenresTicket {
        self.genres_generation += 1;
        self.pending += 1;
        self.genres_error = None;
        GenresTicket {
            generation: self.genres_generation,
        }
    }

    /// Settle a movie list request. The list is replaced wholesale, discarding any prior sort.
    pub fn complete_movies_request<E: Display>(
        &mut self,
        ticket: MoviesTicket,
        result: Result<Vec<Movie>, E>,
    ) {
        self.pending = self.pending.saturating_sub(1);
        if ticket.generation != self.movies_generation {
            debug!("Dropping a stale movie list response.");
            return;
        }
        match result {
            Ok(movies) => self.movies = movies,
            Err(e) => self.movies_error = Some(failure_message(e)),
        }
    }

    /// Settle a genre list request.
    pub fn complete_genres_request<E: Display>(
        &mut self,
        ticket: GenresTicket,
        result: Result<Vec<Genre>, E>,
    ) {
        self.pending = self.pending.saturating_sub(1);
        if ticket.generation != self.genres_generation {
            debug!("Dropping a stale genre list response.");
            return;
        }
        match result {
            Ok(genres) => self.genres = genres,
            Err(e) => self.genres_error = Some(failure_message(e)),
        }
    }

    /// Stable sort of the current list, newest release year first. A missing year counts as 0.
    pub fn sort_by_recency(&mut self) {
        self.movies.sort_by_key(|m| Reverse(m.year.unwrap_or(0)));
    }

    /// Stable sort of the current list, highest rating first. A missing rating counts as 0.
    pub fn sort_by_rating(&mut self) {
        self.movies
            .sort_by(|a, b| rating_or_zero(b).total_cmp(&rating_or_zero(a)));
    }
}

fn failure_message<E: Display>(e: E) -> String {
    warn!(error = %e, "A catalog request failed.");
    e.to_string()
}

fn rating_or_zero(movie: &Movie) -> f64 {
    movie.rating.unwrap_or(0.0)
}
