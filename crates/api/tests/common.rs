use chrono::NaiveDate;
use movie_catalog_db::{CatalogStore, StoreError, ROW_LIMIT};
use movie_catalog_model::{Genre, Movie};
use std::sync::{Arc, RwLock};

/// In-memory [CatalogStore] that mirrors the substring genre matching of the real store and
/// captures the genre identifiers it is asked about.
#[derive(Clone)]
pub struct FakeCatalogStore {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    links: Vec<(i32, i32)>,
    unavailable: bool,
    requested_genres: Arc<RwLock<Vec<String>>>,
}

impl FakeCatalogStore {
    pub fn new(movies: Vec<Movie>, genres: Vec<Genre>, links: Vec<(i32, i32)>) -> Self {
        FakeCatalogStore {
            movies,
            genres,
            links,
            unavailable: false,
            requested_genres: Arc::new(RwLock::new(vec![])),
        }
    }

    /// A store whose every query fails as if the database were down.
    pub fn unavailable() -> Self {
        let mut store = FakeCatalogStore::new(vec![], vec![], vec![]);
        store.unavailable = true;
        store
    }

    pub fn requested_genres(&self) -> Vec<String> {
        self.requested_genres.read().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            Err(StoreError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

impl CatalogStore for FakeCatalogStore {
    fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.check_available()?;
        let mut movies = self.movies.clone();
        movies.sort_by_key(|m| m.release_date);
        movies.truncate(ROW_LIMIT as usize);
        Ok(movies)
    }

    fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        self.check_available()?;
        Ok(self.genres.clone())
    }

    fn list_movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, StoreError> {
        self.check_available()?;
        self.requested_genres
            .write()
            .unwrap()
            .push(String::from(genre_id));
        let movies = self
            .movies
            .iter()
            .filter(|m| {
                self.links
                    .iter()
                    .any(|(movie, genre)| *movie == m.id && genre.to_string().contains(genre_id))
            })
            .take(ROW_LIMIT as usize)
            .cloned()
            .collect();
        Ok(movies)
    }
}

pub fn movie(id: i32, year: Option<i32>) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        plot: String::from("Plot."),
        year,
        rating: Some(7.0),
        image: format!("https://img.example/{}.jpg", id),
        wikipedia_url: None,
        release_date: year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
    }
}

pub fn genre(id: i32, value: &str) -> Genre {
    Genre {
        id,
        value: String::from(value),
    }
}
