use crate::client::CatalogClient;
use crate::render::render_page;
use crate::state::BrowserState;
use tracing::{debug, info};

/// Drives a [BrowserState] with the responses of some [CatalogClient].
pub struct CatalogBrowser<C: CatalogClient> {
    client: C,
    state: BrowserState,
}

impl<C: CatalogClient> CatalogBrowser<C> {
    pub fn new(client: C) -> Self {
        CatalogBrowser {
            client,
            state: BrowserState::new(),
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Fetch the movie list and the genre list concurrently. Each list is applied as soon as
    /// the pair settles; loading ends once both have.
    pub async fn load(&mut self) {
        info!("Loading the catalog.");
        let movies_ticket = self.state.begin_movies_request();
        let genres_ticket = self.state.begin_genres_request();

        let (movies, genres) =
            futures::join!(self.client.fetch_movies(), self.client.fetch_genres());

        self.state.complete_movies_request(movies_ticket, movies);
        self.state.complete_genres_request(genres_ticket, genres);
        debug!(
            "Catalog loaded with {} movies and {} genres.",
            self.state.movies().len(),
            self.state.genres().len()
        );
    }

    /// Replace the movie list with the movies of one genre, as ordered by the service.
    pub async fn filter_by_genre(&mut self, genre_id: &str) {
        info!("Filtering the catalog by genre \"{}\".", genre_id);
        let ticket = self.state.begin_movies_request();
        let movies = self.client.fetch_movies_by_genre(genre_id).await;
        self.state.complete_movies_request(ticket, movies);
    }

    pub fn sort_by_recency(&mut self) {
        self.state.sort_by_recency();
    }

    pub fn sort_by_rating(&mut self) {
        self.state.sort_by_rating();
    }

    pub fn render(&self) -> String {
        render_page(&self.state)
    }
}
