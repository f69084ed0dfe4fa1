//! Access to the catalog query service from the browser.

use async_trait::async_trait;
use movie_catalog_model::{Genre, GenresPayload, Movie, MoviesPayload};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures while talking to the catalog query service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("The catalog URL {0} cannot have path segments.")]
    CannotBeABase(Url),

    #[error("Request to the catalog failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The catalog responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// The three reads the browser issues against the catalog.
#[async_trait]
pub trait CatalogClient {
    /// `GET /api/movies`
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError>;

    /// `GET /api/genres`
    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError>;

    /// `GET /api/genres/{genre_id}`
    async fn fetch_movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, ClientError>;
}

/// [CatalogClient] speaking HTTP to a running catalog service.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a client for the catalog service rooted at `base_url`, e.g. `http://127.0.0.1:8080/`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpCatalogClient {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of some catalog endpoint, relative to the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// URL of the genre filter endpoint. The identifier is encoded as one path segment.
    pub fn genre_endpoint(&self, genre_id: &str) -> Result<Url, ClientError> {
        let mut url = self.endpoint("api/genres")?;
        url.path_segments_mut()
            .map_err(|_| ClientError::CannotBeABase(self.base_url.clone()))?
            .push(genre_id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<T>().await?),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("Unknown error"));
                Err(ClientError::Status { status, body })
            }
        }
    }
}

/// Joining relative paths drops the last segment of a base without a trailing slash, so one
/// is always added.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let payload: MoviesPayload = self.get_json(self.endpoint("api/movies")?).await?;
        Ok(payload.movies)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, ClientError> {
        let payload: GenresPayload = self.get_json(self.endpoint("api/genres")?).await?;
        Ok(payload.genres)
    }

    async fn fetch_movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, ClientError> {
        let payload: MoviesPayload = self.get_json(self.genre_endpoint(genre_id)?).await?;
        Ok(payload.movies)
    }
}
