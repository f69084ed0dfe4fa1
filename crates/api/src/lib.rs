//! Configuration and handling of the read-only catalog endpoints.

use actix_web::web::block;
use actix_web::{web, HttpResponse};
use movie_catalog_db::{CatalogStore, StoreError};
use movie_catalog_model::{GenresPayload, MoviesPayload};
use tracing::{debug, error};
use tracing_actix_web::RootSpan;

mod catalog_api_error;
mod catalog_root_span;

pub use catalog_api_error::CatalogApiError;
pub use catalog_root_span::CatalogRootSpan;

/// Configure the catalog API endpoints. Mount it under the `/api` scope.
pub fn catalog_config<T: CatalogStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/movies").route(web::get().to(list_movies::<T>)))
        .service(web::resource("/genres").route(web::get().to(list_genres::<T>)))
        .service(
            web::resource("/genres/{genre_id}").route(web::get().to(filter_by_genre::<T>)),
        );
}

/// Fallback for any route the catalog doesn't serve.
pub async fn not_found() -> Result<HttpResponse, CatalogApiError> {
    Err(CatalogApiError::not_found())
}

/// Run a blocking store query off the async executor, translating failures into API errors.
async fn run_query<R, F>(query: F) -> Result<R, CatalogApiError>
where
    F: FnOnce() -> Result<R, StoreError> + Send + 'static,
    R: Send + 'static,
{
    match block(query).await {
        Ok(Ok(rows)) => Ok(rows),
        Ok(Err(e)) => {
            error!(error = ?e, "Encountered an error while querying the catalog.");
            Err(CatalogApiError::from(&e))
        }
        Err(e) => {
            error!(error = ?e, "The catalog query was cancelled.");
            Err(CatalogApiError::internal_server_error())
        }
    }
}

async fn list_movies<T: CatalogStore>(
    store: web::Data<T>,
) -> Result<HttpResponse, CatalogApiError> {
    let store = store.get_ref().clone();
    let movies = run_query(move || store.list_movies()).await?;
    Ok(HttpResponse::Ok().json(MoviesPayload::from(movies)))
}

async fn list_genres<T: CatalogStore>(
    store: web::Data<T>,
) -> Result<HttpResponse, CatalogApiError> {
    let store = store.get_ref().clone();
    let genres = run_query(move || store.list_genres()).await?;
    Ok(HttpResponse::Ok().json(GenresPayload::from(genres)))
}

async fn filter_by_genre<T: CatalogStore>(
    root_span: RootSpan,
    genre_id: web::Path<String>,
    store: web::Data<T>,
) -> Result<HttpResponse, CatalogApiError> {
    let genre_id = genre_id.into_inner();
    root_span.record("genre_id", &genre_id.as_str());

    let store = store.get_ref().clone();
    let query_genre_id = genre_id.clone();
    let movies = run_query(move || store.list_movies_by_genre(&query_genre_id)).await?;
    debug!("Genre \"{}\" matched {} movies.", genre_id, movies.len());
    Ok(HttpResponse::Ok().json(MoviesPayload::from(movies)))
}
