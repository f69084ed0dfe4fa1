//! Helper utilities for returning API errors to clients.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use movie_catalog_db::StoreError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Represents an error to send back to clients of the catalog API.
#[derive(Debug, Serialize)]
pub struct CatalogApiError {
    pub status: u16,
    pub message: String,
}

impl ResponseError for CatalogApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl CatalogApiError {
    /// Create a new instance of [CatalogApiError] with a given [StatusCode].
    /// Before creating a new [CatalogApiError], check for dedicated methods
    /// to return the appropriate status code.
    pub fn new(message: &str, status: StatusCode) -> Self {
        CatalogApiError {
            message: String::from(message),
            status: status.as_u16(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not Found", StatusCode::NOT_FOUND)
    }

    pub fn internal_server_error() -> Self {
        Self::new("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn service_unavailable() -> Self {
        Self::new("Service Unavailable", StatusCode::SERVICE_UNAVAILABLE)
    }
}

impl From<&StoreError> for CatalogApiError {
    fn from(e: &StoreError) -> Self {
        match e {
            StoreError::Unavailable(_) => CatalogApiError::service_unavailable(),
            StoreError::Query(_) => CatalogApiError::internal_server_error(),
        }
    }
}

impl Display for CatalogApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self)
                .unwrap_or_else(|_| String::from("{ message: \"Fatal Error\" }"))
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_store_error_maps_unavailable_to_503() {
        // Arrange
        let input = StoreError::Unavailable("connection refused".into());

        // Act
        let actual = CatalogApiError::from(&input);

        // Assert
        assert_eq!(StatusCode::SERVICE_UNAVAILABLE, actual.status_code());
    }

    #[test]
    fn from_store_error_maps_query_failure_to_500() {
        // Arrange
        let input = StoreError::Query("relation \"movies\" does not exist".into());

        // Act
        let actual = CatalogApiError::from(&input);

        // Assert
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, actual.status_code());
    }

    #[test]
    fn display_writes_json_body() {
        // Act
        let actual = CatalogApiError::not_found().to_string();

        // Assert
        assert_eq!(r#"{"status":404,"message":"Not Found"}"#, actual);
    }
}
