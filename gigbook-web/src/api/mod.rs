//! JSON API handlers for gigbook-web

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use gigbook_common::Error;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use health::health_routes;

/// Search query string (`?search_term=`)
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

/// Body returned by mutations that have nothing else to report
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned by successful creates
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

/// Unwrap a JSON body, reporting malformed input in the API error shape
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Unwrap an id path segment; one that is not an integer names no record
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::Store(Error::NotFound(rejection.body_text())))
}

/// Build the `/api` routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/venues",
            get(venues::list_venues).post(venues::create_venue),
        )
        .route("/api/venues/search", get(venues::search_venues))
        .route(
            "/api/venues/:id",
            get(venues::get_venue)
                .put(venues::update_venue)
                .delete(venues::delete_venue),
        )
        .route(
            "/api/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route("/api/artists/search", get(artists::search_artists))
        .route(
            "/api/artists/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/api/shows", get(shows::list_shows).post(shows::create_show))
}
