//! Server-rendered HTML pages
//!
//! Mutations answer with a full page carrying a status banner rather than
//! redirecting; failures keep the failure's HTTP status.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use gigbook_common::Error;
use tracing::error;

use crate::error::status_for;
use crate::AppState;

pub mod artists;
pub mod home;
pub mod layout;
pub mod shows;
pub mod venues;

use layout::{render, Banner, Page};

/// Build the HTML routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create_venue),
        )
        .route("/venues/:id", get(venues::show_venue))
        .route(
            "/venues/:id/edit",
            get(venues::edit_form).post(venues::edit_venue),
        )
        .route("/venues/:id/delete", post(venues::delete_venue))
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create_artist),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_form).post(artists::edit_artist),
        )
        .route("/artists/:id/delete", post(artists::delete_artist))
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_form).post(shows::create_show),
        )
}

/// Fallback for unknown paths
pub async fn not_found() -> Page {
    not_found_page(None)
}

pub fn not_found_page(banner: Option<&Banner>) -> Page {
    render(
        StatusCode::NOT_FOUND,
        "Not found",
        banner,
        r#"<h1>404</h1><p class="muted">That page does not exist. <a href="/">Back home</a></p>"#,
    )
}

/// Unwrap an id path segment; anything but an integer gets the 404 page
pub(crate) fn page_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, Page> {
    path.map(|Path(id)| id).map_err(|_| not_found_page(None))
}

/// Page for a failed read
pub(crate) fn read_failure(err: &Error) -> Page {
    if let Error::NotFound(_) = err {
        return not_found_page(None);
    }

    error!(code = err.code(), "Page read failed: {}", err);
    render(
        status_for(err),
        "Error",
        Some(&Banner::Failure("Something went wrong. Please try again.".to_string())),
        r#"<h1>500</h1><p class="muted">The server could not complete the request.</p>"#,
    )
}

/// Name to quote in a status message; blank names are left out
pub(crate) fn quoted_name(name: &str) -> Option<&str> {
    Some(name).filter(|n| !n.trim().is_empty())
}
