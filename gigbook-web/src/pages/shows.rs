//! Show pages

use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use gigbook_common::db;
use gigbook_common::form::FormFields;
use gigbook_common::status::{self, Action, Entity};
use gigbook_common::time::{format_start_time, DateFormat};

use super::home::home_page;
use super::layout::{escape, option, render, Banner, Page};
use super::read_failure;
use crate::error::status_for;
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Page {
    let shows = match db::shows::list_shows(&state.db).await {
        Ok(shows) => shows,
        Err(e) => return read_failure(&e),
    };

    let mut body = String::from("<h1>Shows</h1><ul>");
    for show in &shows {
        let image = show
            .artist_image_link
            .as_deref()
            .map(|src| format!(r#"<img src="{}" alt="" width="60"> "#, escape(src)))
            .unwrap_or_default();
        body.push_str(&format!(
            r#"<li>{image}<a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a> on {when}</li>"#,
            image = image,
            artist_id = show.artist_id,
            artist = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape(&show.venue_name),
            when = escape(&format_start_time(&show.start_time, DateFormat::Medium)),
        ));
    }
    body.push_str("</ul>");

    render(StatusCode::OK, "Shows", None, &body)
}

/// GET /shows/create
///
/// Artist and venue pickers list every current entity by id.
pub async fn create_form(State(state): State<AppState>) -> Page {
    let artists = match db::artists::list_artists(&state.db).await {
        Ok(artists) => artists,
        Err(e) => return read_failure(&e),
    };
    let venues = match db::venues::list_venues(&state.db).await {
        Ok(venues) => venues,
        Err(e) => return read_failure(&e),
    };

    let artist_options: String = artists
        .iter()
        .map(|a| option(&a.id.to_string(), &format!("{} ({})", a.name, a.id), false))
        .collect();
    let venue_options: String = venues
        .iter()
        .map(|v| option(&v.id.to_string(), &format!("{} ({})", v.name, v.id), false))
        .collect();

    let body = format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
<label>Artist <select name="artist_id">{artist_options}</select></label>
<label>Venue <select name="venue_id">{venue_options}</select></label>
<label>Start time <input type="datetime-local" name="start_time"></label>
<button type="submit">Create show</button>
</form>"#
    );

    render(StatusCode::OK, "New show", None, &body)
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let result = match FormFields::from(pairs).new_show() {
        Ok(new_show) => db::shows::create_show(&state.db, &new_show).await,
        Err(e) => Err(e),
    };

    let (code, banner) = match result {
        Ok(_) => (
            StatusCode::OK,
            Banner::Success(status::success(Entity::Show, Action::Create, None)),
        ),
        Err(e) => (
            status_for(&e),
            Banner::Failure(status::failure(Entity::Show, Action::Create, None, &e)),
        ),
    };

    home_page(code, Some(&banner))
}
