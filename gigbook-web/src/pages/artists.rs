//! Artist pages

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Form;
use gigbook_common::db::{self, Artist, ArtistFields, ShowEntry};
use gigbook_common::form::FormFields;
use gigbook_common::status::{self, Action, Entity};
use gigbook_common::time::{self, format_start_time, DateFormat};
use gigbook_common::Error;

use super::home::home_page;
use super::layout::{
    checkbox, escape, genre_list, genre_select, optional_line, optional_link, render, state_select,
    text_input, Banner, Page,
};
use super::{not_found_page, page_id, quoted_name, read_failure};
use crate::error::status_for;
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Page {
    let artists = match db::artists::list_artists(&state.db).await {
        Ok(artists) => artists,
        Err(e) => return read_failure(&e),
    };

    let mut body = String::from("<h1>Artists</h1><ul>");
    for artist in &artists {
        body.push_str(&format!(
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>");

    render(StatusCode::OK, "Artists", None, &body)
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let term = FormFields::from(pairs).search_term();
    let results = match db::artists::search_artists(&state.db, &term).await {
        Ok(results) => results,
        Err(e) => return read_failure(&e),
    };

    let items: String = results
        .data
        .iter()
        .map(|artist| {
            format!(
                r#"<li><a href="/artists/{}">{}</a></li>"#,
                artist.id,
                escape(&artist.name)
            )
        })
        .collect();
    let body = format!(
        "<h1>Number of search results for &quot;{}&quot;: {}</h1><ul>{}</ul>",
        escape(&term),
        results.count,
        items
    );

    render(StatusCode::OK, "Artist search", None, &body)
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    detail_page(&state, id, StatusCode::OK, None).await
}

async fn detail_page(
    state: &AppState,
    id: i64,
    status: StatusCode,
    banner: Option<&Banner>,
) -> Page {
    let detail = match db::artists::get_artist_detail(&state.db, id, time::now()).await {
        Ok(detail) => detail,
        Err(e) => return read_failure(&e),
    };
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        match &artist.seeking_description {
            Some(desc) => format!("<p>Currently seeking performance venues: {}</p>", escape(desc)),
            None => "<p>Currently seeking performance venues</p>".to_string(),
        }
    } else {
        r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<p>Genres: {genres}</p>
<p>{city}, {state}</p>
{phone}{website}{facebook}{image}
{seeking}
<h2>{upcoming_count} Upcoming Shows</h2><ul>{upcoming}</ul>
<h2>{past_count} Past Shows</h2><ul>{past}</ul>
<p><a href="/artists/{id}/edit">Edit artist</a></p>
<form method="post" action="/artists/{id}/delete"><button type="submit">Delete artist</button></form>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_list(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = optional_line("Phone", artist.phone.as_deref()),
        website = optional_link("Website", artist.website.as_deref()),
        facebook = optional_link("Facebook", artist.facebook_link.as_deref()),
        image = artist
            .image_link
            .as_deref()
            .map(|src| format!(r#"<img src="{}" alt="Artist image" width="300">"#, escape(src)))
            .unwrap_or_default(),
        seeking = seeking,
        upcoming_count = detail.shows.upcoming_shows_count,
        upcoming = venue_items(&detail.shows.upcoming_shows),
        past_count = detail.shows.past_shows_count,
        past = venue_items(&detail.shows.past_shows),
    );

    render(status, &artist.name, banner, &body)
}

/// On an artist page the show partner is the venue
fn venue_items(shows: &[ShowEntry]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> {}</li>"#,
                show.partner_id,
                escape(&show.partner_name),
                escape(&format_start_time(&show.start_time, DateFormat::Full))
            )
        })
        .collect()
}

fn artist_form(action: &str, heading: &str, fields: &ArtistFields) -> String {
    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{phone}
{image}
{genres}
{facebook}
{website}
{seeking}
{description}
<button type="submit">Save artist</button>
</form>"#,
        heading = escape(heading),
        action = action,
        name = text_input("name", "Name", Some(&fields.name)),
        city = text_input("city", "City", Some(&fields.city)),
        state = state_select(&fields.state),
        phone = text_input("phone", "Phone", fields.phone.as_deref()),
        image = text_input("image_link", "Image link", fields.image_link.as_deref()),
        genres = genre_select(&fields.genres),
        facebook = text_input("facebook_link", "Facebook link", fields.facebook_link.as_deref()),
        website = text_input("website_link", "Website link", fields.website.as_deref()),
        seeking = checkbox("seeking_venue", "Seeking venues", fields.seeking_venue),
        description = text_input(
            "seeking_description",
            "Seeking description",
            fields.seeking_description.as_deref()
        ),
    )
}

fn editable_fields(artist: Artist) -> ArtistFields {
    ArtistFields {
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        genres: artist.genres,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
    }
}

/// GET /artists/create
pub async fn create_form() -> Page {
    render(
        StatusCode::OK,
        "New artist",
        None,
        &artist_form("/artists/create", "List a new artist", &ArtistFields::default()),
    )
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let fields = FormFields::from(pairs).artist_fields();

    let (code, banner) = match db::artists::create_artist(&state.db, &fields).await {
        Ok(artist) => (
            StatusCode::OK,
            Banner::Success(status::success(
                Entity::Artist,
                Action::Create,
                Some(&artist.name),
            )),
        ),
        Err(e) => (
            status_for(&e),
            Banner::Failure(status::failure(
                Entity::Artist,
                Action::Create,
                quoted_name(&fields.name),
                &e,
            )),
        ),
    };

    home_page(code, Some(&banner))
}

/// GET /artists/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    let artist = match db::artists::get_artist(&state.db, id).await {
        Ok(artist) => artist,
        Err(e) => return read_failure(&e),
    };
    let heading = format!("Edit artist {}", artist.name);

    render(
        StatusCode::OK,
        "Edit artist",
        None,
        &artist_form(
            &format!("/artists/{}/edit", id),
            &heading,
            &editable_fields(artist),
        ),
    )
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    let fields = FormFields::from(pairs).artist_fields();

    match db::artists::update_artist(&state.db, id, &fields).await {
        Ok(()) => {
            let banner = Banner::Success(status::success(
                Entity::Artist,
                Action::Update,
                Some(&fields.name),
            ));
            detail_page(&state, id, StatusCode::OK, Some(&banner)).await
        }
        Err(e @ Error::NotFound(_)) => {
            let banner = Banner::Failure(status::failure(Entity::Artist, Action::Update, None, &e));
            not_found_page(Some(&banner))
        }
        Err(e) => {
            let banner = Banner::Failure(status::failure(
                Entity::Artist,
                Action::Update,
                quoted_name(&fields.name),
                &e,
            ));
            render(
                status_for(&e),
                "Edit artist",
                Some(&banner),
                &artist_form(&format!("/artists/{}/edit", id), "Edit artist", &fields),
            )
        }
    }
}

/// POST /artists/:id/delete
pub async fn delete_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    let (code, banner) = match db::artists::delete_artist(&state.db, id).await {
        Ok(()) => (
            StatusCode::OK,
            Banner::Success(status::success(Entity::Artist, Action::Delete, None)),
        ),
        Err(e) => (
            status_for(&e),
            Banner::Failure(status::failure(Entity::Artist, Action::Delete, None, &e)),
        ),
    };

    home_page(code, Some(&banner))
}
