//! Venue pages

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Form;
use gigbook_common::db::{self, ShowPartition, Venue, VenueFields};
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

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Page {
    let areas = match db::venues::list_venues_grouped(&state.db).await {
        Ok(areas) => areas,
        Err(e) => return read_failure(&e),
    };

    let mut body = String::from("<h1>Venues</h1>");
    if areas.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }
    for area in &areas {
        body.push_str(&format!(
            "<h2>{}, {}</h2><ul>",
            escape(&area.city),
            escape(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&format!(
                r#"<li><a href="/venues/{}">{}</a></li>"#,
                venue.id,
                escape(&venue.name)
            ));
        }
        body.push_str("</ul>");
    }

    render(StatusCode::OK, "Venues", None, &body)
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let term = FormFields::from(pairs).search_term();
    let results = match db::venues::search_venues(&state.db, &term).await {
        Ok(results) => results,
        Err(e) => return read_failure(&e),
    };

    let mut body = format!(
        "<h1>Number of search results for &quot;{}&quot;: {}</h1><ul>",
        escape(&term),
        results.count
    );
    for venue in &results.data {
        body.push_str(&format!(
            r#"<li><a href="/venues/{}">{}</a></li>"#,
            venue.id,
            escape(&venue.name)
        ));
    }
    body.push_str("</ul>");

    render(StatusCode::OK, "Venue search", None, &body)
}

/// GET /venues/:id
pub async fn show_venue(
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
    let detail = match db::venues::get_venue_detail(&state.db, id, time::now()).await {
        Ok(detail) => detail,
        Err(e) => return read_failure(&e),
    };

    let venue = &detail.venue;
    let mut body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<p>Genres: {genres}</p>
<p>{address}<br>{city}, {state}</p>
{phone}{website}{facebook}{image}
{seeking}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_list(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = optional_line("Phone", venue.phone.as_deref()),
        website = optional_link("Website", venue.website.as_deref()),
        facebook = optional_link("Facebook", venue.facebook_link.as_deref()),
        image = venue
            .image_link
            .as_deref()
            .map(|src| format!(r#"<img src="{}" alt="Venue image" width="300">"#, escape(src)))
            .unwrap_or_default(),
        seeking = seeking_line(venue),
    );

    body.push_str(&show_sections(&detail.shows));
    body.push_str(&format!(
        r#"<p><a href="/venues/{id}/edit">Edit venue</a></p>
<form method="post" action="/venues/{id}/delete"><button type="submit">Delete venue</button></form>"#,
        id = venue.id
    ));

    render(status, &venue.name, banner, &body)
}

fn seeking_line(venue: &Venue) -> String {
    if !venue.seeking_talent {
        return r#"<p class="muted">Not currently seeking talent</p>"#.to_string();
    }
    match &venue.seeking_description {
        Some(desc) => format!("<p>Currently seeking talent: {}</p>", escape(desc)),
        None => "<p>Currently seeking talent</p>".to_string(),
    }
}

/// Past and upcoming show lists; the partner on a venue page is the artist
fn show_sections(shows: &ShowPartition) -> String {
    let section = |title: &str, count: usize, entries: &[db::ShowEntry]| {
        let mut html = format!("<h2>{} {}</h2><ul>", count, title);
        for show in entries {
            html.push_str(&format!(
                r#"<li><a href="/artists/{}">{}</a> {}</li>"#,
                show.partner_id,
                escape(&show.partner_name),
                escape(&format_start_time(&show.start_time, DateFormat::Full))
            ));
        }
        html.push_str("</ul>");
        html
    };

    format!(
        "{}{}",
        section("Upcoming Shows", shows.upcoming_shows_count, &shows.upcoming_shows),
        section("Past Shows", shows.past_shows_count, &shows.past_shows)
    )
}

fn venue_form(action: &str, heading: &str, fields: &VenueFields) -> String {
    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{address}
{phone}
{image}
{genres}
{facebook}
{website}
{seeking}
{description}
<button type="submit">Save venue</button>
</form>"#,
        heading = escape(heading),
        action = action,
        name = text_input("name", "Name", Some(&fields.name)),
        city = text_input("city", "City", Some(&fields.city)),
        state = state_select(&fields.state),
        address = text_input("address", "Address", Some(&fields.address)),
        phone = text_input("phone", "Phone", fields.phone.as_deref()),
        image = text_input("image_link", "Image link", fields.image_link.as_deref()),
        genres = genre_select(&fields.genres),
        facebook = text_input("facebook_link", "Facebook link", fields.facebook_link.as_deref()),
        website = text_input("website_link", "Website link", fields.website.as_deref()),
        seeking = checkbox("seeking_talent", "Seeking talent", fields.seeking_talent),
        description = text_input(
            "seeking_description",
            "Seeking description",
            fields.seeking_description.as_deref()
        ),
    )
}

fn editable_fields(venue: Venue) -> VenueFields {
    VenueFields {
        name: venue.name,
        city: venue.city,
        state: venue.state,
        address: venue.address,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        image_link: venue.image_link,
        genres: venue.genres,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
    }
}

/// GET /venues/create
pub async fn create_form() -> Page {
    render(
        StatusCode::OK,
        "New venue",
        None,
        &venue_form("/venues/create", "List a new venue", &VenueFields::default()),
    )
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let fields = FormFields::from(pairs).venue_fields();

    match db::venues::create_venue(&state.db, &fields).await {
        Ok(venue) => home_page(
            StatusCode::OK,
            Some(&Banner::Success(status::success(
                Entity::Venue,
                Action::Create,
                Some(&venue.name),
            ))),
        ),
        Err(e) => home_page(
            status_for(&e),
            Some(&Banner::Failure(status::failure(
                Entity::Venue,
                Action::Create,
                quoted_name(&fields.name),
                &e,
            ))),
        ),
    }
}

/// GET /venues/:id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    let venue = match db::venues::get_venue(&state.db, id).await {
        Ok(venue) => venue,
        Err(e) => return read_failure(&e),
    };
    let heading = format!("Edit venue {}", venue.name);

    render(
        StatusCode::OK,
        "Edit venue",
        None,
        &venue_form(
            &format!("/venues/{}/edit", id),
            &heading,
            &editable_fields(venue),
        ),
    )
}

/// POST /venues/:id/edit
///
/// Every field is overwritten with the submitted form.
pub async fn edit_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    let fields = FormFields::from(pairs).venue_fields();

    match db::venues::update_venue(&state.db, id, &fields).await {
        Ok(()) => {
            let banner = Banner::Success(status::success(
                Entity::Venue,
                Action::Update,
                Some(&fields.name),
            ));
            detail_page(&state, id, StatusCode::OK, Some(&banner)).await
        }
        Err(e) => {
            let banner = Banner::Failure(status::failure(
                Entity::Venue,
                Action::Update,
                quoted_name(&fields.name),
                &e,
            ));
            if let Error::NotFound(_) = e {
                return not_found_page(Some(&banner));
            }
            render(
                status_for(&e),
                "Edit venue",
                Some(&banner),
                &venue_form(&format!("/venues/{}/edit", id), "Edit venue", &fields),
            )
        }
    }
}

/// POST /venues/:id/delete
///
/// Shows booked at the venue are removed with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Page {
    let id = match page_id(path) {
        Ok(id) => id,
        Err(page) => return page,
    };
    match db::venues::delete_venue(&state.db, id).await {
        Ok(()) => home_page(
            StatusCode::OK,
            Some(&Banner::Success(status::success(
                Entity::Venue,
                Action::Delete,
                None,
            ))),
        ),
        Err(e) => home_page(
            status_for(&e),
            Some(&Banner::Failure(status::failure(
                Entity::Venue,
                Action::Delete,
                None,
                &e,
            ))),
        ),
    }
}
