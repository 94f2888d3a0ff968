//! Landing page

use axum::http::StatusCode;

use super::layout::{render, Banner, Page};

/// GET /
pub async fn home() -> Page {
    home_page(StatusCode::OK, None)
}

/// Home page, optionally reporting the outcome of a mutation
pub fn home_page(status: StatusCode, banner: Option<&Banner>) -> Page {
    let body = r#"<h1>Gigbook</h1>
<p class="muted">Find venues, discover artists, book shows.</p>
<form method="post" action="/venues/search">
    <input type="search" name="search_term" placeholder="Find a venue">
    <button type="submit">Search venues</button>
</form>
<form method="post" action="/artists/search">
    <input type="search" name="search_term" placeholder="Find an artist">
    <button type="submit">Search artists</button>
</form>"#;

    render(status, "Home", banner, body)
}
