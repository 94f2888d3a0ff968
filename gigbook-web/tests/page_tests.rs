//! Integration tests for the server-rendered pages
//!
//! Forms are posted as `application/x-www-form-urlencoded`, the way a
//! browser submits them.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use gigbook_common::db::{init_database, seed::seed_if_empty};
use gigbook_web::{build_router, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

async fn setup_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();
    seed_if_empty(&pool).await.unwrap();
    (build_router(AppState::new(pool)), dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn form_post(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_text(response.into_body()).await)
}

async fn call_json(app: &Router, uri: &str) -> Value {
    let (_, text) = call(app, get(uri)).await;
    serde_json::from_str(&text).expect("Should parse JSON")
}

#[tokio::test]
async fn test_home_page() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Home | Gigbook</title>"));
    assert!(html.contains(r#"action="/venues/search""#));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/no/such/page")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404"));
}

#[tokio::test]
async fn test_venues_page_groups_by_area() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/venues")).await;

    assert_eq!(status, StatusCode::OK);
    let sf = html.find("San Francisco, CA").unwrap();
    let ny = html.find("New York, NY").unwrap();
    assert!(sf < ny);
    assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));
    assert!(html.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_venue_search_page() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, form_post("/venues/search", "search_term=hop")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Number of search results for &quot;hop&quot;: 1"));
    assert!(html.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_venue_search_keeps_whitespace() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, form_post("/venues/search", "search_term=hop+")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Number of search results for &quot;hop &quot;: 0"));
}

#[tokio::test]
async fn test_venue_detail_page() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/venues/3")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("3 Upcoming Shows"));
    assert!(html.contains("1 Past Shows"));
    assert!(html.contains("Saturday June, 15, 2019 at 11:00PM"));
}

#[tokio::test]
async fn test_missing_venue_page_is_not_found() {
    let (app, _dir) = setup_app().await;

    let (status, _) = call(&app, get("/venues/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, get("/venues/99/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_renders_not_found_page() {
    let (app, _dir) = setup_app().await;

    for uri in ["/venues/abc", "/artists/abc", "/venues/abc/edit"] {
        let (status, html) = call(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(html.contains("<h1>404</h1>"), "{}", uri);
    }

    let (status, html) = call(&app, form_post("/artists/abc/delete", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn test_create_venue_form_without_flag() {
    let (app, _dir) = setup_app().await;
    let form = "name=The+Blue+Door&city=Austin&state=TX&address=1+Main+St&genres=Blues&genres=Jazz";

    let (status, html) = call(&app, form_post("/venues/create", form)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Venue The Blue Door was successfully listed!"));

    let results = call_json(&app, "/api/venues/search?search_term=blue").await;
    assert_eq!(results["count"], 1);
    assert_eq!(results["data"][0]["seeking_talent"], false);
    assert_eq!(results["data"][0]["genres"][1], "Jazz");
}

#[tokio::test]
async fn test_create_venue_form_with_flag() {
    let (app, _dir) = setup_app().await;
    let form = "name=Red+Room&city=Austin&state=TX&address=2+Main+St&seeking_talent=y";

    let (status, _) = call(&app, form_post("/venues/create", form)).await;
    assert_eq!(status, StatusCode::OK);

    let results = call_json(&app, "/api/venues/search?search_term=red+room").await;
    assert_eq!(results["data"][0]["seeking_talent"], true);
}

#[tokio::test]
async fn test_create_venue_form_missing_name() {
    let (app, _dir) = setup_app().await;
    let form = "city=Austin&state=TX&address=1+Main+St";

    let (status, html) = call(&app, form_post("/venues/create", form)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(html.contains("An error occurred. Venue could not be listed."));
}

#[tokio::test]
async fn test_created_names_are_escaped() {
    let (app, _dir) = setup_app().await;
    let form = "name=%3Cb%3EBold%3C%2Fb%3E&city=Austin&state=TX&address=1+Main+St";

    let (_, html) = call(&app, form_post("/venues/create", form)).await;

    assert!(html.contains("Venue &lt;b&gt;Bold&lt;/b&gt; was successfully listed!"));
    assert!(!html.contains("<b>Bold</b>"));
}

#[tokio::test]
async fn test_edit_venue_form_prefilled() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/venues/1/edit")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="The Musical Hop""#));
    assert!(html.contains(r#"<option value="Jazz" selected>Jazz</option>"#));
    assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
}

/// Values of the options a browser would submit for the genres picker
fn selected_genres(html: &str) -> Vec<String> {
    let start = html.find(r#"<select name="genres" multiple>"#).unwrap();
    let end = start + html[start..].find("</select>").unwrap();
    html[start..end]
        .split(r#"<option value=""#)
        .skip(1)
        .filter(|opt| opt.contains(r#"" selected>"#))
        .map(|opt| opt[..opt.find('"').unwrap()].to_string())
        .collect()
}

#[tokio::test]
async fn test_unchanged_edit_keeps_unlisted_genres() {
    let (app, _dir) = setup_app().await;

    let (_, html) = call(&app, get("/venues/1/edit")).await;
    assert!(html.contains(r#"<option value="Swing" selected>Swing</option>"#));

    let mut genres = selected_genres(&html);
    let mut form = String::from(
        "name=The+Musical+Hop&city=San+Francisco&state=CA&address=1015+Folsom+Street&seeking_talent=y",
    );
    for genre in &genres {
        form.push_str(&format!("&genres={}", genre));
    }

    let (status, _) = call(&app, form_post("/venues/1/edit", &form)).await;
    assert_eq!(status, StatusCode::OK);

    let venue = call_json(&app, "/api/venues/1").await;
    let mut stored: Vec<String> = venue["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g.as_str().unwrap().to_string())
        .collect();
    stored.sort();
    genres.sort();
    assert_eq!(stored, genres);
    assert_eq!(stored, vec!["Classical", "Folk", "Jazz", "Reggae", "Swing"]);
}

#[tokio::test]
async fn test_edit_venue_renders_detail_with_banner() {
    let (app, _dir) = setup_app().await;
    let form = "name=The+Musical+Hop+II&city=San+Francisco&state=CA&address=1015+Folsom+Street";

    let (status, html) = call(&app, form_post("/venues/1/edit", form)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Venue The Musical Hop II was successfully updated!"));
    assert!(html.contains("<h1>The Musical Hop II</h1>"));
    assert!(html.contains("Not currently seeking talent"));
}

#[tokio::test]
async fn test_edit_missing_venue() {
    let (app, _dir) = setup_app().await;
    let form = "name=Ghost&city=Austin&state=TX&address=1+Main+St";

    let (status, html) = call(&app, form_post("/venues/99/edit", form)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Venue does not exist!"));
}

#[tokio::test]
async fn test_delete_venue_page() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, form_post("/venues/1/delete", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Venue was successfully deleted!"));

    let (status, html) = call(&app, form_post("/venues/1/delete", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Venue does not exist!"));
}

#[tokio::test]
async fn test_artist_pages() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/artists")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<a href="/artists/5">Matt Quevedo</a>"#));

    let (_, html) = call(&app, form_post("/artists/search", "search_term=band")).await;
    assert!(html.contains(": 1</h1>"));

    let (status, html) = call(&app, get("/artists/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("1 Past Shows"));
    assert!(html.contains("Currently seeking performance venues"));
}

#[tokio::test]
async fn test_edit_artist_message() {
    let (app, _dir) = setup_app().await;
    let form = "name=Guns+N+Roses&city=San+Francisco&state=CA&seeking_venue=Yes";

    let (status, html) = call(&app, form_post("/artists/4/edit", form)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Artist Guns N Roses was successfully edited!"));
}

#[tokio::test]
async fn test_create_and_delete_artist_pages() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(
        &app,
        form_post("/artists/create", "name=Nina+Keys&city=Chicago&state=IL"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Artist Nina Keys was successfully listed!"));

    let (status, html) = call(&app, form_post("/artists/7/delete", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Artist was successfully deleted!"));
}

#[tokio::test]
async fn test_shows_page_lists_every_show() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/shows")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("playing at").count(), 5);
    assert!(html.contains("Tue 05, 21, 2019 9:30PM"));
}

#[tokio::test]
async fn test_create_show_form() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(&app, get("/shows/create")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<option value="6">The Wild Sax Band (6)</option>"#));

    let (status, html) = call(
        &app,
        form_post(
            "/shows/create",
            "artist_id=4&venue_id=2&start_time=2031-01-10T20%3A00",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Show was successfully listed!"));

    let detail = call_json(&app, "/api/venues/2").await;
    assert_eq!(detail["upcoming_shows_count"], 1);
}

#[tokio::test]
async fn test_create_show_form_bad_input() {
    let (app, _dir) = setup_app().await;

    let (status, html) = call(
        &app,
        form_post("/shows/create", "artist_id=4&venue_id=99&start_time=2031-01-10T20%3A00"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("An error occurred. Show could not be listed."));

    let (status, _) = call(
        &app,
        form_post("/shows/create", "artist_id=4&venue_id=2&start_time=soon"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let shows = call_json(&app, "/api/shows").await;
    assert_eq!(shows.as_array().unwrap().len(), 5);
}
