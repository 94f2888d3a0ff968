//! Shared page shell, escaping and form widgets

use axum::http::StatusCode;
use axum::response::Html;

/// Rendered page plus the status it is served with
pub type Page = (StatusCode, Html<String>);

/// Genre choices offered by the venue and artist forms
pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// US state codes offered by the state picker
pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Status line shown above the page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Failure(String),
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body in the site shell
pub fn shell(title: &str, banner: Option<&Banner>, body: &str) -> String {
    let banner_html = match banner {
        Some(Banner::Success(msg)) => {
            format!(r#"<div class="banner success">{}</div>"#, escape(msg))
        }
        Some(Banner::Failure(msg)) => {
            format!(r#"<div class="banner failure">{}</div>"#, escape(msg))
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Gigbook</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }}
        nav {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
        }}
        nav a {{
            color: #4a9eff;
            margin-right: 16px;
            text-decoration: none;
        }}
        main {{
            padding: 20px;
        }}
        .banner {{
            padding: 10px 20px;
            font-weight: 600;
        }}
        .banner.success {{
            background-color: #1f3d2a;
        }}
        .banner.failure {{
            background-color: #4a1f1f;
        }}
        label {{
            display: block;
            margin-top: 8px;
        }}
        .muted {{
            color: #888;
        }}
    </style>
</head>
<body>
    <nav>
        <a href="/">Gigbook</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">List a venue</a>
        <a href="/artists/create">List an artist</a>
        <a href="/shows/create">List a show</a>
    </nav>
    {banner_html}
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Build a page with a status code
pub fn render(status: StatusCode, title: &str, banner: Option<&Banner>, body: &str) -> Page {
    (status, Html(shell(title, banner, body)))
}

/// Labelled single-line text input
pub fn text_input(name: &str, label: &str, value: Option<&str>) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" value="{value}"></label>"#,
        label = escape(label),
        name = name,
        value = escape(value.unwrap_or_default()),
    )
}

/// Labelled checkbox submitting `y` when ticked
pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>"#,
        name = name,
        checked = if checked { " checked" } else { "" },
        label = escape(label),
    )
}

/// State picker; an unlisted current value is kept as an extra option
pub fn state_select(current: &str) -> String {
    let mut options: Vec<String> = STATES
        .iter()
        .map(|code| option(code, code, *code == current))
        .collect();
    if !current.is_empty() && !STATES.contains(&current) {
        options.push(option(current, current, true));
    }
    format!(
        r#"<label>State <select name="state">{}</select></label>"#,
        options.concat()
    )
}

/// Multi-select genre picker; stored genres outside [`GENRES`] are kept as
/// extra selected options so an unchanged edit round-trips them
pub fn genre_select(selected: &[String]) -> String {
    let mut options: Vec<String> = GENRES
        .iter()
        .map(|genre| option(genre, genre, selected.iter().any(|s| s.as_str() == *genre)))
        .collect();
    options.extend(
        selected
            .iter()
            .filter(|s| !GENRES.contains(&s.as_str()))
            .map(|s| option(s, s, true)),
    );
    format!(
        r#"<label>Genres <select name="genres" multiple>{}</select></label>"#,
        options.concat()
    )
}

pub fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

/// Comma-separated genres, escaped
pub fn genre_list(genres: &[String]) -> String {
    escape(&genres.join(", "))
}

/// `<p>label: value</p>`, or nothing when unset
pub fn optional_line(label: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!("<p>{}: {}</p>", label, escape(v)))
        .unwrap_or_default()
}

pub fn optional_link(label: &str, href: Option<&str>) -> String {
    href.map(|h| format!(r#"<p><a href="{href}">{label}</a></p>"#, href = escape(h), label = label))
        .unwrap_or_default()
}
