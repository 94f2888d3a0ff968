//! Demo fixtures
//!
//! Three venues, three artists and five shows. Ids are fixed (venues 1-3,
//! artists 4-6) so links in the demo data stay stable.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;

use crate::Result;

struct SampleVenue {
    id: i64,
    name: &'static str,
    genres: &'static [&'static str],
    address: &'static str,
    city: &'static str,
    state: &'static str,
    phone: &'static str,
    website: &'static str,
    facebook_link: &'static str,
    seeking_talent: bool,
    seeking_description: Option<&'static str>,
    image_link: &'static str,
}

struct SampleArtist {
    id: i64,
    name: &'static str,
    genres: &'static [&'static str],
    city: &'static str,
    state: &'static str,
    phone: &'static str,
    website: Option<&'static str>,
    facebook_link: Option<&'static str>,
    seeking_venue: bool,
    seeking_description: Option<&'static str>,
    image_link: &'static str,
}

const VENUES: [SampleVenue; 3] = [
    SampleVenue {
        id: 1,
        name: "The Musical Hop",
        genres: &["Jazz", "Reggae", "Swing", "Classical", "Folk"],
        address: "1015 Folsom Street",
        city: "San Francisco",
        state: "CA",
        phone: "123-123-1234",
        website: "https://www.themusicalhop.com",
        facebook_link: "https://www.facebook.com/TheMusicalHop",
        seeking_talent: true,
        seeking_description: Some(
            "We are on the lookout for a local artist to play every two weeks. Please call us.",
        ),
        image_link: "https://images.unsplash.com/photo-1543900694-133f37abaaa5?auto=format&fit=crop&w=400&q=60",
    },
    SampleVenue {
        id: 2,
        name: "The Dueling Pianos Bar",
        genres: &["Classical", "R&B", "Hip-Hop"],
        address: "335 Delancey Street",
        city: "New York",
        state: "NY",
        phone: "914-003-1132",
        website: "https://www.theduelingpianos.com",
        facebook_link: "https://www.facebook.com/theduelingpianos",
        seeking_talent: false,
        seeking_description: None,
        image_link: "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?auto=format&fit=crop&w=750&q=80",
    },
    SampleVenue {
        id: 3,
        name: "Park Square Live Music & Coffee",
        genres: &["Rock n Roll", "Jazz", "Classical", "Folk"],
        address: "34 Whiskey Moore Ave",
        city: "San Francisco",
        state: "CA",
        phone: "415-000-1234",
        website: "https://www.parksquarelivemusicandcoffee.com",
        facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee",
        seeking_talent: false,
        seeking_description: None,
        image_link: "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?auto=format&fit=crop&w=747&q=80",
    },
];

const ARTISTS: [SampleArtist; 3] = [
    SampleArtist {
        id: 4,
        name: "Guns N Petals",
        genres: &["Rock n Roll"],
        city: "San Francisco",
        state: "CA",
        phone: "326-123-5000",
        website: Some("https://www.gunsnpetalsband.com"),
        facebook_link: Some("https://www.facebook.com/GunsNPetals"),
        seeking_venue: true,
        seeking_description: Some("Looking for shows to perform at in the San Francisco Bay Area!"),
        image_link: "https://images.unsplash.com/photo-1549213783-8284d0336c4f?auto=format&fit=crop&w=300&q=80",
    },
    SampleArtist {
        id: 5,
        name: "Matt Quevedo",
        genres: &["Jazz"],
        city: "New York",
        state: "NY",
        phone: "300-400-5000",
        website: None,
        facebook_link: Some("https://www.facebook.com/mattquevedo923251523"),
        seeking_venue: false,
        seeking_description: None,
        image_link: "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?auto=format&fit=crop&w=334&q=80",
    },
    SampleArtist {
        id: 6,
        name: "The Wild Sax Band",
        genres: &["Jazz", "Classical"],
        city: "San Francisco",
        state: "CA",
        phone: "432-325-5432",
        website: None,
        facebook_link: None,
        seeking_venue: false,
        seeking_description: None,
        image_link: "https://images.unsplash.com/photo-1558369981-f9ca78462e61?auto=format&fit=crop&w=794&q=80",
    },
];

/// (venue_id, artist_id, start)
fn sample_shows() -> Vec<(i64, i64, DateTime<Utc>)> {
    let at = |y, mo, d, h, mi| Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single();
    [
        (1, 4, at(2019, 5, 21, 21, 30)),
        (3, 5, at(2019, 6, 15, 23, 0)),
        (3, 6, at(2035, 4, 1, 20, 0)),
        (3, 6, at(2035, 4, 8, 20, 0)),
        (3, 6, at(2035, 4, 15, 20, 0)),
    ]
    .into_iter()
    .filter_map(|(venue, artist, start)| start.map(|s| (venue, artist, s)))
    .collect()
}

/// Load the demo fixtures when venues, artists and shows are all empty
///
/// Any existing row leaves the store untouched, since the fixed fixture ids
/// could collide with it. Returns `true` if fixtures were inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM venues)
              + (SELECT COUNT(*) FROM artists)
              + (SELECT COUNT(*) FROM shows)",
    )
    .fetch_one(pool)
    .await?;
    if existing > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for venue in &VENUES {
        sqlx::query(
            r#"
            INSERT INTO venues (
                id, name, city, state, address, phone, website, facebook_link,
                image_link, genres, seeking_talent, seeking_description
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(venue.id)
        .bind(venue.name)
        .bind(venue.city)
        .bind(venue.state)
        .bind(venue.address)
        .bind(venue.phone)
        .bind(venue.website)
        .bind(venue.facebook_link)
        .bind(venue.image_link)
        .bind(Json(venue.genres))
        .bind(venue.seeking_talent)
        .bind(venue.seeking_description)
        .execute(&mut *tx)
        .await?;
    }

    for artist in &ARTISTS {
        sqlx::query(
            r#"
            INSERT INTO artists (
                id, name, city, state, phone, website, facebook_link,
                image_link, genres, seeking_venue, seeking_description
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(artist.id)
        .bind(artist.name)
        .bind(artist.city)
        .bind(artist.state)
        .bind(artist.phone)
        .bind(artist.website)
        .bind(artist.facebook_link)
        .bind(artist.image_link)
        .bind(Json(artist.genres))
        .bind(artist.seeking_venue)
        .bind(artist.seeking_description)
        .execute(&mut *tx)
        .await?;
    }

    for (venue_id, artist_id, start_time) in sample_shows() {
        sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
            .bind(venue_id)
            .bind(artist_id)
            .bind(start_time)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(
        venues = VENUES.len(),
        artists = ARTISTS.len(),
        "Loaded sample fixtures"
    );

    Ok(true)
}
