//! Artist queries and mutations

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use tracing::{info, warn};

use crate::aggregation::{name_matches, partition_shows};
use crate::db::models::{Artist, ArtistDetail, ArtistFields, ArtistSummary, SearchResults};
use crate::db::shows::artist_show_entries;
use crate::{Error, Result};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, website, facebook_link, \
                              image_link, genres, seeking_venue, seeking_description";

/// Artist ids and names, ascending id
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistSummary>> {
    let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM artists ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistSummary { id, name })
        .collect())
}

/// Case-insensitive substring search on artist name
///
/// The term is matched as given; surrounding whitespace is significant.
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults<Artist>> {
    let artists = list_all_artists(pool).await?;

    Ok(SearchResults::new(
        artists
            .into_iter()
            .filter(|artist| name_matches(term, &artist.name))
            .collect(),
    ))
}

/// All artists with every field, ascending id
async fn list_all_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {} FROM artists ORDER BY id ASC", ARTIST_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(artist_from_row)
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
}

pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    fetch_artist(pool, id).await
}

/// Artist fields plus their shows split around `now`
pub async fn get_artist_detail(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<ArtistDetail> {
    let mut conn = pool.acquire().await?;
    let artist = fetch_artist(&mut *conn, id).await?;
    let entries = artist_show_entries(&mut *conn, id).await?;

    Ok(ArtistDetail {
        artist,
        shows: partition_shows(entries, now),
    })
}

pub async fn create_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<Artist> {
    insert_artist(pool, fields)
        .await
        .inspect(|artist| info!(artist_id = artist.id, name = %artist.name, "Created artist"))
        .inspect_err(|e| warn!(name = %fields.name, error = %e, "Failed to create artist"))
}

async fn insert_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<Artist> {
    fields.validate()?;

    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, website, facebook_link,
            image_link, genres, seeking_venue, seeking_description
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    let ArtistFields {
        name,
        city,
        state,
        phone,
        website,
        facebook_link,
        image_link,
        genres,
        seeking_venue,
        seeking_description,
    } = fields.clone();

    Ok(Artist {
        id,
        name,
        city,
        state,
        phone,
        website,
        facebook_link,
        image_link,
        genres,
        seeking_venue,
        seeking_description,
    })
}

/// Overwrite every field of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, fields: &ArtistFields) -> Result<()> {
    overwrite_artist(pool, id, fields)
        .await
        .inspect(|_| info!(artist_id = id, name = %fields.name, "Updated artist"))
        .inspect_err(|e| warn!(artist_id = id, error = %e, "Failed to update artist"))
}

async fn overwrite_artist(pool: &SqlitePool, id: i64, fields: &ArtistFields) -> Result<()> {
    fields.validate()?;

    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, city = ?, state = ?, phone = ?, website = ?, facebook_link = ?,
            image_link = ?, genres = ?, seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete an artist together with their shows
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<()> {
    remove_artist(pool, id)
        .await
        .inspect(|removed_shows| {
            info!(artist_id = id, removed_shows, "Deleted artist")
        })
        .inspect_err(|e| warn!(artist_id = id, error = %e, "Failed to delete artist"))
        .map(|_| ())
}

async fn remove_artist(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let removed_shows = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(removed_shows)
}

async fn fetch_artist<'e, E>(executor: E, id: i64) -> Result<Artist>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(&format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS))
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;

    Ok(artist_from_row(&row)?)
}

fn artist_from_row(row: &SqliteRow) -> std::result::Result<Artist, sqlx::Error> {
    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        genres: row.try_get::<Json<Vec<String>>, _>("genres")?.0,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}
