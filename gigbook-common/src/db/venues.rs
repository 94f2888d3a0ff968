//! Venue queries and mutations

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::types::Json;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use tracing::{info, warn};

use crate::aggregation::{group_by_area, name_matches, partition_shows};
use crate::db::models::{SearchResults, Venue, VenueArea, VenueDetail, VenueFields, VenueLocation};
use crate::db::shows::venue_show_entries;
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, website, facebook_link, \
                             image_link, genres, seeking_talent, seeking_description";

/// Venues grouped by exact (city, state), first-seen order by ascending id
pub async fn list_venues_grouped(pool: &SqlitePool) -> Result<Vec<VenueArea>> {
    let rows = sqlx::query_as::<_, (i64, String, String, String)>(
        "SELECT id, name, city, state FROM venues ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(group_by_area(rows.into_iter().map(|(id, name, city, state)| {
        VenueLocation {
            id,
            name,
            city,
            state,
        }
    })))
}

/// Case-insensitive substring search on venue name
///
/// The term is matched as given; surrounding whitespace is significant.
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults<Venue>> {
    let venues = list_venues(pool).await?;

    Ok(SearchResults::new(
        venues
            .into_iter()
            .filter(|venue| name_matches(term, &venue.name))
            .collect(),
    ))
}

/// All venues, ascending id
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("SELECT {} FROM venues ORDER BY id ASC", VENUE_COLUMNS))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(venue_from_row)
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
}

pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    fetch_venue(pool, id).await
}

/// Venue fields plus its shows split around `now`
pub async fn get_venue_detail(
    pool: &SqlitePool,
    id: i64,
    now: DateTime<Utc>,
) -> Result<VenueDetail> {
    let mut conn = pool.acquire().await?;
    let venue = fetch_venue(&mut *conn, id).await?;
    let entries = venue_show_entries(&mut *conn, id).await?;

    Ok(VenueDetail {
        venue,
        shows: partition_shows(entries, now),
    })
}

pub async fn create_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<Venue> {
    insert_venue(pool, fields)
        .await
        .inspect(|venue| info!(venue_id = venue.id, name = %venue.name, "Created venue"))
        .inspect_err(|e| warn!(name = %fields.name, error = %e, "Failed to create venue"))
}

async fn insert_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<Venue> {
    fields.validate()?;

    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, website, facebook_link,
            image_link, genres, seeking_talent, seeking_description
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;

    Ok(venue_from_fields(id, fields.clone()))
}

/// Overwrite every field of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<()> {
    overwrite_venue(pool, id, fields)
        .await
        .inspect(|_| info!(venue_id = id, name = %fields.name, "Updated venue"))
        .inspect_err(|e| warn!(venue_id = id, error = %e, "Failed to update venue"))
}

async fn overwrite_venue(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<()> {
    fields.validate()?;

    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, address = ?, phone = ?, website = ?,
            facebook_link = ?, image_link = ?, genres = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.website)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(Json(&fields.genres))
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue together with its shows
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    remove_venue(pool, id)
        .await
        .inspect(|removed_shows| {
            info!(venue_id = id, removed_shows, "Deleted venue")
        })
        .inspect_err(|e| warn!(venue_id = id, error = %e, "Failed to delete venue"))
        .map(|_| ())
}

async fn remove_venue(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    let removed_shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(removed_shows)
}

async fn fetch_venue<'e, E>(executor: E, id: i64) -> Result<Venue>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(&format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS))
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", id)))?;

    Ok(venue_from_row(&row)?)
}

fn venue_from_row(row: &SqliteRow) -> std::result::Result<Venue, sqlx::Error> {
    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        image_link: row.try_get("image_link")?,
        genres: row.try_get::<Json<Vec<String>>, _>("genres")?.0,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

fn venue_from_fields(id: i64, fields: VenueFields) -> Venue {
    Venue {
        id,
        name: fields.name,
        city: fields.city,
        state: fields.state,
        address: fields.address,
        phone: fields.phone,
        website: fields.website,
        facebook_link: fields.facebook_link,
        image_link: fields.image_link,
        genres: fields.genres,
        seeking_talent: fields.seeking_talent,
        seeking_description: fields.seeking_description,
    }
}
