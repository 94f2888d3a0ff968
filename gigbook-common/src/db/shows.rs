//! Show booking and listing

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use tracing::{info, warn};

use crate::db::models::{NewShow, Show, ShowEntry, ShowListing};
use crate::{Error, Result};

/// Book a show. Both parents must exist.
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<Show> {
    insert_show(pool, show)
        .await
        .inspect(|created| {
            info!(
                show_id = created.id,
                venue_id = created.venue_id,
                artist_id = created.artist_id,
                start_time = %created.start_time,
                "Created show"
            )
        })
        .inspect_err(|e| {
            warn!(
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                error = %e,
                "Failed to create show"
            )
        })
}

async fn insert_show(pool: &SqlitePool, show: &NewShow) -> Result<Show> {
    let mut tx = pool.begin().await?;

    let venue_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(show.venue_id)
        .fetch_one(&mut *tx)
        .await?;
    if !venue_exists {
        return Err(Error::NotFound(format!("venue {}", show.venue_id)));
    }

    let artist_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
            .bind(show.artist_id)
            .fetch_one(&mut *tx)
            .await?;
    if !artist_exists {
        return Err(Error::NotFound(format!("artist {}", show.artist_id)));
    }

    let id = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;

    Ok(Show {
        id,
        venue_id: show.venue_id,
        artist_id: show.artist_id,
        start_time: show.start_time,
    })
}

/// Every show with its venue and artist, ordered by start time then id
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time ASC, s.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let listings = rows
        .iter()
        .map(|row| {
            Ok(ShowListing {
                show_id: row.try_get("id")?,
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

    Ok(listings)
}

/// Shows at a venue, with the performing artist as partner
pub(crate) async fn venue_show_entries<'e, E>(executor: E, venue_id: i64) -> Result<Vec<ShowEntry>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT s.id AS show_id, a.id AS partner_id, a.name AS partner_name,
               a.image_link AS partner_image_link, s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        "#,
    )
    .bind(venue_id)
    .fetch_all(executor)
    .await?;

    Ok(rows
        .iter()
        .map(show_entry_from_row)
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
}

/// Shows by an artist, with the hosting venue as partner
pub(crate) async fn artist_show_entries<'e, E>(executor: E, artist_id: i64) -> Result<Vec<ShowEntry>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT s.id AS show_id, v.id AS partner_id, v.name AS partner_name,
               v.image_link AS partner_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        "#,
    )
    .bind(artist_id)
    .fetch_all(executor)
    .await?;

    Ok(rows
        .iter()
        .map(show_entry_from_row)
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
}

fn show_entry_from_row(row: &SqliteRow) -> std::result::Result<ShowEntry, sqlx::Error> {
    Ok(ShowEntry {
        show_id: row.try_get("show_id")?,
        partner_id: row.try_get("partner_id")?,
        partner_name: row.try_get("partner_name")?,
        partner_image_link: row.try_get("partner_image_link")?,
        start_time: row.try_get("start_time")?,
    })
}
